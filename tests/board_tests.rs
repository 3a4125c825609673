use battleship::{Board, Cell};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(3);
    assert_eq!(board.size(), 3);
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(board.cell(r, c), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_in_bounds_edges() {
    let board = Board::new(5);
    assert!(board.in_bounds(0, 0));
    assert!(board.in_bounds(4, 4));
    assert!(!board.in_bounds(5, 0));
    assert!(!board.in_bounds(0, 5));
    assert!(!board.in_bounds(-1, 2));
    assert!(!board.in_bounds(2, -1));
    assert_eq!(board.cell(5, 5), None);
}

#[test]
fn test_render_flattens_rows() {
    let board = Board::new(2);
    assert_eq!(board.render(), ". . . . ");
    assert_eq!(board.to_string(), board.render());
    assert_eq!(board.rows(), ". .\n. .\n");
}

#[test]
fn test_zero_size_board() {
    let board = Board::new(0);
    assert!(!board.in_bounds(0, 0));
    assert_eq!(board.render(), "");
}

#[test]
fn test_cell_markers() {
    assert_eq!(Cell::Empty.as_char(), '.');
    assert_eq!(Cell::Miss.as_char(), 'o');
    assert_eq!(Cell::Hit.as_char(), 'H');
    assert_eq!(Cell::Destroyed.as_char(), 'X');
}
