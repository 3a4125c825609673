use battleship::{Ship, ShipKind};

#[test]
fn test_basic_ship_sinks_on_first_hit() {
    let mut ship = Ship::basic(2, 3);
    assert_eq!(ship.kind(), ShipKind::Basic);
    assert_eq!(ship.position(), (2, 3));
    assert!(ship.alive());
    assert!(ship.take_hit());
    assert!(!ship.alive());
    assert_eq!(ship.hitpoints(), 0);
}

#[test]
fn test_armored_ship_needs_one_hit_per_armor() {
    let mut ship = Ship::armored(0, 1, 3);
    assert_eq!(ship.kind(), ShipKind::Armored);
    assert!(!ship.take_hit());
    assert!(!ship.take_hit());
    assert!(ship.alive());
    assert!(ship.take_hit());
    assert!(!ship.alive());
    // position is never touched by hits
    assert_eq!(ship.position(), (0, 1));
}

#[test]
fn test_hit_on_dead_ship_still_reports_destroyed() {
    let mut ship = Ship::basic(0, 0);
    assert!(ship.take_hit());
    assert!(ship.take_hit());
    assert_eq!(ship.hitpoints(), 0);
}

#[test]
fn test_zero_armor_is_dead_on_arrival() {
    let mut ship = Ship::armored(1, 1, 0);
    assert!(!ship.alive());
    assert!(ship.take_hit());
    assert_eq!(ship.hitpoints(), 0);
}
