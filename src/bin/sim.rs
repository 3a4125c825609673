use battleship::{new_game, GameConfig, Hunter, DEFAULT_ARMOR, DEFAULT_BOARD_SIZE};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [size] [armor]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_BOARD_SIZE,
    };
    let armor: u32 = match args.get(3) {
        Some(a) => a.parse()?,
        None => DEFAULT_ARMOR,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = new_game(&mut rng, &GameConfig { size, armor }).map_err(|e| anyhow::anyhow!(e))?;
    let (row, col) = game.ship().position();

    let mut hunter = Hunter::new(&mut rng, size);
    let shots = hunter.play(&mut game).map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "ship": [row, col],
        "armor": armor,
        "size": size,
        "shots": shots,
        "over": game.is_over(),
        "board": game.board().render(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
