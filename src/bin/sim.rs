#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_gym::{benchmark, Agent, Board, FloodHunt, RandomSearch};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    // Both agents face the same sequence of boards.
    let mut boards_rng = SmallRng::seed_from_u64(seed);
    let mut boards = Vec::with_capacity(games);
    for _ in 0..games {
        boards.push(Board::with_default_fleet(&mut boards_rng).map_err(|e| anyhow::anyhow!(e))?);
    }

    let trivial = benchmark(games, |i| {
        let rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        Agent::new(boards[i].clone(), RandomSearch::new(), rng).play_until_completion()
    })
    .map_err(|e| anyhow::anyhow!(e))?;

    let hunt = benchmark(games, |i| {
        let rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        Agent::new(boards[i].clone(), FloodHunt::new(), rng).play_until_completion()
    })
    .map_err(|e| anyhow::anyhow!(e))?;

    let winner = if hunt.mean < trivial.mean {
        "hunt"
    } else if trivial.mean < hunt.mean {
        "trivial"
    } else {
        "tie"
    };

    let result = json!({
        "trivial": trivial,
        "hunt": hunt,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
