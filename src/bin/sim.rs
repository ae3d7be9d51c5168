#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use armada::{place_random_fleet, StandardPlayer};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = StandardPlayer::computer();
    let mut p2 = StandardPlayer::computer();
    place_random_fleet(p1.board_mut(), &mut rng1).map_err(|e| anyhow::anyhow!(e))?;
    place_random_fleet(p2.board_mut(), &mut rng2).map_err(|e| anyhow::anyhow!(e))?;

    let mut rounds = 0usize;
    let winner;
    'game: loop {
        rounds += 1;
        if rounds > 200 {
            anyhow::bail!("simulation did not terminate");
        }
        // attacker keeps the turn while it hits
        loop {
            let outcome = p1
                .computer_attack(p2.board_mut(), &mut rng1)
                .map_err(|e| anyhow::anyhow!(e))?;
            if p2.board().all_ships_sunk() {
                winner = "player1";
                break 'game;
            }
            if !outcome.is_hit() {
                break;
            }
        }
        loop {
            let outcome = p2
                .computer_attack(p1.board_mut(), &mut rng2)
                .map_err(|e| anyhow::anyhow!(e))?;
            if p1.board().all_ships_sunk() {
                winner = "player2";
                break 'game;
            }
            if !outcome.is_hit() {
                break;
            }
        }
    }

    let result = json!({
        "player1": {
            "status": if winner == "player1" { "Won" } else { "Lost" },
            "moves": p1.previous_moves().len(),
        },
        "player2": {
            "status": if winner == "player2" { "Won" } else { "Lost" },
            "moves": p2.previous_moves().len(),
        },
        "rounds": rounds,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
