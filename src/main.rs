#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use armada::{
    coord_to_string, init_logging, parse_coord, place_random_fleet, print_board, AttackOutcome,
    Coord, GameError, GameStatus, Ship, ShipClass, StandardBoard, StandardGame, StandardPlayer,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Drive a board from line commands on stdin, one JSON response per line.
    Script,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => run_play(seed),
        Commands::Script => run_script(),
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn run_play(seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = make_rng(seed);

    let mut game = StandardGame::new();
    place_random_fleet(game.human_mut().board_mut(), &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    place_random_fleet(game.computer_mut().board_mut(), &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    let stdin = io::stdin();
    'game: loop {
        println!("\nEnemy waters:");
        print_board(game.computer().board(), game.human().previous_moves(), false);
        println!("\nYour fleet:");
        print_board(game.human().board(), game.computer().previous_moves(), true);

        // human keeps firing until a miss
        let outcome = loop {
            print!("Enter target (e.g. B7): ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }
            let Some(coord) = parse_coord(line.trim()) else {
                println!("Invalid coordinate");
                continue;
            };
            match game.human_attack(coord) {
                Ok(outcome) => break outcome,
                Err(GameError::DuplicateAttack) => {
                    println!("You already fired there.");
                }
                Err(e) => {
                    println!("Error: {}", e);
                }
            }
        };
        report_shot("You", outcome);
        if game.status() == GameStatus::Won {
            println!("\nVictory! The enemy fleet is at the bottom of the sea.");
            break 'game;
        }
        if outcome.is_hit() {
            continue 'game;
        }

        // computer keeps firing until a miss
        loop {
            let outcome = game.computer_attack(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let shot = game
                .computer()
                .previous_moves()
                .last()
                .copied()
                .unwrap_or(Coord::new(0, 0));
            println!("Computer fires at {}.", coord_to_string(shot));
            report_shot("Computer", outcome);
            if game.status() == GameStatus::Lost {
                println!("\nEnemy waters:");
                print_board(game.computer().board(), game.human().previous_moves(), false);
                println!("\nYour fleet:");
                print_board(game.human().board(), game.computer().previous_moves(), true);
                println!("\nDefeat. Your fleet has been destroyed.");
                break 'game;
            }
            if !outcome.is_hit() {
                break;
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn report_shot(who: &str, outcome: AttackOutcome) {
    match outcome {
        AttackOutcome::Hit { length, sunk: true } => {
            println!("{}: HIT, {} sunk!", who, ShipClass::describe(length));
        }
        AttackOutcome::Hit { .. } => println!("{}: HIT", who),
        AttackOutcome::Miss => println!("{}: miss", who),
    }
}

/// Exit codes for the script harness, one per error kind.
#[cfg(feature = "std")]
fn exit_code(err: &GameError) -> i32 {
    match err {
        GameError::InvalidLength => 2,
        GameError::LengthMismatch => 3,
        GameError::TooClose => 4,
        GameError::DuplicateAttack => 5,
        GameError::WrongPlayerKind => 6,
        GameError::PlacementExhausted => 7,
        GameError::Cells(_) => 8,
    }
}

#[cfg(feature = "std")]
fn fail(err: GameError) -> ! {
    println!("{}", json!({ "error": err.to_string() }));
    std::process::exit(exit_code(&err));
}

#[cfg(feature = "std")]
fn fail_parse(msg: &str) -> ! {
    println!("{}", json!({ "error": msg }));
    std::process::exit(1);
}

#[cfg(feature = "std")]
fn parse_xy(s: &str) -> Option<Coord> {
    let (x, y) = s.split_once(',')?;
    Some(Coord::new(x.parse().ok()?, y.parse().ok()?))
}

#[cfg(feature = "std")]
fn outcome_json(outcome: AttackOutcome) -> serde_json::Value {
    match outcome {
        AttackOutcome::Hit { length, sunk } => {
            json!({ "result": "hit", "shipLength": length, "sunk": sunk })
        }
        AttackOutcome::Miss => json!({ "result": "miss" }),
    }
}

#[cfg(feature = "std")]
fn run_script() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut board = StandardBoard::new();
    let mut attacker = StandardPlayer::human();

    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        match cmd {
            "place" => {
                let Some(length) = parts.next().and_then(|s| s.parse::<usize>().ok()) else {
                    fail_parse("place wants a ship length");
                };
                let cells: Option<Vec<Coord>> = parts.map(parse_xy).collect();
                let Some(cells) = cells else {
                    fail_parse("place wants x,y coordinate pairs");
                };
                let ship = match Ship::new(length) {
                    Ok(ship) => ship,
                    Err(e) => fail(e),
                };
                match board.place_ship(ship, cells) {
                    Ok(()) => println!("{}", json!({ "ok": true })),
                    Err(e) => fail(e),
                }
            }
            "attack" => {
                let coord = parts
                    .next()
                    .and_then(|x| x.parse::<u8>().ok())
                    .and_then(|x| {
                        parts
                            .next()
                            .and_then(|y| y.parse::<u8>().ok())
                            .map(|y| Coord::new(x, y))
                    });
                let Some(coord) = coord else {
                    fail_parse("attack wants x and y");
                };
                match attacker.attack(&mut board, coord) {
                    Ok(outcome) => println!("{}", outcome_json(outcome)),
                    Err(e) => fail(e),
                }
            }
            "status" => {
                let status = if board.all_ships_sunk() {
                    "all_sunk"
                } else {
                    "in_progress"
                };
                println!(
                    "{}",
                    json!({
                        "status": status,
                        "ships": board.ships().len(),
                        "misses": board.missed_attacks().len(),
                    })
                );
            }
            "quit" => break,
            _ => fail_parse("unknown command"),
        }
    }
    Ok(())
}
