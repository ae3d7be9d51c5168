use armada::{
    place_random_fleet, Coord, GameStatus, Ship, StandardGame, StandardPlayer, Turn, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(x: u8, y: u8) -> Coord {
    Coord::new(x, y)
}

#[test]
fn test_turn_passes_on_miss_and_holds_on_hit() {
    let mut game = StandardGame::new();
    game.human_mut()
        .board_mut()
        .place_ship(Ship::new(2).unwrap(), vec![c(0, 0), c(0, 1)])
        .unwrap();
    game.computer_mut()
        .board_mut()
        .place_ship(Ship::new(2).unwrap(), vec![c(5, 5), c(5, 6)])
        .unwrap();

    assert_eq!(game.turn(), Turn::Human);
    game.human_attack(c(5, 5)).unwrap();
    assert_eq!(game.turn(), Turn::Human, "a hit keeps the turn");
    game.human_attack(c(9, 9)).unwrap();
    assert_eq!(game.turn(), Turn::Computer, "a miss passes the turn");
}

#[test]
fn test_sinking_the_fleet_wins() {
    let mut game = StandardGame::new();
    game.human_mut()
        .board_mut()
        .place_ship(Ship::new(2).unwrap(), vec![c(0, 0), c(0, 1)])
        .unwrap();
    game.computer_mut()
        .board_mut()
        .place_ship(Ship::new(2).unwrap(), vec![c(5, 5), c(5, 6)])
        .unwrap();

    assert_eq!(game.status(), GameStatus::InProgress);
    game.human_attack(c(5, 5)).unwrap();
    game.human_attack(c(5, 6)).unwrap();
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_computer_can_win() {
    let mut game = StandardGame::new();
    // a single short ship for each side; let the engine do the rest
    game.human_mut()
        .board_mut()
        .place_ship(Ship::new(2).unwrap(), vec![c(3, 3), c(3, 4)])
        .unwrap();
    game.computer_mut()
        .board_mut()
        .place_ship(Ship::new(2).unwrap(), vec![c(6, 6), c(6, 7)])
        .unwrap();

    let mut rng = SmallRng::seed_from_u64(11);
    let mut shots = 0usize;
    while game.status() == GameStatus::InProgress {
        shots += 1;
        assert!(shots <= 200, "game did not terminate");
        game.computer_attack(&mut rng).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_full_game_between_two_engines() {
    let mut rng1 = SmallRng::seed_from_u64(123);
    let mut rng2 = SmallRng::seed_from_u64(321);
    let mut p1 = StandardPlayer::computer();
    let mut p2 = StandardPlayer::computer();
    place_random_fleet(p1.board_mut(), &mut rng1).unwrap();
    place_random_fleet(p2.board_mut(), &mut rng2).unwrap();

    let fleet_cells: usize = FLEET.iter().map(|class| class.length()).sum();
    assert_eq!(
        p1.board().ships().iter().map(|s| s.cells().len()).sum::<usize>(),
        fleet_cells
    );

    let mut rounds = 0usize;
    let winner;
    'game: loop {
        rounds += 1;
        assert!(rounds <= 200, "game took too many rounds");
        loop {
            let outcome = p1.computer_attack(p2.board_mut(), &mut rng1).unwrap();
            if p2.board().all_ships_sunk() {
                winner = 1;
                break 'game;
            }
            if !outcome.is_hit() {
                break;
            }
        }
        loop {
            let outcome = p2.computer_attack(p1.board_mut(), &mut rng2).unwrap();
            if p1.board().all_ships_sunk() {
                winner = 2;
                break 'game;
            }
            if !outcome.is_hit() {
                break;
            }
        }
    }

    let (won, lost) = if winner == 1 { (&p1, &p2) } else { (&p2, &p1) };
    // the winner needed at least one shot per enemy ship cell
    assert!(won.previous_moves().len() >= fleet_cells);
    assert!(lost.board().all_ships_sunk());
}
