use armada::{AttackOutcome, CellSetError, Coord, GameError, Ship, StandardBoard};

fn coords(cells: &[(u8, u8)]) -> Vec<Coord> {
    cells.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

#[test]
fn test_place_ship_records_cells() {
    let mut board = StandardBoard::new();
    let ship = Ship::new(3).unwrap();
    board
        .place_ship(ship, coords(&[(0, 0), (0, 1), (0, 2)]))
        .unwrap();
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.ships()[0].cells(), &coords(&[(0, 0), (0, 1), (0, 2)])[..]);
}

#[test]
fn test_length_mismatch_rejected() {
    let mut board = StandardBoard::new();
    let ship = Ship::new(3).unwrap();
    assert_eq!(
        board.place_ship(ship, coords(&[(0, 0), (0, 1)])).unwrap_err(),
        GameError::LengthMismatch
    );
    assert!(board.ships().is_empty());
}

#[test]
fn test_adjacent_placement_rejected() {
    let mut board = StandardBoard::new();
    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(0, 0), (0, 1)]))
        .unwrap();
    // (0,2) touches (0,1) edge-on
    assert_eq!(
        board
            .place_ship(Ship::new(2).unwrap(), coords(&[(0, 2), (0, 3)]))
            .unwrap_err(),
        GameError::TooClose
    );
    // (1,2) touches (0,1) diagonally
    assert_eq!(
        board
            .place_ship(Ship::new(2).unwrap(), coords(&[(1, 2), (1, 3)]))
            .unwrap_err(),
        GameError::TooClose
    );
    // overlap is also Chebyshev distance 0
    assert_eq!(
        board
            .place_ship(Ship::new(2).unwrap(), coords(&[(0, 1), (0, 2)]))
            .unwrap_err(),
        GameError::TooClose
    );
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_separated_placement_accepted() {
    let mut board = StandardBoard::new();
    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(0, 0), (0, 1)]))
        .unwrap();
    // two cells of clearance along every axis
    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(2, 2), (2, 3)]))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let mut board = StandardBoard::new();
    let err = board
        .place_ship(Ship::new(2).unwrap(), coords(&[(9, 9), (9, 10)]))
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::Cells(CellSetError::OutOfBounds { x: 9, y: 10 })
    ));
    assert!(board.ships().is_empty());
}

#[test]
fn test_attack_hits_and_wounds_exactly_one_ship() {
    let mut board = StandardBoard::new();
    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(1, 1), (1, 2)]))
        .unwrap();
    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(5, 5), (5, 6)]))
        .unwrap();

    let outcome = board.receive_attack(Coord::new(1, 1)).unwrap();
    assert_eq!(
        outcome,
        AttackOutcome::Hit {
            length: 2,
            sunk: false
        }
    );
    assert_eq!(board.ships()[0].ship().hits(), 1);
    assert_eq!(board.ships()[1].ship().hits(), 0);
}

#[test]
fn test_attack_miss_recorded_once() {
    let mut board = StandardBoard::new();
    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(0, 0), (0, 1)]))
        .unwrap();

    assert_eq!(
        board.receive_attack(Coord::new(5, 5)).unwrap(),
        AttackOutcome::Miss
    );
    assert!(board.missed_attacks().contains(Coord::new(5, 5)).unwrap());
    assert_eq!(board.missed_attacks().len(), 1);

    // the board itself does not police re-attacks; the record stays a set
    assert_eq!(
        board.receive_attack(Coord::new(5, 5)).unwrap(),
        AttackOutcome::Miss
    );
    assert_eq!(board.missed_attacks().len(), 1);
}

#[test]
fn test_all_ships_sunk() {
    let mut board = StandardBoard::new();
    assert!(board.all_ships_sunk(), "vacuously true with no ships");

    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(0, 0), (0, 1)]))
        .unwrap();
    board.receive_attack(Coord::new(0, 0)).unwrap();
    assert!(!board.all_ships_sunk());
    board.receive_attack(Coord::new(0, 1)).unwrap();
    assert!(board.all_ships_sunk());
}

#[test]
fn test_sink_two_cell_ship_end_to_end() {
    let mut board = StandardBoard::new();
    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(0, 0), (0, 1)]))
        .unwrap();

    assert_eq!(
        board.receive_attack(Coord::new(0, 0)).unwrap(),
        AttackOutcome::Hit {
            length: 2,
            sunk: false
        }
    );
    assert_eq!(
        board.receive_attack(Coord::new(0, 1)).unwrap(),
        AttackOutcome::Hit {
            length: 2,
            sunk: true
        }
    );
    assert!(board.all_ships_sunk());
}

#[test]
fn test_reset_clears_everything() {
    let mut board = StandardBoard::new();
    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(0, 0), (0, 1)]))
        .unwrap();
    board.receive_attack(Coord::new(4, 4)).unwrap();

    board.reset();
    assert!(board.ships().is_empty());
    assert!(board.missed_attacks().is_empty());
    // the vacated cells are placeable again
    board
        .place_ship(Ship::new(2).unwrap(), coords(&[(0, 0), (0, 1)]))
        .unwrap();
}
