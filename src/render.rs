#![cfg(feature = "std")]

//! Text rendering and coordinate parsing for the CLI.

use std::string::String;

use num_traits::{PrimInt, Unsigned, Zero};

use crate::board::Board;
use crate::common::Coord;

/// `B7`-style label for a cell: column letter, then 1-based row.
pub fn coord_to_string(cell: Coord) -> String {
    let col = (b'A' + cell.y) as char;
    std::format!("{}{}", col, cell.x + 1)
}

/// Parse a `B7`-style label. Returns `None` on malformed input; bounds are
/// the board's check.
pub fn parse_coord(input: &str) -> Option<Coord> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = col_ch as u8 - b'A';
    let row_str: String = chars.collect();
    let row: u8 = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

/// Print `board` as seen by its owner. Cells the attacker has hit show `X`,
/// recorded misses `o`, own ships `S` when `reveal` is set, open water `.`.
pub fn print_board<T, const N: usize>(board: &Board<T, N>, attacker_moves: &[Coord], reveal: bool)
where
    T: PrimInt + Unsigned + Zero,
{
    std::print!("   ");
    for y in 0..N as u8 {
        std::print!(" {}", (b'A' + y) as char);
    }
    std::println!();
    for x in 0..N as u8 {
        std::print!("{:2} ", x + 1);
        for y in 0..N as u8 {
            let cell = Coord::new(x, y);
            let on_ship = board.ships().iter().any(|p| p.contains(cell));
            let ch = if on_ship && attacker_moves.contains(&cell) {
                'X'
            } else if board.missed_attacks().contains(cell).unwrap_or(false) {
                'o'
            } else if reveal && on_ship {
                'S'
            } else {
                '.'
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
}
