//! Interactive console player and board rendering.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::{Board, Cell};
use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;
use crate::player::Player;

pub struct ConsolePlayer;

impl ConsolePlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a 1-based "row col" pair: exactly two tokens, both positive
/// integers. Returns the zero-based coordinate.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return None;
    }
    let row: i32 = tokens[0].parse().ok()?;
    let col: i32 = tokens[1].parse().ok()?;
    if row < 1 || col < 1 {
        return None;
    }
    Some(Coord::new(row - 1, col - 1))
}

fn glyph(cell: Cell, mask: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship => {
            if mask {
                'O'
            } else {
                '■'
            }
        }
        Cell::Miss => '.',
        Cell::Hit => 'X',
    }
}

/// Print `board` with 1-based row and column labels, masking unhit ship
/// cells when the board is hidden.
pub fn print_board(board: &Board) {
    print!("  |");
    for c in 1..=board.size() {
        print!(" {} |", c);
    }
    println!();
    for r in 0..board.size() {
        print!("{} |", r + 1);
        for c in 0..board.size() {
            let cell = board.cell(Coord::new(r, c));
            print!(" {} |", glyph(cell, board.hidden()));
        }
        println!();
    }
}

impl Player for ConsolePlayer {
    fn choose_target(&mut self, _rng: &mut SmallRng, _opponent: &Board) -> Coord {
        loop {
            print!("Your shot (row col): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            match parse_coord(line.trim()) {
                Some(coord) => return coord,
                None => println!("Enter exactly two positive numbers, e.g. 1 3"),
            }
        }
    }

    fn handle_shot_result(&mut self, target: Coord, result: ShotResult) {
        match result {
            ShotResult::Miss => println!("{} - miss.", target),
            ShotResult::Hit => println!("{} - hit! Shoot again.", target),
            ShotResult::Sunk => println!("{} - ship sunk! Shoot again.", target),
        }
    }

    fn handle_rejected_shot(&mut self, target: Coord, error: BoardError) {
        println!("{}: {}", target, error);
    }
}
