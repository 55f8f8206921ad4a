//! Day 4: bingo against the giant squid.

use bitvec::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

pub const SIDE: usize = 5;

/// Draw order printed on the gift when the input only carries boards.
pub const DEFAULT_DRAWS: [u8; 100] = [
    57, 9, 8, 30, 40, 62, 24, 70, 54, 73, 12, 3, 71, 95, 58, 88, 23, 81, 53, 80,
    22, 45, 98, 37, 18, 72, 14, 20, 66, 0, 19, 31, 82, 34, 55, 29, 27, 96, 48, 28,
    87, 83, 36, 26, 63, 21, 5, 46, 33, 86, 32, 56, 6, 38, 52, 16, 41, 74, 99, 77,
    13, 35, 65, 4, 78, 91, 90, 43, 1, 2, 64, 60, 94, 85, 61, 84, 42, 76, 68, 10,
    49, 89, 11, 17, 79, 69, 39, 50, 25, 51, 47, 93, 44, 92, 59, 75, 7, 97, 67, 15,
];

#[derive(Clone, Debug)]
pub struct Board {
    numbers: [u8; SIDE * SIDE],
    marked: BitArr!(for SIDE * SIDE, in u32),
    row_tally: [u8; SIDE],
    col_tally: [u8; SIDE],
}

impl Board {
    pub fn new(numbers: [u8; SIDE * SIDE]) -> Board {
        Board {numbers, marked: BitArray::ZERO, row_tally: [0; SIDE], col_tally: [0; SIDE]}
    }

    /// Marks every cell holding `draw`; true once any row or column is full.
    pub fn mark(&mut self, draw: u8) -> bool {
        let mut bingo = false;
        for ix in 0 .. SIDE * SIDE {
            if self.numbers[ix] != draw || self.marked[ix] {continue}
            self.marked.set(ix, true);
            let (row, col) = (ix / SIDE, ix % SIDE);
            self.row_tally[row] += 1;
            self.col_tally[col] += 1;
            bingo |= self.row_tally[row] as usize == SIDE || self.col_tally[col] as usize == SIDE;
        }
        bingo
    }

    pub fn unmarked_sum(&self) -> u32 {
        self.marked[.. SIDE * SIDE].iter_zeros().map(|ix| self.numbers[ix] as u32).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Win {
    pub board: usize,
    pub draw: u8,
    pub score: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Every board that won, in the order it won.
    pub wins: Vec<Win>,
}

impl Outcome {
    pub fn first(&self) -> Option<Win> {self.wins.first().copied()}
    pub fn last(&self) -> Option<Win> {self.wins.last().copied()}
}

fn parse_numbers<'a>(ix: usize, line: &'a str) -> impl Iterator<Item = Result<u8>> + 'a {
    line.split_ascii_whitespace().map(move |s| s.parse().map_err(|_| PuzzleError::Parse(BadLine::new(ix, line))))
}

/// Reads the draw line (if the first line has commas) and the boards.
pub fn parse(input: &str) -> Result<(Vec<u8>, Vec<Board>)> {
    let mut lines = input.trim().lines().enumerate().peekable();
    let draws = match lines.peek() {
        Some(&(ix, line)) if line.contains(',') => {
            lines.next();
            line.trim().split(',').map(|s|
                s.trim().parse().map_err(|_| PuzzleError::Parse(BadLine::new(ix, line)))
            ).collect::<Result<Vec<u8>>>()?
        },
        _ => DEFAULT_DRAWS.to_vec(),
    };

    let mut boards = vec![];
    let mut cells: Vec<u8> = Vec::with_capacity(SIDE * SIDE);
    let finish = |cells: &mut Vec<u8>, boards: &mut Vec<Board>| -> Result<()> {
        if cells.is_empty() {return Ok(())}
        let numbers: [u8; SIDE * SIDE] = cells.as_slice().try_into()
            .map_err(|_| PuzzleError::IncompleteBoard {board: boards.len(), cells: cells.len()})?;
        boards.push(Board::new(numbers));
        cells.clear();
        Ok(())
    };
    for (ix, line) in lines {
        if line.trim().is_empty() {
            finish(&mut cells, &mut boards)?;
            continue;
        }
        for n in parse_numbers(ix, line) {cells.push(n?)}
    }
    finish(&mut cells, &mut boards)?;
    if boards.is_empty() {return Err(PuzzleError::EmptyInput)}
    Ok((draws, boards))
}

/// Plays every draw against every board that has not won yet.
pub fn play(draws: &[u8], mut boards: Vec<Board>) -> Outcome {
    let mut won = FxHashSet::default();
    let mut outcome = Outcome::default();
    for &draw in draws {
        for (ix, board) in boards.iter_mut().enumerate() {
            if won.contains(&ix) {continue}
            if board.mark(draw) {
                won.insert(ix);
                let win = Win {board: ix, draw, score: board.unmarked_sum() * draw as u32};
                debug!(?win, "bingo");
                outcome.wins.push(win);
            }
        }
        if won.len() == boards.len() {break}
    }
    outcome
}

pub fn run(part: u8, input: &str, _options: &Options) -> Result<String> {
    let (draws, boards) = parse(input)?;
    let board_count = boards.len();
    let outcome = play(&draws, boards);
    info!(boards = board_count, winners = outcome.wins.len(), "bingo played");
    let win = if part == 1 {outcome.first()} else {outcome.last()};
    Ok(win.map_or_else(|| "no winner".to_string(), |win| win.score.to_string()))
}
