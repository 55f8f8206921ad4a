//! Day 1: how often a sliding sum of depth readings goes up.

use tracing::info;

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

pub const SINGLE: usize = 1;
pub const TRIPLE: usize = 3;

pub fn parse(input: &str) -> Result<Vec<u32>> {
    input.trim().lines().enumerate()
        .map(|(ix, line)| line.trim().parse().map_err(|_| PuzzleError::Parse(BadLine::new(ix, line))))
        .collect()
}

/// Counts windows whose sum is larger than the window before.
///
/// Neighbouring windows share all but one reading, so comparing the reading
/// that enters with the one that leaves is enough.
pub fn count_increases(depths: &[u32], window: usize) -> Result<usize> {
    if window == 0 {return Err(PuzzleError::InvalidParameter("window length must be at least 1"))}
    if window >= depths.len() {return Ok(0)}
    Ok(depths.iter().zip(&depths[window ..]).filter(|(leaving, entering)| entering > leaving).count())
}

pub fn run(part: u8, input: &str, _options: &Options) -> Result<String> {
    let depths = parse(input)?;
    let increases = count_increases(&depths, if part == 1 {SINGLE} else {TRIPLE})?;
    info!(part, increases, "depth increases");
    Ok(increases.to_string())
}
