//! Day 7: line the crabs up for the least fuel.

use itertools::{Itertools, MinMaxResult};
use tracing::info;

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cost {
    /// One unit per step.
    Linear,
    /// The n-th step costs n, so a move of n costs n(n+1)/2.
    Triangular,
}

impl Cost {
    /// `None` when the cost does not fit in a `u64`.
    pub fn of(self, distance: u64) -> Option<u64> {
        match self {
            Cost::Linear => Some(distance),
            // halve whichever factor is even so only the final product can overflow
            Cost::Triangular if distance % 2 == 0 => (distance / 2).checked_mul(distance + 1),
            Cost::Triangular => distance.checked_mul(distance / 2 + 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub position: i64,
    pub fuel: u64,
}

pub fn parse(input: &str) -> Result<Vec<i64>> {
    let line = input.trim();
    if line.is_empty() {return Err(PuzzleError::EmptyInput)}
    line.split(',').map(|s| s.trim().parse().map_err(|_| PuzzleError::Parse(BadLine::new(0, line)))).collect()
}

pub fn fuel_at(crabs: &[i64], position: i64, cost: Cost) -> Result<u64> {
    crabs.iter()
        .try_fold(0u64, |total, &crab| cost.of(crab.abs_diff(position))?.checked_add(total))
        .ok_or(PuzzleError::Overflow("adding up fuel"))
}

/// Tries every position from the leftmost to the rightmost crab, both included.
/// Ties go to the leftmost position.
pub fn cheapest(crabs: &[i64], cost: Cost) -> Result<Alignment> {
    let (lo, hi) = match crabs.iter().minmax() {
        MinMaxResult::NoElements => return Err(PuzzleError::EmptyInput),
        MinMaxResult::OneElement(&x) => (x, x),
        MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
    };
    (lo ..= hi)
        .map(|position| fuel_at(crabs, position, cost).map(|fuel| Alignment {position, fuel}))
        .process_results(|alignments| alignments.min_by_key(|alignment| (alignment.fuel, alignment.position)))?
        .ok_or(PuzzleError::EmptyInput)
}

pub fn run(part: u8, input: &str, _options: &Options) -> Result<String> {
    let cost = if part == 1 {Cost::Linear} else {Cost::Triangular};
    let best = cheapest(&parse(input)?, cost)?;
    info!(?cost, position = best.position, fuel = best.fuel, "least fuel");
    Ok(best.fuel.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = "16,1,2,0,4,2,7,1,2,14";

    #[test]
    fn demo_linear() {
        let crabs = parse(DEMO).unwrap();
        assert_eq!(cheapest(&crabs, Cost::Linear), Ok(Alignment {position: 2, fuel: 37}));
        assert_eq!(fuel_at(&crabs, 1, Cost::Linear), Ok(41));
        assert_eq!(fuel_at(&crabs, 10, Cost::Linear), Ok(71));
    }

    #[test]
    fn demo_triangular() {
        let crabs = parse(DEMO).unwrap();
        assert_eq!(cheapest(&crabs, Cost::Triangular), Ok(Alignment {position: 5, fuel: 168}));
        assert_eq!(fuel_at(&crabs, 2, Cost::Triangular), Ok(206));
    }

    #[test]
    fn both_ends_are_candidates() {
        // all at one spot: the only candidate is min == max
        assert_eq!(cheapest(&[4, 4, 4], Cost::Linear), Ok(Alignment {position: 4, fuel: 0}));
        // best at the rightmost crab
        assert_eq!(cheapest(&[0, 9, 9, 9], Cost::Linear), Ok(Alignment {position: 9, fuel: 9}));
        // best at the leftmost crab
        assert_eq!(cheapest(&[0, 0, 0, 9], Cost::Linear), Ok(Alignment {position: 0, fuel: 9}));
    }

    #[test]
    fn triangular_numbers() {
        assert_eq!((0 ..= 5).map(|n| Cost::Triangular.of(n)).collect::<Vec<_>>(), [0, 1, 3, 6, 10, 15].map(Some).to_vec());
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(cheapest(&[], Cost::Linear), Err(PuzzleError::EmptyInput));
        assert_eq!(parse(""), Err(PuzzleError::EmptyInput));
    }

    #[test]
    fn extreme_positions_overflow_cleanly() {
        // largest distance whose triangular cost still fits
        assert_eq!(Cost::Triangular.of(u32::MAX as u64), Some(9223372034707292160));
        assert_eq!(Cost::Triangular.of(u64::MAX), None);
        assert_eq!(fuel_at(&[i64::MIN, i64::MAX], 0, Cost::Linear), Ok(u64::MAX));
        assert_eq!(fuel_at(&[i64::MIN, i64::MAX, i64::MIN], 0, Cost::Linear), Err(PuzzleError::Overflow("adding up fuel")));
        assert_eq!(fuel_at(&[0, 1 << 40], 0, Cost::Triangular), Err(PuzzleError::Overflow("adding up fuel")));
        assert_eq!(cheapest(&[i64::MIN], Cost::Triangular), Ok(Alignment {position: i64::MIN, fuel: 0}));
    }
}
