//! Day 6: lanternfish population growth.
//!
//! Fish with the same timer behave identically, so only the number of fish per
//! timer value is tracked.

use tracing::{debug, info};

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

pub const SHORT_RUN: usize = 80;
pub const LONG_RUN: usize = 256;

/// Timer a parent resets to after spawning.
const RESET: usize = 6;
/// Timer of a newborn.
const NEWBORN: usize = 8;

pub type Buckets = [u64; NEWBORN + 1];

pub fn parse(input: &str) -> Result<Buckets> {
    let mut buckets = [0; NEWBORN + 1];
    let line = input.trim();
    if line.is_empty() {return Err(PuzzleError::EmptyInput)}
    for s in line.split(',') {
        match s.trim().parse::<usize>() {
            Ok(timer) if timer <= NEWBORN => buckets[timer] += 1,
            _ => return Err(PuzzleError::Parse(BadLine::new(0, line))),
        }
    }
    Ok(buckets)
}

/// One day: every timer ticks down, zeros respawn at [`RESET`] and add a newborn.
pub fn tick(buckets: &mut Buckets) -> Result<()> {
    buckets.rotate_left(1);
    buckets[RESET] = buckets[RESET].checked_add(buckets[NEWBORN])
        .ok_or(PuzzleError::Overflow("growing the population"))?;
    Ok(())
}

pub fn project(mut buckets: Buckets, days: usize) -> Result<u64> {
    for day in 0 .. days {
        tick(&mut buckets)?;
        debug!(day = day + 1, ?buckets, "population");
    }
    buckets.iter().try_fold(0u64, |acc, &n| acc.checked_add(n))
        .ok_or(PuzzleError::Overflow("totalling the population"))
}

pub fn run(part: u8, input: &str, _options: &Options) -> Result<String> {
    let days = if part == 1 {SHORT_RUN} else {LONG_RUN};
    let fish = project(parse(input)?, days)?;
    info!(days, fish, "population projected");
    Ok(fish.to_string())
}
