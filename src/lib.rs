//! # `gifts`
//!
//! The puzzle library behind the gifts in the submarine game: each gift hands
//! one day's puzzle input to this crate and shows whatever answer comes back.
//!
//! Every solver is a plain function over the text it is given. Nothing is
//! cached between calls; grids and simulations are built fresh per call and
//! dropped when the answer is returned.
//!
//! [`solve`] is the single entry point used by callers that only know a day
//! number; the per-day modules expose typed results for callers that want more
//! than the answer string.

use tracing::warn;

pub mod error;
pub mod grid;

pub mod sonar;
pub mod course;
pub mod diagnostic;
pub mod bingo;
pub mod vents;
pub mod population;
pub mod fuel;
pub mod segments;
pub mod basins;
pub mod chunks;
pub mod octopus;
pub mod origami;
pub mod polymer;

pub use error::{BadLine, PuzzleError, Result};
pub use grid::{Grid, Pos};

/// Knobs that change how input is treated, not what is computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Fail on malformed optional lines instead of skipping them.
    pub strict: bool,
    /// Day 3 word width; inferred from the first line when `None`.
    pub bit_width: Option<usize>,
    /// Day 11 part 2 gives up after this many steps.
    pub flash_step_limit: usize,
}

impl Default for Options {
    fn default() -> Options {
        Options {strict: false, bit_width: None, flash_step_limit: octopus::SYNC_STEP_LIMIT}
    }
}

impl Options {
    pub fn strict() -> Options {
        Options {strict: true, ..Options::default()}
    }

    /// Lines an optional-line parser skipped: logged and dropped, or fatal in strict mode.
    pub(crate) fn settle(&self, day: u8, skipped: &[BadLine]) -> Result<()> {
        if skipped.is_empty() {return Ok(())}
        if self.strict {
            return Err(PuzzleError::MalformedLines {count: skipped.len(), lines: skipped.to_vec()});
        }
        for bad in skipped {
            warn!(day, line = bad.line, text = %bad.text, "skipping malformed line");
        }
        Ok(())
    }
}

pub type Solver = fn(u8, &str, &Options) -> Result<String>;

/// Indexed by day - 1. Day 12 never got a gift.
pub const DAYS: [Option<Solver>; 14] = [
    Some(sonar::run), Some(course::run), Some(diagnostic::run), Some(bingo::run),
    Some(vents::run), Some(population::run), Some(fuel::run), Some(segments::run),
    Some(basins::run), Some(chunks::run), Some(octopus::run), None,
    Some(origami::run), Some(polymer::run),
];

/// Runs one part of one day's puzzle over `input`.
pub fn solve(day: u8, part: u8, input: &str, options: &Options) -> Result<String> {
    let solver = (day as usize).checked_sub(1)
        .and_then(|ix| DAYS.get(ix).copied().flatten())
        .ok_or(PuzzleError::UnknownDay(day))?;
    if part != 1 && part != 2 {return Err(PuzzleError::UnknownPart(part))}
    solver(part, input, options)
}
