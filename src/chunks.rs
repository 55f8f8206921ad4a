//! Day 10: syntax scoring for the navigation subsystem.

use tracing::{debug, info};

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Complete,
    /// First closer that did not match the innermost open chunk.
    Corrupted { found: char, expected: Option<char> },
    /// Closers needed, innermost first.
    Incomplete { completion: String },
}

fn closer_of(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

pub fn corruption_points(close: char) -> u64 {
    match close {
        ')' => 3,
        ']' => 57,
        '}' => 1197,
        '>' => 25137,
        _ => 0,
    }
}

fn completion_points(close: char) -> u64 {
    match close {
        ')' => 1,
        ']' => 2,
        '}' => 3,
        '>' => 4,
        _ => 0,
    }
}

pub fn check(line: &str) -> Line {
    let mut open = vec![];
    for ch in line.chars() {
        if let Some(close) = closer_of(ch) {
            open.push(close);
        } else if open.last() == Some(&ch) {
            open.pop();
        } else {
            return Line::Corrupted {found: ch, expected: open.last().copied()};
        }
    }
    if open.is_empty() {
        Line::Complete
    } else {
        Line::Incomplete {completion: open.iter().rev().collect()}
    }
}

/// `None` when the score does not fit in a `u64` (about 27 closers).
pub fn completion_score(completion: &str) -> Option<u64> {
    completion.chars().try_fold(0u64, |acc, ch| acc.checked_mul(5)?.checked_add(completion_points(ch)))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scores {
    pub corrupted: u64,
    pub completion_median: Option<u64>,
}

fn is_bracket(ch: char) -> bool {
    closer_of(ch).is_some() || corruption_points(ch) != 0
}

/// Characters other than the eight brackets, anywhere in any line, make the whole input unreadable.
pub fn score(input: &str) -> Result<Scores> {
    let mut corrupted = 0;
    let mut completions = vec![];
    for (ix, line) in input.trim().lines().enumerate() {
        let line = line.trim();
        if !line.chars().all(is_bracket) {return Err(PuzzleError::Parse(BadLine::new(ix, line)))}
        match check(line) {
            Line::Complete => (),
            Line::Corrupted {found, expected} => {
                debug!(line = ix + 1, %found, ?expected, "corrupted");
                corrupted += corruption_points(found);
            },
            Line::Incomplete {completion} => completions.push(
                completion_score(&completion).ok_or(PuzzleError::Overflow("scoring a completion"))?
            ),
        }
    }
    completions.sort_unstable();
    // lower median on an even count
    let completion_median = completions.get(completions.len().saturating_sub(1) / 2).copied();
    Ok(Scores {corrupted, completion_median})
}

pub fn run(part: u8, input: &str, _options: &Options) -> Result<String> {
    let scores = score(input)?;
    info!(?scores, "syntax scores");
    if part == 1 {
        Ok(scores.corrupted.to_string())
    } else {
        scores.completion_median.map(|n| n.to_string()).ok_or(PuzzleError::NoIncompleteLines)
    }
}
