//! Day 3: read power and life support figures out of the diagnostic report.
//!
//! Words are kept as their bit strings; every rule here is about counting
//! ones and zeros in one column at a time.

use tracing::{debug, info};

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

/// Word width of the real report.
pub const BIT_WIDTH: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub gamma: u64,
    pub epsilon: u64,
    pub oxygen: u64,
    pub co2: u64,
}

impl Report {
    pub fn power_consumption(&self) -> Result<u64> {
        self.gamma.checked_mul(self.epsilon).ok_or(PuzzleError::Overflow("multiplying gamma and epsilon"))
    }

    pub fn life_support(&self) -> Result<u64> {
        self.oxygen.checked_mul(self.co2).ok_or(PuzzleError::Overflow("multiplying the ratings"))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Keep {
    /// Most common bit, ties keep '1'.
    Majority,
    /// Least common bit, ties keep '0'.
    Minority,
}

/// Checks every word is exactly `width` characters of '0'/'1'.
pub fn parse(input: &str, width: usize) -> Result<Vec<&[u8]>> {
    if width == 0 || width > 64 {return Err(PuzzleError::InvalidParameter("bit width must be between 1 and 64"))}
    let words = input.trim().lines().enumerate().map(|(ix, line)| {
        let word = line.trim().as_bytes();
        if word.len() != width || !word.iter().all(|b| matches!(b, b'0' | b'1')) {
            return Err(PuzzleError::BitWidth(BadLine::new(ix, line), width));
        }
        Ok(word)
    }).collect::<Result<Vec<_>>>()?;
    if words.is_empty() {return Err(PuzzleError::EmptyInput)}
    Ok(words)
}

fn ones_at(words: &[&[u8]], ix: usize) -> usize {
    words.iter().filter(|word| word[ix] == b'1').count()
}

fn to_int(word: &[u8]) -> u64 {
    word.iter().fold(0, |acc, &b| 2 * acc + (b == b'1') as u64)
}

/// Shared width of a non-empty word list.
fn word_width(words: &[&[u8]]) -> Result<usize> {
    let width = words.first().map(|word| word.len()).ok_or(PuzzleError::EmptyInput)?;
    if width == 0 || width > 64 || words.iter().any(|word| word.len() != width) {
        return Err(PuzzleError::InvalidParameter("words must share one width between 1 and 64"));
    }
    Ok(width)
}

/// Gamma takes the strictly more common bit of each column; epsilon is its complement.
pub fn power(words: &[&[u8]]) -> Result<(u64, u64)> {
    let width = word_width(words)?;
    let gamma = (0 .. width).fold(0u64, |acc, ix| {
        let ones = ones_at(words, ix);
        2 * acc + (ones > words.len() - ones) as u64
    });
    let mask = if width == 64 {u64::MAX} else {(1 << width) - 1};
    Ok((gamma, !gamma & mask))
}

fn rating(words: &[&[u8]], keep: Keep) -> u64 {
    let mut left = words.to_vec();
    for ix in 0 .. words[0].len() {
        if left.len() == 1 {break}
        let ones = ones_at(&left, ix);
        let zeros = left.len() - ones;
        // a unanimous column would leave the minority filter with nothing
        if ones == 0 || zeros == 0 {continue}
        let wanted = match keep {
            Keep::Majority => if ones >= zeros {b'1'} else {b'0'},
            Keep::Minority => if zeros <= ones {b'0'} else {b'1'},
        };
        left.retain(|word| word[ix] == wanted);
        debug!(column = ix, left = left.len(), "filtered ratings");
    }
    to_int(left[0])
}

pub fn analyze(words: &[&[u8]]) -> Result<Report> {
    let (gamma, epsilon) = power(words)?;
    let report = Report {gamma, epsilon, oxygen: rating(words, Keep::Majority), co2: rating(words, Keep::Minority)};
    debug!(?report, "diagnostic report");
    Ok(report)
}

pub fn run(part: u8, input: &str, options: &Options) -> Result<String> {
    let width = match options.bit_width {
        Some(width) => width,
        None => input.trim().lines().next().map_or(BIT_WIDTH, |line| line.trim().len()),
    };
    let report = analyze(&parse(input, width)?)?;
    let answer = if part == 1 {report.power_consumption()?} else {report.life_support()?};
    info!(part, answer, "diagnostic");
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";

    #[test]
    fn demo_report() {
        let words = parse(DEMO, 5).unwrap();
        let report = analyze(&words).unwrap();
        assert_eq!(report, Report {gamma: 22, epsilon: 9, oxygen: 23, co2: 10});
        assert_eq!(report.power_consumption(), Ok(198));
        assert_eq!(report.life_support(), Ok(230));
    }

    #[test]
    fn tie_breaks() {
        let words = parse("10\n01\n", 2).unwrap();
        // even split: gamma takes 0, oxygen keeps 1, co2 keeps 0
        assert_eq!(power(&words), Ok((0, 3)));
        assert_eq!(rating(&words, Keep::Majority), 2);
        assert_eq!(rating(&words, Keep::Minority), 1);
    }

    #[test]
    fn unanimous_column_does_not_empty_the_set() {
        let words = parse("110\n111\n", 3).unwrap();
        assert_eq!(rating(&words, Keep::Minority), 6);
        assert_eq!(rating(&words, Keep::Majority), 7);
    }

    #[test]
    fn width_is_enforced() {
        assert!(matches!(parse("0101\n011\n", 4), Err(PuzzleError::BitWidth(BadLine {line: 2, ..}, 4))));
        assert!(matches!(parse("01a1\n", 4), Err(PuzzleError::BitWidth(..))));
        assert_eq!(parse("", 4), Err(PuzzleError::EmptyInput));
    }

    #[test]
    fn run_infers_width() {
        assert_eq!(run(1, DEMO, &Options::default()), Ok("198".to_string()));
        assert_eq!(run(2, DEMO, &Options::default()), Ok("230".to_string()));
        let twelve = Options {bit_width: Some(BIT_WIDTH), ..Options::default()};
        assert!(run(1, DEMO, &twelve).is_err());
    }

    #[test]
    fn power_needs_words_of_one_width() {
        assert_eq!(power(&[]), Err(PuzzleError::EmptyInput));
        assert!(matches!(power(&[b"01".as_slice(), b"1".as_slice()]), Err(PuzzleError::InvalidParameter(_))));
        assert_eq!(analyze(&[]), Err(PuzzleError::EmptyInput));
    }

    #[test]
    fn wide_words_overflow_cleanly() {
        // gamma is the top 32 bits, epsilon the bottom 32
        let wide = Options {bit_width: Some(64), ..Options::default()};
        let input = format!("{}\n", "1".repeat(32) + &"0".repeat(32));
        assert_eq!(run(1, &input, &wide), Err(PuzzleError::Overflow("multiplying gamma and epsilon")));
    }
}
