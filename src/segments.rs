//! Day 8: untangle scrambled seven-segment displays.
//!
//! Segment labels `a..=g` and wire letters `a..=g` are both held as bits of a
//! `u8` (bit 0 is `a`). A [`Mapping`] says which wire drives each segment.
//!
//! The unique lengths (1, 4, 7, 8) pin every segment down to a pair, leaving
//! three independent swaps open: b/d, c/f and e/g. Each six-segment digit
//! (0, 6, 9) is missing exactly one segment of one of those pairs, so reading
//! it through the current guess tells whether that pair is the wrong way round.

use arrayvec::ArrayVec;
use itertools::Itertools;
use tracing::{debug, info};

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;
const E: usize = 4;
const F: usize = 5;
const G: usize = 6;

const fn mask(labels: &str) -> u8 {
    let bytes = labels.as_bytes();
    let mut m = 0;
    let mut ix = 0;
    while ix < bytes.len() {
        m |= 1 << (bytes[ix] - b'a');
        ix += 1;
    }
    m
}

/// Lit segments per digit on an unscrambled display.
pub const DIGITS: [u8; 10] = [
    mask("abcefg"), mask("cf"), mask("acdeg"), mask("acdfg"), mask("bcdf"),
    mask("abdfg"), mask("abdefg"), mask("acf"), mask("abcdefg"), mask("abcdfg"),
];

/// What 0, 6 and 9 look like when b/d, c/f or e/g respectively are swapped.
const ZERO_SWAPPED_BD: u8 = mask("acdefg");
const SIX_SWAPPED_CF: u8 = mask("abcdeg");
const NINE_SWAPPED_EG: u8 = mask("abcdef");

/// Digits told apart by segment count alone: 1, 7, 4 and 8.
pub const UNIQUE_LENGTHS: [u32; 4] = [2, 3, 4, 7];

/// Wire (single bit) for each segment label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mapping(pub [u8; 7]);

impl Mapping {
    pub fn swapped(self, x: usize, y: usize) -> Mapping {
        let mut wires = self.0;
        wires.swap(x, y);
        Mapping(wires)
    }

    /// Wires lit for `digit`.
    pub fn encode(&self, digit: usize) -> u8 {
        (0 .. 7).filter(|&label| DIGITS[digit] & 1 << label != 0).fold(0, |acc, label| acc | self.0[label])
    }

    /// Segment labels lit by `wires`.
    pub fn translate(&self, wires: u8) -> u8 {
        (0 .. 7).filter(|&label| self.0[label] & wires != 0).fold(0, |acc, label| acc | 1 << label)
    }

    pub fn decode(&self, wires: u8) -> Option<usize> {
        (0 .. 10).find(|&digit| self.encode(digit) == wires)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Display {
    pub patterns: [u8; 10],
    pub outputs: [u8; 4],
}

fn single_bits(m: u8) -> ArrayVec<u8, 7> {
    (0 .. 7).map(|bit| 1 << bit).filter(|bit| m & bit != 0).collect()
}

fn parse_pattern(word: &str) -> Option<u8> {
    let mut m = 0u8;
    for b in word.bytes() {
        if !(b'a' ..= b'g').contains(&b) || m & 1 << (b - b'a') != 0 {return None}
        m |= 1 << (b - b'a');
    }
    (m != 0).then_some(m)
}

pub fn parse_line(ix: usize, line: &str) -> Result<Display> {
    let bad = || PuzzleError::Parse(BadLine::new(ix, line));
    let (left, right) = line.split_once('|').ok_or_else(bad)?;
    let patterns = left.split_whitespace().map(parse_pattern).collect::<Option<Vec<_>>>().ok_or_else(bad)?;
    let outputs = right.split_whitespace().map(parse_pattern).collect::<Option<Vec<_>>>().ok_or_else(bad)?;
    Ok(Display {
        patterns: patterns.try_into().map_err(|_| bad())?,
        outputs: outputs.try_into().map_err(|_| bad())?,
    })
}

pub fn parse(input: &str) -> Result<Vec<Display>> {
    let displays = input.trim().lines().enumerate().map(|(ix, line)| parse_line(ix, line)).collect::<Result<Vec<_>>>()?;
    if displays.is_empty() {return Err(PuzzleError::EmptyInput)}
    Ok(displays)
}

/// Works out the wiring of one display from its ten sample patterns.
pub fn deduce(patterns: &[u8; 10], line: usize) -> Result<Mapping> {
    let err = |reason| PuzzleError::Segments {line, reason};
    let with_len = |n: u32| patterns.iter().copied().filter(|p| p.count_ones() == n).exactly_one().ok();
    let one = with_len(2).ok_or(err("no unique pattern for 1"))?;
    let seven = with_len(3).ok_or(err("no unique pattern for 7"))?;
    let four = with_len(4).ok_or(err("no unique pattern for 4"))?;
    let eight = with_len(7).ok_or(err("no unique pattern for 8"))?;

    let cf = single_bits(one);
    let bd = single_bits(four & !one);
    let top = single_bits(seven & !one);
    let eg = single_bits(eight & !(one | four | seven));
    let (&[c, f], &[b, d], &[a], &[e, g]) = (cf.as_slice(), bd.as_slice(), top.as_slice(), eg.as_slice()) else {
        return Err(err("patterns for 1, 4, 7 and 8 do not nest"));
    };

    let mut wires = [0; 7];
    (wires[A], wires[B], wires[C], wires[D], wires[E], wires[F], wires[G]) = (a, b, c, d, e, f, g);
    let mut mapping = Mapping(wires);
    for &pattern in patterns.iter().filter(|p| p.count_ones() == 6) {
        mapping = match mapping.translate(pattern) {
            ZERO_SWAPPED_BD => mapping.swapped(B, D),
            SIX_SWAPPED_CF => mapping.swapped(C, F),
            NINE_SWAPPED_EG => mapping.swapped(E, G),
            seen if seen == DIGITS[0] || seen == DIGITS[6] || seen == DIGITS[9] => mapping,
            _ => return Err(err("six-segment pattern fits no digit")),
        };
    }

    if patterns.iter().map(|&p| mapping.decode(p)).collect::<Option<Vec<_>>>().map_or(true, |d| !d.iter().all_unique()) {
        return Err(err("patterns do not cover all ten digits"));
    }
    Ok(mapping)
}

pub fn count_unique_outputs(displays: &[Display]) -> usize {
    displays.iter().flat_map(|display| display.outputs.iter())
        .filter(|p| UNIQUE_LENGTHS.contains(&p.count_ones()))
        .count()
}

pub fn output_value(display: &Display, line: usize) -> Result<u64> {
    let mapping = deduce(&display.patterns, line)?;
    display.outputs.iter().try_fold(0u64, |acc, &wires| {
        let digit = mapping.decode(wires).ok_or(PuzzleError::Segments {line, reason: "output is not a digit"})?;
        Ok(10 * acc + digit as u64)
    })
}

pub fn run(part: u8, input: &str, _options: &Options) -> Result<String> {
    let displays = parse(input)?;
    if part == 1 {
        let unique = count_unique_outputs(&displays);
        info!(unique, "easy output digits");
        return Ok(unique.to_string());
    }
    let mut sum = 0;
    for (ix, display) in displays.iter().enumerate() {
        let value = output_value(display, ix + 1)?;
        debug!(line = ix + 1, value, "decoded display");
        sum += value;
    }
    info!(sum, "decoded output sum");
    Ok(sum.to_string())
}
