//! Day 14: extended polymerization, counted by adjacent pairs.
//!
//! The polymer itself is never built. Each step turns every pair `AB` with a
//! rule `AB -> X` into `AX` and `XB`, so tracking pair counts is enough.

use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

pub const SHORT_RUN: usize = 10;
pub const LONG_RUN: usize = 40;

pub type Pair = [u8; 2];

#[derive(Clone, Debug)]
pub struct Polymer {
    first: u8,
    pairs: FxHashMap<Pair, u64>,
}

impl Polymer {
    pub fn new(template: &str) -> Polymer {
        let bytes = template.as_bytes();
        Polymer {
            first: bytes.first().copied().unwrap_or(0),
            pairs: bytes.iter().copied().tuple_windows().map(|(a, b)| [a, b]).counts().into_iter().map(|(k, v)| (k, v as u64)).collect(),
        }
    }

    /// Total length of the polymer this histogram stands for.
    pub fn len(&self) -> u64 {
        self.pairs.values().sum::<u64>() + (self.first != 0) as u64
    }

    pub fn is_empty(&self) -> bool {self.first == 0}

    pub fn step(&self, rules: &FxHashMap<Pair, u8>) -> Polymer {
        let mut pairs = FxHashMap::default();
        for (&[a, b], &n) in &self.pairs {
            match rules.get(&[a, b]) {
                Some(&x) => {
                    *pairs.entry([a, x]).or_insert(0) += n;
                    *pairs.entry([x, b]).or_insert(0) += n;
                },
                None => *pairs.entry([a, b]).or_insert(0) += n,
            }
        }
        Polymer {first: self.first, pairs}
    }

    /// Element counts: the right element of every pair, plus the first element.
    pub fn element_counts(&self) -> FxHashMap<u8, u64> {
        let mut counts = FxHashMap::default();
        if self.first != 0 {counts.insert(self.first, 1);}
        for (&[_, b], &n) in &self.pairs {
            *counts.entry(b).or_insert(0) += n;
        }
        counts
    }

    /// Most common element count minus least common.
    pub fn spread(&self) -> u64 {
        match self.element_counts().values().minmax() {
            MinMaxResult::MinMax(lo, hi) => hi - lo,
            _ => 0,
        }
    }
}

pub fn parse(input: &str) -> Result<(Polymer, FxHashMap<Pair, u8>)> {
    let mut lines = input.trim().lines().enumerate();
    let template = lines.next().map(|(_, line)| line.trim()).filter(|t| !t.is_empty()).ok_or(PuzzleError::EmptyInput)?;
    let rules = lines.filter(|(_, line)| !line.trim().is_empty()).map(|(ix, line)| {
        let bad = || PuzzleError::Parse(BadLine::new(ix, line));
        let (pair, insert) = line.trim().split_once(" -> ").ok_or_else(bad)?;
        match (pair.as_bytes(), insert.as_bytes()) {
            (&[a, b], &[x]) => Ok(([a, b], x)),
            _ => Err(bad()),
        }
    }).collect::<Result<FxHashMap<_, _>>>()?;
    Ok((Polymer::new(template), rules))
}

pub fn grow(mut polymer: Polymer, rules: &FxHashMap<Pair, u8>, steps: usize) -> Polymer {
    for step in 0 .. steps {
        polymer = polymer.step(rules);
        debug!(step = step + 1, len = polymer.len(), "polymer grown");
    }
    polymer
}

pub fn run(part: u8, input: &str, _options: &Options) -> Result<String> {
    let (polymer, rules) = parse(input)?;
    let steps = if part == 1 {SHORT_RUN} else {LONG_RUN};
    let spread = grow(polymer, &rules, steps).spread();
    info!(steps, spread, "polymer spread");
    Ok(spread.to_string())
}
