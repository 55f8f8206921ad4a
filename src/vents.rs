//! Day 5: count where hydrothermal vent lines cross.

use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::error::{BadLine, Result};
use crate::Options;

pub type Point = (i32, i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    fn delta(&self) -> (i32, i32) {
        (self.to.0 - self.from.0, self.to.1 - self.from.1)
    }

    pub fn is_axis_aligned(&self) -> bool {
        let (dx, dy) = self.delta();
        dx == 0 || dy == 0
    }

    pub fn is_diagonal(&self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dx.abs() == dy.abs()
    }

    /// Every integer point from one end to the other, both ends included.
    /// Only meaningful for axis-aligned and 45 degree segments.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (dx, dy) = self.delta();
        let (sx, sy) = (dx.signum(), dy.signum());
        let from = self.from;
        (0 ..= dx.abs().max(dy.abs())).map(move |i| (from.0 + i * sx, from.1 + i * sy))
    }
}

/// Sparse count of how many segments cover each point.
#[derive(Debug, Default)]
pub struct PointCounter(FxHashMap<Point, u32>);

impl PointCounter {
    pub fn add(&mut self, segment: &Segment) {
        for point in segment.points() {
            *self.0.entry(point).or_insert(0) += 1;
        }
    }

    pub fn covered(&self) -> usize {self.0.len()}

    pub fn overlaps(&self) -> usize {
        self.0.values().filter(|&&n| n >= 2).count()
    }
}

fn segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+),(\d+) -> (\d+),(\d+)$").unwrap())
}

pub fn parse(input: &str) -> (Vec<Segment>, Vec<BadLine>) {
    let mut skipped = vec![];
    let segments = input.trim().lines().enumerate().filter_map(|(ix, line)| {
        let segment = segment_re().captures(line.trim()).and_then(|m| Some(Segment {
            from: (m[1].parse().ok()?, m[2].parse().ok()?),
            to: (m[3].parse().ok()?, m[4].parse().ok()?),
        }));
        if segment.is_none() {skipped.push(BadLine::new(ix, line))}
        segment
    }).collect();
    (segments, skipped)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlaps {
    pub points: usize,
    /// Segments left out: diagonals when not asked for, and anything not at 45 degrees.
    pub ignored: usize,
}

pub fn count_overlaps(segments: &[Segment], include_diagonal: bool) -> Overlaps {
    let mut counter = PointCounter::default();
    let mut ignored = 0;
    for segment in segments {
        if segment.is_axis_aligned() || (include_diagonal && segment.is_diagonal()) {
            counter.add(segment);
        } else {
            ignored += 1;
        }
    }
    debug!(covered = counter.covered(), ignored, "segments rasterized");
    Overlaps {points: counter.overlaps(), ignored}
}

pub fn run(part: u8, input: &str, options: &Options) -> Result<String> {
    let (segments, skipped) = parse(input);
    options.settle(5, &skipped)?;
    let overlaps = count_overlaps(&segments, part == 2);
    info!(part, segments = segments.len(), overlaps = overlaps.points, "vent overlaps");
    Ok(overlaps.points.to_string())
}
