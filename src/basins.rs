//! Day 9: low points and basins of the cave floor.
//!
//! Every cell that is not a peak flows to its lowest orthogonal neighbour
//! until it reaches a low point; cells ending at the same low point share a
//! basin. Results are memoised per cell, and a descent that comes back to a
//! cell it already passed (a flat plateau) is reported instead of looping.

use itertools::Itertools;
use tracing::{debug, info};

use crate::error::{PuzzleError, Result};
use crate::grid::{Grid, Pos};
use crate::Options;

/// Height that belongs to no basin.
pub const PEAK: u8 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Unknown,
    Visiting,
    Settled(Option<Pos>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub risk_level: u32,
    pub basin_product: u64,
}

/// Strictly lower than every orthogonal neighbour; missing neighbours count as infinitely high.
pub fn is_low_point(heights: &Grid<u8>, pos: Pos) -> bool {
    heights.neighbors4(pos).iter().all(|&n| heights[n] > heights[pos])
}

pub fn low_points(heights: &Grid<u8>) -> Vec<Pos> {
    heights.positions().filter(|&pos| is_low_point(heights, pos)).collect()
}

pub fn risk_level(heights: &Grid<u8>) -> u32 {
    low_points(heights).iter().map(|&pos| heights[pos] as u32 + 1).sum()
}

/// Lowest neighbour; on a tie the first in up, down, left, right order wins.
fn lowest_neighbor(heights: &Grid<u8>, pos: Pos) -> Option<Pos> {
    heights.neighbors4(pos).into_iter().fold(None, |best: Option<Pos>, n| match best {
        Some(b) if heights[b] <= heights[n] => Some(b),
        _ => Some(n),
    })
}

/// Low point that `start` drains to, or `None` for peaks.
fn basin_of(heights: &Grid<u8>, flow: &mut Grid<Flow>, start: Pos) -> Result<Option<Pos>> {
    let mut path = vec![];
    let mut pos = start;
    let basin = loop {
        match flow[pos] {
            Flow::Settled(basin) => break basin,
            Flow::Visiting => return Err(PuzzleError::BasinCycle {row: pos.0, col: pos.1}),
            Flow::Unknown => (),
        }
        if heights[pos] == PEAK {break None}
        if is_low_point(heights, pos) {break Some(pos)}
        flow[pos] = Flow::Visiting;
        path.push(pos);
        pos = lowest_neighbor(heights, pos).ok_or(PuzzleError::BasinCycle {row: pos.0, col: pos.1})?;
    };
    flow[pos] = Flow::Settled(basin);
    for p in path {flow[p] = Flow::Settled(basin)}
    Ok(basin)
}

/// Basin sizes, largest first.
pub fn basin_sizes(heights: &Grid<u8>) -> Result<Vec<usize>> {
    let mut flow = heights.map(|_| Flow::Unknown);
    let mut basins = Vec::with_capacity(heights.len());
    for pos in heights.positions() {
        if let Some(low) = basin_of(heights, &mut flow, pos)? {basins.push(low)}
    }
    let sizes: Vec<usize> = basins.into_iter().counts().into_values().sorted_unstable_by(|a, b| b.cmp(a)).collect();
    debug!(basins = sizes.len(), largest = ?sizes.first(), "basins found");
    Ok(sizes)
}

pub fn largest_three_product(sizes: &[usize]) -> Result<u64> {
    if sizes.len() < 3 {return Err(PuzzleError::TooFewBasins(sizes.len()))}
    Ok(sizes[.. 3].iter().map(|&n| n as u64).product())
}

pub fn analyze(heights: &Grid<u8>) -> Result<Analysis> {
    Ok(Analysis {risk_level: risk_level(heights), basin_product: largest_three_product(&basin_sizes(heights)?)?})
}

pub fn run(part: u8, input: &str, _options: &Options) -> Result<String> {
    let heights = Grid::parse_digits(input)?;
    let answer = if part == 1 {
        risk_level(&heights) as u64
    } else {
        largest_three_product(&basin_sizes(&heights)?)?
    };
    info!(part, answer, rows = heights.rows(), cols = heights.cols(), "height map");
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = "2199943210\n3987894921\n9856789892\n8767896789\n9899965678\n";

    #[test]
    fn demo_analysis() {
        let heights = Grid::parse_digits(DEMO).unwrap();
        assert_eq!(low_points(&heights), vec![(0, 1), (0, 9), (2, 2), (4, 6)]);
        assert_eq!(analyze(&heights), Ok(Analysis {risk_level: 15, basin_product: 1134}));
        assert_eq!(basin_sizes(&heights), Ok(vec![14, 9, 9, 3]));
    }

    #[test]
    fn descent_tie_prefers_scan_order() {
        // (1, 1) has 1s above and to the left; "up" is checked first
        let heights = Grid::parse_digits("919\n152\n999\n").unwrap();
        assert_eq!(lowest_neighbor(&heights, (1, 1)), Some((0, 1)));
        let mut flow = heights.map(|_| Flow::Unknown);
        assert_eq!(basin_of(&heights, &mut flow, (1, 1)), Ok(Some((0, 1))));
        assert_eq!(flow[(1, 1)], Flow::Settled(Some((0, 1))));
    }

    #[test]
    fn peaks_have_no_basin() {
        let heights = Grid::parse_digits("19\n99\n").unwrap();
        let mut flow = heights.map(|_| Flow::Unknown);
        assert_eq!(basin_of(&heights, &mut flow, (1, 1)), Ok(None));
        assert_eq!(basin_sizes(&heights), Ok(vec![1]));
    }

    #[test]
    fn plateau_is_reported() {
        let heights = Grid::parse_digits("999\n955\n999\n").unwrap();
        assert!(matches!(basin_sizes(&heights), Err(PuzzleError::BasinCycle {..})));
    }

    #[test]
    fn too_few_basins() {
        let heights = Grid::parse_digits("0990\n9999\n").unwrap();
        assert_eq!(basin_sizes(&heights), Ok(vec![1, 1]));
        assert_eq!(analyze(&heights), Err(PuzzleError::TooFewBasins(2)));
        assert_eq!(run(1, "0990\n9999\n", &Options::default()), Ok("2".to_string()));
    }
}
