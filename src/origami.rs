//! Day 13: fold the transparent paper to read the activation code.

use std::fmt;

use bitvec::prelude::*;
use tracing::{debug, info};

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fold {
    /// Fold the bottom half up along the horizontal line `y`.
    Up(usize),
    /// Fold the right half left along the vertical line `x`.
    Left(usize),
}

/// Row-major dot sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    width: usize,
    height: usize,
    dots: BitVec,
}

impl Sheet {
    fn blank(width: usize, height: usize) -> Result<Sheet> {
        let cells = width.checked_mul(height).ok_or(PuzzleError::Overflow("sizing the sheet"))?;
        Ok(Sheet {width, height, dots: bitvec![0; cells]})
    }

    pub fn from_dots(dots: &[(usize, usize)]) -> Result<Sheet> {
        let size = |coord: usize| coord.checked_add(1).ok_or(PuzzleError::Overflow("sizing the sheet"));
        let width = dots.iter().map(|&(x, _)| x).max().map_or(Ok(0), size)?;
        let height = dots.iter().map(|&(_, y)| y).max().map_or(Ok(0), size)?;
        let mut sheet = Sheet::blank(width, height)?;
        for &(x, y) in dots {sheet.dots.set(y * width + x, true)}
        Ok(sheet)
    }

    pub fn width(&self) -> usize {self.width}
    pub fn height(&self) -> usize {self.height}

    pub fn is_dot(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.dots[y * self.width + x]
    }

    pub fn visible(&self) -> usize {self.dots.count_ones()}

    /// Mirrors the far side onto the near side; a dot on either side stays a dot.
    /// The fold line itself is dropped.
    pub fn fold(&self, fold: Fold) -> Result<Sheet> {
        let (width, height) = match fold {
            Fold::Up(at) if at >= self.height / 2 => (self.width, at),
            Fold::Left(at) if at >= self.width / 2 => (at, self.height),
            Fold::Up(at) => return Err(PuzzleError::FoldOutOfRange {axis: 'y', at}),
            Fold::Left(at) => return Err(PuzzleError::FoldOutOfRange {axis: 'x', at}),
        };
        let mut folded = Sheet::blank(width, height)?;
        for ix in self.dots.iter_ones() {
            let (x, y) = (ix % self.width, ix / self.width);
            let (x, y) = match fold {
                Fold::Up(at) if y == at => continue,
                Fold::Up(at) if y > at => (x, 2 * at - y),
                Fold::Left(at) if x == at => continue,
                Fold::Left(at) if x > at => (2 * at - x, y),
                _ => (x, y),
            };
            folded.dots.set(y * width + x, true);
        }
        Ok(folded)
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.dots.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|dot| if *dot {'#'} else {'.'}).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn parse_fold(line: &str) -> Option<Fold> {
    let (axis, at) = line.strip_prefix("fold along ")?.split_once('=')?;
    let at = at.parse().ok()?;
    match axis {
        "x" => Some(Fold::Left(at)),
        "y" => Some(Fold::Up(at)),
        _ => None,
    }
}

/// Dot coordinates, a blank line, then fold instructions.
pub fn parse(input: &str) -> Result<(Sheet, Vec<Fold>)> {
    let mut dots = vec![];
    let mut folds = vec![];
    for (ix, line) in input.trim().lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {continue}
        let bad = || PuzzleError::Parse(BadLine::new(ix, line));
        if line.starts_with("fold") {
            folds.push(parse_fold(line).ok_or_else(bad)?);
        } else {
            let (x, y) = line.split_once(',').ok_or_else(bad)?;
            dots.push((x.parse().map_err(|_| bad())?, y.parse().map_err(|_| bad())?));
        }
    }
    if dots.is_empty() {return Err(PuzzleError::EmptyInput)}
    Ok((Sheet::from_dots(&dots)?, folds))
}

pub fn fold_all(sheet: Sheet, folds: &[Fold]) -> Result<Sheet> {
    folds.iter().try_fold(sheet, |sheet, &fold| {
        let folded = sheet.fold(fold)?;
        debug!(?fold, visible = folded.visible(), "folded");
        Ok(folded)
    })
}

pub fn run(part: u8, input: &str, _options: &Options) -> Result<String> {
    let (sheet, folds) = parse(input)?;
    if part == 1 {
        let visible = fold_all(sheet, &folds[.. folds.len().min(1)])?.visible();
        info!(visible, "dots after the first fold");
        Ok(visible.to_string())
    } else {
        let code = fold_all(sheet, &folds)?;
        info!(width = code.width(), height = code.height(), "activation code");
        Ok(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = "6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn demo_folds() {
        let (sheet, folds) = parse(DEMO).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (11, 15));
        assert_eq!(folds, vec![Fold::Up(7), Fold::Left(5)]);
        let once = sheet.fold(folds[0]).unwrap();
        assert_eq!(once.visible(), 17);
        let twice = once.fold(folds[1]).unwrap();
        assert_eq!(twice.visible(), 16);
        assert_eq!(twice.to_string(), "#####\n#...#\n#...#\n#...#\n#####\n.....\n.....\n");
    }

    #[test]
    fn run_reports_first_fold_and_picture() {
        assert_eq!(run(1, DEMO, &Options::default()), Ok("17".to_string()));
        assert!(run(2, DEMO, &Options::default()).unwrap().starts_with("#####\n#...#"));
    }

    #[test]
    fn overlapping_dots_merge() {
        let sheet = Sheet::from_dots(&[(0, 0), (0, 2)]).unwrap();
        let folded = sheet.fold(Fold::Up(1)).unwrap();
        assert_eq!(folded.visible(), 1);
        assert!(folded.is_dot(0, 0));
    }

    #[test]
    fn fold_past_the_edge() {
        let sheet = Sheet::from_dots(&[(0, 0), (0, 9)]).unwrap();
        assert_eq!(sheet.fold(Fold::Up(2)), Err(PuzzleError::FoldOutOfRange {axis: 'y', at: 2}));
    }

    #[test]
    fn bad_instructions() {
        assert!(parse("1,1\n\nfold along z=3\n").is_err());
        assert!(parse("1;1\n").is_err());
    }

    #[test]
    fn huge_coordinates_are_refused() {
        assert_eq!(Sheet::from_dots(&[(usize::MAX, 0)]), Err(PuzzleError::Overflow("sizing the sheet")));
        assert_eq!(Sheet::from_dots(&[(1 << 40, 1 << 40)]), Err(PuzzleError::Overflow("sizing the sheet")));
        let sheet = Sheet::from_dots(&[(0, 0), (0, 2)]).unwrap();
        assert_eq!(sheet.fold(Fold::Left(usize::MAX)), Err(PuzzleError::Overflow("sizing the sheet")));
        // the fold line sits exactly on the middle row or just past it
        assert!(sheet.fold(Fold::Up(1)).is_ok());
        assert_eq!(sheet.fold(Fold::Up(0)), Err(PuzzleError::FoldOutOfRange {axis: 'y', at: 0}));
    }
}
