//! Day 11: flashing dumbo octopuses.

use std::fmt;

use tracing::{debug, info};

use crate::error::{PuzzleError, Result};
use crate::grid::{Grid, Pos};
use crate::Options;

pub const STEPS: usize = 100;
/// Default bound for the search for a step where everyone flashes.
pub const SYNC_STEP_LIMIT: usize = 10_000;
const THRESHOLD: u8 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Octopus {
    pub energy: u8,
    pub flashes: u64,
    /// Step number of the most recent flash.
    last_flash: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct Cavern {
    octopuses: Grid<Octopus>,
    step: usize,
}

impl Cavern {
    pub fn new(energy: &Grid<u8>) -> Cavern {
        Cavern {octopuses: energy.map(|&energy| Octopus {energy, flashes: 0, last_flash: None}), step: 0}
    }

    pub fn parse(input: &str) -> Result<Cavern> {
        Ok(Cavern::new(&Grid::parse_digits(input)?))
    }

    /// Steps taken so far.
    pub fn steps(&self) -> usize {self.step}

    pub fn total_flashes(&self) -> u64 {
        self.octopuses.iter().map(|(_, o)| o.flashes).sum()
    }

    fn flashed_this_step(&self, pos: Pos) -> bool {
        self.octopuses[pos].last_flash == Some(self.step)
    }

    /// Advances one step and returns how many octopuses flashed in it.
    pub fn step(&mut self) -> usize {
        self.step += 1;
        let mut charged: Vec<Pos> = vec![];
        for (pos, octopus) in self.octopuses.positions().zip(self.octopuses.values_mut()) {
            octopus.energy += 1;
            if octopus.energy > THRESHOLD {charged.push(pos)}
        }

        let mut flashed = 0;
        while let Some(pos) = charged.pop() {
            if self.flashed_this_step(pos) || self.octopuses[pos].energy <= THRESHOLD {continue}
            let step = self.step;
            let octopus = &mut self.octopuses[pos];
            octopus.energy = 0;
            octopus.flashes += 1;
            octopus.last_flash = Some(step);
            flashed += 1;
            for n in self.octopuses.neighbors8(pos) {
                if self.flashed_this_step(n) {continue}
                let neighbour = &mut self.octopuses[n];
                neighbour.energy += 1;
                if neighbour.energy > THRESHOLD {charged.push(n)}
            }
        }
        debug!(step = self.step, flashed, "step");
        flashed
    }

    /// Runs `steps` more steps; returns the flashes they produced.
    pub fn run(&mut self, steps: usize) -> u64 {
        (0 .. steps).map(|_| self.step() as u64).sum()
    }

    /// Keeps stepping until every octopus flashes in the same step.
    pub fn first_synchronized(&mut self, limit: usize) -> Result<usize> {
        while self.step < limit {
            if self.step() == self.octopuses.len() {return Ok(self.step)}
        }
        Err(PuzzleError::NoSynchronizedFlash(limit))
    }
}

impl fmt::Display for Cavern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ((_, col), octopus) in self.octopuses.iter() {
            write!(f, "{}", octopus.energy)?;
            if col + 1 == self.octopuses.cols() {writeln!(f)?}
        }
        Ok(())
    }
}

pub fn run(part: u8, input: &str, options: &Options) -> Result<String> {
    let mut cavern = Cavern::parse(input)?;
    let answer = if part == 1 {
        cavern.run(STEPS)
    } else {
        cavern.first_synchronized(options.flash_step_limit)? as u64
    };
    info!(part, answer, steps = cavern.steps(), "octopus flashes");
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = "5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn small_cascade() {
        let mut cavern = Cavern::parse("11111\n19991\n19191\n19991\n11111\n").unwrap();
        assert_eq!(cavern.step(), 9);
        assert_eq!(cavern.to_string(), "34543\n40004\n50005\n40004\n34543\n");
        assert_eq!(cavern.step(), 0);
        assert_eq!(cavern.to_string(), "45654\n51115\n61116\n51115\n45654\n");
    }

    #[test]
    fn demo_flash_counts() {
        let mut cavern = Cavern::parse(DEMO).unwrap();
        assert_eq!(cavern.run(10), 204);
        assert_eq!(cavern.run(90), 1656 - 204);
        assert_eq!(cavern.total_flashes(), 1656);
    }

    #[test]
    fn demo_synchronizes_at_195() {
        let mut cavern = Cavern::parse(DEMO).unwrap();
        assert_eq!(cavern.first_synchronized(SYNC_STEP_LIMIT), Ok(195));
        // after a full flash everything sits at zero
        assert!(cavern.to_string().chars().all(|ch| ch == '0' || ch == '\n'));
    }

    #[test]
    fn sync_search_is_bounded() {
        let mut cavern = Cavern::parse(DEMO).unwrap();
        assert_eq!(cavern.first_synchronized(150), Err(PuzzleError::NoSynchronizedFlash(150)));
        assert_eq!(cavern.steps(), 150);
    }

    #[test]
    fn fresh_caverns_do_not_share_state() {
        let options = Options::default();
        assert_eq!(run(1, DEMO, &options), Ok("1656".to_string()));
        assert_eq!(run(1, DEMO, &options), Ok("1656".to_string()));
        assert_eq!(run(2, DEMO, &options), Ok("195".to_string()));
    }
}
