//! Day 2: follow the submarine's movement commands.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{BadLine, PuzzleError, Result};
use crate::Options;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub horizontal: i64,
    pub depth: i64,
    pub aim: i64,
}

impl Position {
    pub fn product(&self) -> Result<i64> {
        self.horizontal.checked_mul(self.depth).ok_or(PuzzleError::Overflow("multiplying the position"))
    }
}

fn moved(value: i64, by: Option<i64>) -> Result<i64> {
    by.and_then(|by| value.checked_add(by)).ok_or(PuzzleError::Overflow("plotting the course"))
}

fn command_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(forward|down|up) (\d+)$").unwrap())
}

/// Reads every line that looks like a command; the rest come back as skipped.
pub fn parse(input: &str) -> (Vec<Command>, Vec<BadLine>) {
    let mut skipped = vec![];
    let commands = input.trim().lines().enumerate().filter_map(|(ix, line)| {
        let command = command_re().captures(line.trim()).and_then(|m| {
            let n = m[2].parse().ok()?;
            Some(match &m[1] {
                "forward" => Command::Forward(n),
                "down" => Command::Down(n),
                _ => Command::Up(n),
            })
        });
        if command.is_none() {skipped.push(BadLine::new(ix, line))}
        command
    }).collect();
    (commands, skipped)
}

/// `down`/`up` move the depth directly.
pub fn navigate_plain(commands: &[Command]) -> Result<Position> {
    commands.iter().try_fold(Position::default(), |mut pos, &command| -> Result<Position> {
        match command {
            Command::Forward(n) => pos.horizontal = moved(pos.horizontal, Some(n))?,
            Command::Down(n) => pos.depth = moved(pos.depth, Some(n))?,
            Command::Up(n) => pos.depth = moved(pos.depth, n.checked_neg())?,
        }
        Ok(pos)
    })
}

/// `down`/`up` only tilt the aim; `forward` dives by the aim.
pub fn navigate_aimed(commands: &[Command]) -> Result<Position> {
    commands.iter().try_fold(Position::default(), |mut pos, &command| -> Result<Position> {
        match command {
            Command::Forward(n) => {
                pos.horizontal = moved(pos.horizontal, Some(n))?;
                pos.depth = moved(pos.depth, n.checked_mul(pos.aim))?;
            },
            Command::Down(n) => pos.aim = moved(pos.aim, Some(n))?,
            Command::Up(n) => pos.aim = moved(pos.aim, n.checked_neg())?,
        }
        Ok(pos)
    })
}

pub fn run(part: u8, input: &str, options: &Options) -> Result<String> {
    let (commands, skipped) = parse(input);
    options.settle(2, &skipped)?;
    let pos = if part == 1 {navigate_plain(&commands)?} else {navigate_aimed(&commands)?};
    debug!(?pos, commands = commands.len(), "course plotted");
    let product = pos.product()?;
    info!(part, product, "directions product");
    Ok(product.to_string())
}
