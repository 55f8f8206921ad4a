use std::fmt;

/// A 1-based input line that could not be read, kept together with its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadLine {
    pub line: usize,
    pub text: String,
}

impl BadLine {
    pub(crate) fn new(ix: usize, text: &str) -> BadLine {
        BadLine { line: ix + 1, text: text.to_owned() }
    }
}

impl fmt::Display for BadLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {:?}", self.line, self.text)
    }
}

/// Line numbers only, for the `MalformedLines` message.
pub struct LineList<'a>(pub &'a [BadLine]);

impl fmt::Display for LineList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ix, bad) in self.0.iter().enumerate() {
            if ix > 0 {write!(f, ", ")?}
            write!(f, "{}", bad.line)?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("empty input")]
    EmptyInput,
    #[error("cannot parse {0}")]
    Parse(BadLine),
    #[error("{count} malformed line(s): {}", LineList(.lines))]
    MalformedLines { count: usize, lines: Vec<BadLine> },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },
    #[error("bit string {0} does not have the configured width {1}")]
    BitWidth(BadLine, usize),
    #[error("bingo board {board} has {cells} numbers, expected 25")]
    IncompleteBoard { board: usize, cells: usize },
    #[error("descent from ({row}, {col}) never reaches a low point")]
    BasinCycle { row: usize, col: usize },
    #[error("only {0} basin(s) found, need at least 3")]
    TooFewBasins(usize),
    #[error("display {line}: {reason}")]
    Segments { line: usize, reason: &'static str },
    #[error("fold along {axis}={at} reaches past the edge of the sheet")]
    FoldOutOfRange { axis: char, at: usize },
    #[error("octopuses did not all flash together within {0} steps")]
    NoSynchronizedFlash(usize),
    #[error("no incomplete lines to score")]
    NoIncompleteLines,
    #[error("arithmetic overflow while {0}")]
    Overflow(&'static str),
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("no solver for day {0}")]
    UnknownDay(u8),
    #[error("part must be 1 or 2, got {0}")]
    UnknownPart(u8),
}

pub type Result<T, E = PuzzleError> = std::result::Result<T, E>;
