use crate::location::Location;
use thiserror::Error;

/// Errors that can occur while constructing locations, mutating a board, or
/// parsing board notation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JanggiError {
    #[error("location out of range: row {row}, col {col}")]
    OutOfRange { row: i8, col: i8 },

    #[error("no piece at origin {origin}")]
    EmptyOrigin { origin: Location },

    #[error("board notation has {rows} rows, expected 10")]
    WrongRowCount { rows: usize },

    #[error("row {row} of board notation describes {cells} cells, expected 9")]
    WrongCellCount { row: usize, cells: usize },

    #[error("unrecognized piece letter '{letter}' in row {row} of board notation")]
    UnknownPieceLetter { row: usize, letter: char },
}

pub type JanggiResult<T> = Result<T, JanggiError>;
