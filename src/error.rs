//! Errors raised while building a [CityGrid](crate::CityGrid) snapshot. Searches themselves
//! never fail; they report a missing path as [None].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map contains no rows")]
    EmptyMap,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown map symbol '{symbol}' at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },

    #[error("cell ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("cell ({x}, {y}) is defined more than once")]
    DuplicateCell { x: i32, y: i32 },

    #[error("unknown cell category: {0}")]
    UnknownCategory(String),

    #[error("unknown search algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
