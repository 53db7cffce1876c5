//! Core data types shared by the fetcher, parser and renderer.

use crate::grid::Grid;

/// Message reported when a document contains no character records.
pub const NO_DATA_MESSAGE: &str = "No character data found in the document.";

/// A single character record parsed from one line of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub ch: char,
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(ch: char, x: usize, y: usize) -> Self {
        Self { ch, x, y }
    }
}

/// Result of decoding a document that was fetched successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one record matched; the rendered grid.
    Rendered(Grid),
    /// The document held no matching records.
    Empty,
}

impl Outcome {
    /// The grid, if one was rendered.
    pub fn grid(&self) -> Option<&Grid> {
        match self {
            Outcome::Rendered(grid) => Some(grid),
            Outcome::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }
}

/// Errors that abort a run before anything is printed.
#[derive(thiserror::Error, Debug)]
pub enum DocGridError {
    #[error("Network error: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Network error: {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Grid too large: records reach X: {max_x}, Y: {max_y} (limit {limit} cells)")]
    GridTooLarge {
        max_x: usize,
        max_y: usize,
        limit: usize,
    },
}

/// Convenience result type.
pub type DocGridResult<T> = Result<T, DocGridError>;
