//! Docgrid — decode character grids published as plain-text documents.
//!
//! A document carries records of the shape `Character: <c>, X: <n>, Y: <n>`,
//! one per line. The records are scattered onto a space-filled canvas sized
//! to the largest coordinates seen, and the canvas is printed row by row.

pub mod fetch;
pub mod grid;
pub mod html;
pub mod parse;
pub mod pipeline;
pub mod types;

pub use fetch::{DocumentSource, FileSource, HttpSource};
pub use grid::Grid;
pub use html::html_to_lines;
pub use parse::{parse_line, parse_points};
pub use pipeline::{render, run, run_with};
pub use types::*;
