//! Line parser for `Character: <c>, X: <n>, Y: <n>` records.
//!
//! Matching is anchored at the start of each line and anything after the
//! `Y` digits is ignored. Lines that do not match are skipped without
//! complaint; a document is allowed to carry arbitrary prose around the
//! records.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::Point;

fn record_regex() -> &'static Regex {
    static RECORD: OnceLock<Regex> = OnceLock::new();
    // `[0-9]` rather than `\d`: the regex crate's `\d` is Unicode-aware and
    // would accept digits `usize::from_str` rejects.
    RECORD.get_or_init(|| {
        Regex::new(r"^Character: (.), X: ([0-9]+), Y: ([0-9]+)").expect("record regex is valid")
    })
}

/// Parse a single line into a [`Point`].
///
/// Returns `None` when the line does not start with a record, or when a
/// coordinate does not fit in `usize`.
pub fn parse_line(line: &str) -> Option<Point> {
    let caps = record_regex().captures(line)?;

    let ch = caps.get(1)?.as_str().chars().next()?;
    let x = caps.get(2)?.as_str();
    let y = caps.get(3)?.as_str();

    match (x.parse::<usize>(), y.parse::<usize>()) {
        (Ok(x), Ok(y)) => Some(Point::new(ch, x, y)),
        _ => {
            tracing::debug!("skipping record with out-of-range coordinates: x={x}, y={y}");
            None
        }
    }
}

/// Parse every record in `text`, in document order.
///
/// The text is split on `\n`; a trailing `\r` is left in place, which is
/// harmless because content after the match is ignored.
pub fn parse_points(text: &str) -> Vec<Point> {
    text.split('\n').filter_map(parse_line).collect()
}
