//! Fetch → parse → render.

use crate::fetch::DocumentSource;
use crate::grid::Grid;
use crate::parse::parse_points;
use crate::types::{DocGridResult, Outcome};

/// Decode already-fetched text into a grid.
///
/// Fails only when the records would need a canvas larger than
/// [`crate::grid::MAX_CELLS`].
pub fn render(text: &str) -> DocGridResult<Outcome> {
    let points = parse_points(text);
    match Grid::from_points(&points)? {
        Some(grid) => Ok(Outcome::Rendered(grid)),
        None => {
            tracing::debug!("no character records matched");
            Ok(Outcome::Empty)
        }
    }
}

/// Fetch a document and decode it.
///
/// A fetch failure is returned as-is; nothing is parsed in that case.
pub fn run(source: &dyn DocumentSource) -> DocGridResult<Outcome> {
    run_with(source, |text| text)
}

/// Like [`run`], but passes the fetched text through `prepare` first
/// (for instance [`crate::html_to_lines`]).
pub fn run_with<F, S>(source: &dyn DocumentSource, prepare: F) -> DocGridResult<Outcome>
where
    F: FnOnce(String) -> S,
    S: AsRef<str>,
{
    let location = source.describe();
    tracing::info!("fetching document from {location}");

    let text = match source.fetch() {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("fetch failed for {location}: {e}");
            return Err(e);
        }
    };
    tracing::info!("fetched {} bytes from {location}", text.len());

    render(prepare(text).as_ref())
}
