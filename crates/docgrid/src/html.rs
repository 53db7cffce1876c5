//! Reduce a published HTML document to text lines.
//!
//! Published documents wrap each paragraph in its own block element and use
//! `&nbsp;` freely. Each block element's text becomes one line, with
//! non-breaking spaces turned into plain spaces, so the record parser sees
//! the same shape it would in a plain-text export.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

fn block_selector() -> &'static Selector {
    static BLOCKS: OnceLock<Selector> = OnceLock::new();
    BLOCKS.get_or_init(|| {
        Selector::parse("p, li, h1, h2, h3, h4, h5, h6, pre").expect("block selector is valid")
    })
}

/// Extract the text of every innermost block element in `html`, one block
/// per line.
///
/// Blocks keep document order. A block that contains another block (a `<p>`
/// inside an `<li>`) is skipped in favour of the inner one, so each record
/// is emitted once; text sitting directly in the outer block is dropped.
/// Text inside `<pre>` keeps its own line breaks.
pub fn html_to_lines(html: &str) -> String {
    let document = Html::parse_document(html);

    let lines: Vec<String> = document
        .select(block_selector())
        .filter(|el| !has_nested_block(el))
        .map(|el| el.text().collect::<String>().replace('\u{a0}', " "))
        .collect();

    lines.join("\n")
}

fn has_nested_block(el: &ElementRef<'_>) -> bool {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .any(|d| block_selector().matches(&d))
}
