// src/specs/text.rs
use scraper::Html;

use crate::core::html::visible_text;

/// Visible page text, one text node per line.
pub fn parse_text(html: &str) -> String {
    visible_text(&Html::parse_document(html))
}
