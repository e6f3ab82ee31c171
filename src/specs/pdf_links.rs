// src/specs/pdf_links.rs
use std::collections::HashSet;

use scraper::Html;

use crate::core::url::{last_segment, resolve};
use crate::data::PdfLink;

fn is_pdf(href: &str) -> bool {
    let path = href.split('?').next().unwrap_or(href);
    path.to_ascii_lowercase().ends_with(".pdf")
}

/// Links to `.pdf` files from anchors and `<source>` tags, made absolute,
/// first occurrence of each URL kept.
pub fn parse_pdf_links(html: &str, base: &str) -> Vec<PdfLink> {
    let doc = Html::parse_document(html);
    let anchors = doc.select(css!("a[href]")).filter_map(|a| a.value().attr("href"));
    let sources = doc.select(css!("source[src]")).filter_map(|s| s.value().attr("src"));

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in anchors.chain(sources) {
        let raw = raw.trim();
        if !is_pdf(raw) {
            continue;
        }
        let Some(url) = resolve(base, raw) else { continue };
        if seen.insert(url.clone()) {
            out.push(PdfLink { name: last_segment(&url), url });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_resolves_and_dedups() {
        let html = r#"
            <a href="https://a.org/docs/Report.PDF">r</a>
            <a href="guide.pdf?dl=1">g</a>
            <a href="/notes.txt">n</a>
            <a href="https://a.org/docs/Report.PDF">again</a>
            <video><source src="/media/brochure.pdf"></video>"#;
        let links = parse_pdf_links(html, "https://a.org/docs/index.html");
        let urls: Vec<_> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://a.org/docs/Report.PDF",
                "https://a.org/docs/guide.pdf?dl=1",
                "https://a.org/media/brochure.pdf",
            ]
        );
        assert_eq!(links[1].name, "guide.pdf");
    }
}
