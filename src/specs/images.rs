// src/specs/images.rs
use scraper::Html;

use crate::core::html::first_attr;
use crate::core::url::resolve;

/// Lazy loaders park the real URL in `data-*`.
const SRC_ATTRS: &[&str] = &["src", "data-src", "data-lazy-src"];

/// Absolute URL of every `<img>`/`<image>` in document order. Duplicates kept.
pub fn parse_image_urls(html: &str, base: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    doc.select(css!("img, image"))
        .filter_map(|el| first_attr(el, SRC_ATTRS))
        .filter_map(|src| resolve(base, &src))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_source_attribute() {
        let html = r#"<body>
            <img src="/a.png">
            <img data-src="b.jpg">
            <img data-lazy-src="https://cdn.x/c.gif">
            <img alt="no source">
            <image src="d.webp">
            <img src="/a.png">
        </body>"#;
        let urls = parse_image_urls(html, "https://site.com/gallery/");
        assert_eq!(
            urls,
            [
                "https://site.com/a.png",
                "https://site.com/gallery/b.jpg",
                "https://cdn.x/c.gif",
                "https://site.com/gallery/d.webp",
                "https://site.com/a.png",
            ]
        );
    }
}
