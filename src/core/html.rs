// src/core/html.rs
//
// Small helpers over `scraper` shared by every page parser.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::NA;

/// Tags whose text never shows on the page.
const HIDDEN: &[&str] = &["script", "style", "noscript", "template"];

/// All descendant text of `el`, trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text of the first match under `scope`, if it has any.
pub fn select_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(text_of).filter(|t| !t.is_empty())
}

pub fn or_na(v: Option<String>) -> String {
    v.unwrap_or_else(|| s!(NA))
}

/// First present, non-empty attribute among `names`.
pub fn first_attr(el: ElementRef<'_>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|n| el.value().attr(n))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Every rendered text node, trimmed, one per line.
pub fn visible_text(doc: &Html) -> String {
    let mut lines = Vec::new();
    for node in doc.tree.root().descendants() {
        let Some(text) = node.value().as_text() else { continue };
        let t = text.trim();
        let hidden = node
            .ancestors()
            .any(|a| a.value().as_element().is_some_and(|e| HIDDEN.contains(&e.name())));
        if t.is_empty() || hidden {
            continue;
        }
        lines.push(t);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_text_skips_scripts() {
        let doc = Html::parse_document(
            "<html><head><title>T</title><style>p{}</style></head>\
             <body><p> Hello </p><script>var x = 1;</script><div>World<noscript>js</noscript></div></body></html>",
        );
        assert_eq!(visible_text(&doc), "T\nHello\nWorld");
    }

    #[test]
    fn attrs_and_text() {
        let doc = Html::parse_fragment(r#"<div><img data-src=" a.png " src=""><h1> Title </h1></div>"#);
        let img = doc.select(css!("img")).next().unwrap();
        assert_eq!(first_attr(img, &["src", "data-src"]).as_deref(), Some("a.png"));
        assert_eq!(select_text(doc.root_element(), css!("h1")).as_deref(), Some("Title"));
        assert_eq!(or_na(select_text(doc.root_element(), css!("h2"))), "N/A");
    }
}
