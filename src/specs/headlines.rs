// src/specs/headlines.rs
use scraper::{ElementRef, Html};

use crate::config::consts::HEADLINE_MIN_CHARS;
use crate::core::sanitize::normalize_ws;

/// Navigation chrome that slips in with the real headlines.
const NOISE: &[&str] = &["home", "about", "contact", "login", "register", "today's gallery"];

fn is_headline(text: &str) -> bool {
    if text.chars().count() < HEADLINE_MIN_CHARS {
        return false;
    }
    let lower = text.to_lowercase();
    !NOISE.iter().any(|n| lower.contains(n))
}

fn headline_class(el: &ElementRef<'_>) -> bool {
    el.value().attr("class").is_some_and(|c| {
        let c = c.to_lowercase();
        c.contains("excerpt") || c.contains("title") || c.contains("headline")
    })
}

/// `h1..h3`, else headline-ish links, else every link. Deduplicated.
pub fn parse_headlines(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let mut candidates: Vec<ElementRef<'_>> = doc.select(css!("h1, h2, h3")).collect();
    if candidates.is_empty() {
        candidates = doc.select(css!("a")).filter(headline_class).collect();
    }
    if candidates.is_empty() {
        candidates = doc.select(css!("a")).collect();
    }

    let mut out: Vec<String> = Vec::new();
    for el in candidates {
        let text = normalize_ws(&el.text().collect::<String>());
        if is_headline(&text) && !out.contains(&text) {
            out.push(text);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_filtered_and_deduplicated() {
        let html = r#"
            <h1>Markets rally   after rate cut</h1>
            <h2>Short one</h2>
            <h2>About our newsroom and staff</h2>
            <h3>Markets rally after rate cut</h3>
            <h3>Storm closes coastal highways</h3>
            <a class="headline">Ignored when headings exist at all</a>"#;
        assert_eq!(
            parse_headlines(html),
            ["Markets rally after rate cut", "Storm closes coastal highways"]
        );
    }

    #[test]
    fn falls_back_to_classed_links_then_all_links() {
        let classed = r#"<a class="Card-Title">Election results are in tonight</a>
                         <a href="/x">Plain link that is long enough</a>"#;
        assert_eq!(parse_headlines(classed), ["Election results are in tonight"]);

        let plain = r#"<a href="/x">Plain link that is long enough</a><a>Login to your account now</a>"#;
        assert_eq!(parse_headlines(plain), ["Plain link that is long enough"]);
    }
}
