// src/specs/book.rs
//
// Open Library: the search page carries most fields; the description
// lives on the work page.

use scraper::Html;

use crate::config::consts::{NA, OPENLIBRARY_BASE};
use crate::core::html::{or_na, select_text, text_of};
use crate::data::BookDetails;

fn with_scheme(src: &str) -> String {
    if src.starts_with("//") { join!("https:", src) } else { s!(src) }
}

/// Fields of the first search hit. `description` is left "N/A" until the
/// work page is read.
pub fn parse_book_search(html: &str) -> Option<BookDetails> {
    let doc = Html::parse_document(html);
    let item = doc.select(css!("li.searchResultItem")).next()?;

    let title_link = item.select(css!("h3.booktitle a")).next();
    let href = title_link.and_then(|a| a.value().attr("href")).unwrap_or("");

    let cover_url = item
        .select(css!("span.bookcover img"))
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(with_scheme);

    let year = select_text(item, css!("span.resultDetails span"))
        .map(|y| y.replace("First published in ", ""));

    Some(BookDetails {
        name: or_na(title_link.map(text_of).filter(|t| !t.is_empty())),
        cover_url: or_na(cover_url),
        author: or_na(select_text(item, css!("span.bookauthor a"))),
        year: or_na(year),
        rating: or_na(select_text(item, css!(r#"span.ratingsByline span[itemprop="ratingValue"]"#))),
        description: s!(NA),
        book_link: join!(OPENLIBRARY_BASE, href),
    })
}

/// Link-free paragraphs of the "read more" block, space-joined.
pub fn parse_book_description(html: &str) -> String {
    let doc = Html::parse_document(html);
    let Some(block) = doc.select(css!("div.read-more__content")).next() else {
        return s!(NA);
    };
    block
        .select(css!("p"))
        .filter(|p| p.select(css!("a")).next().is_none())
        .map(text_of)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH: &str = r#"<ul>
        <li class="searchResultItem">
            <span class="bookcover"><img src="//covers.openlibrary.org/b/id/1-M.jpg"></span>
            <h3 class="booktitle"><a href="/works/OL893415W">Dune</a></h3>
            <span class="bookauthor">by <a href="/authors/OL79034A">Frank Herbert</a></span>
            <span class="resultDetails"><span>First published in 1965</span></span>
            <span class="ratingsByline"><span itemprop="ratingValue">4.3</span></span>
        </li>
    </ul>"#;

    #[test]
    fn first_result_fields() {
        let b = parse_book_search(SEARCH).unwrap();
        assert_eq!(b.name, "Dune");
        assert_eq!(b.cover_url, "https://covers.openlibrary.org/b/id/1-M.jpg");
        assert_eq!(b.author, "Frank Herbert");
        assert_eq!(b.year, "1965");
        assert_eq!(b.rating, "4.3");
        assert_eq!(b.book_link, "https://openlibrary.org/works/OL893415W");
        assert!(parse_book_search("<ul></ul>").is_none());
    }

    #[test]
    fn description_skips_link_paragraphs() {
        let html = r#"<div class="read-more__content">
            <p>Set on the desert planet Arrakis.</p>
            <p>See <a href="/x">also</a></p>
            <p>A story of politics.</p>
        </div>"#;
        assert_eq!(parse_book_description(html), "Set on the desert planet Arrakis. A story of politics.");
        assert_eq!(parse_book_description("<p>none</p>"), "N/A");
    }
}
