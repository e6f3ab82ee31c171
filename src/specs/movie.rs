// src/specs/movie.rs
//
// IMDb: search results page, then the title page of the first hit.

use scraper::Html;

use crate::config::consts::{IMDB_BASE, NA};
use crate::core::html::{or_na, select_text, text_of};
use crate::core::url::resolve;
use crate::data::MovieDetails;

/// Link to the first search result, if any.
pub fn parse_movie_search(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let first = doc.select(css!(".ipc-metadata-list-summary-item a")).next()?;
    let href = first.value().attr("href").unwrap_or("");
    resolve(IMDB_BASE, href).or_else(|| Some(s!(IMDB_BASE)))
}

pub fn parse_movie_page(html: &str, link: &str) -> MovieDetails {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let poster_url = root
        .select(css!("img.ipc-image"))
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string);

    let rating = select_text(root, css!(r#"div[data-testid="hero-rating-bar__aggregate-rating__score"] span"#))
        .map(|r| join!(&r, "/10"));

    let plot = select_text(root, css!(r#"span[data-testid="plot-xl"]"#))
        .or_else(|| select_text(root, css!(r#"[data-testid="plot"]"#)));

    let genres: Vec<String> = root.select(css!(".ipc-chip__text")).map(text_of).collect();
    let genre = if genres.is_empty() { s!(NA) } else { genres.join(", ") };

    MovieDetails {
        name: or_na(select_text(root, css!("h1"))),
        poster_url: or_na(poster_url),
        year: or_na(select_text(root, css!(r#"a[href*="/releaseinfo"]"#))),
        rating: or_na(rating),
        plot: or_na(plot),
        genre,
        movie_link: s!(link),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_search_hit_is_absolute() {
        let html = r#"<ul>
            <li class="ipc-metadata-list-summary-item"><a href="/title/tt0133093/?ref_=fn">The Matrix</a></li>
            <li class="ipc-metadata-list-summary-item"><a href="/title/tt0234215/">Reloaded</a></li>
        </ul>"#;
        assert_eq!(
            parse_movie_search(html).as_deref(),
            Some("https://www.imdb.com/title/tt0133093/?ref_=fn")
        );
        assert_eq!(parse_movie_search("<p>nothing</p>"), None);
    }

    #[test]
    fn details_with_fallbacks() {
        let html = r#"<main>
            <h1> The Matrix </h1>
            <img class="ipc-image" src="https://m.media/poster.jpg">
            <a href="/title/tt0133093/releaseinfo">1999</a>
            <div data-testid="hero-rating-bar__aggregate-rating__score"><span>8.7</span><span>/10</span></div>
            <p data-testid="plot"><span>A hacker learns the truth.</span></p>
            <span class="ipc-chip__text">Action</span><span class="ipc-chip__text">Sci-Fi</span>
        </main>"#;
        let m = parse_movie_page(html, "https://www.imdb.com/title/tt0133093/");
        assert_eq!(m.name, "The Matrix");
        assert_eq!(m.poster_url, "https://m.media/poster.jpg");
        assert_eq!(m.year, "1999");
        assert_eq!(m.rating, "8.7/10");
        assert_eq!(m.plot, "A hacker learns the truth.");
        assert_eq!(m.genre, "Action, Sci-Fi");
        assert_eq!(m.movie_link, "https://www.imdb.com/title/tt0133093/");
    }

    #[test]
    fn empty_page_is_all_na() {
        let m = parse_movie_page("<html></html>", "x");
        assert_eq!(m.name, "N/A");
        assert_eq!(m.rating, "N/A");
        assert_eq!(m.genre, "N/A");
    }
}
