// src/core/url.rs
use std::sync::LazyLock;

use regex::Regex;
use ::url::{Url, form_urlencoded};

use super::error::{Result, ScrapeError};
use crate::config::consts::{EBAY_BASE, IMDB_BASE, OPENLIBRARY_BASE};
use crate::config::options::PageKind;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url pattern")
});

pub fn is_valid_url(s: &str) -> bool {
    URL_RE.is_match(s)
}

/// Check what the user typed before any request goes out.
/// URL kinds get `https://` when no scheme was given.
pub fn normalize_target(kind: PageKind, raw: &str) -> Result<String> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(ScrapeError::InvalidTarget(s!("Please enter a URL or search term!")));
    }
    match kind {
        PageKind::Movie | PageKind::Book => {
            let squashed: String = t.chars().filter(|c| *c != ' ').collect();
            if !squashed.chars().all(char::is_alphanumeric) {
                return Err(ScrapeError::InvalidTarget(s!("Please enter a valid movie or book name!")));
            }
            Ok(s!(t))
        }
        PageKind::Products => Ok(s!(t)),
        _ => {
            let lower = t.to_ascii_lowercase();
            let url = if lower.starts_with("http://") || lower.starts_with("https://") {
                s!(t)
            } else if t.contains("://") {
                // some other scheme
                return Err(ScrapeError::InvalidTarget(s!("Invalid URL format!")));
            } else {
                join!("https://", t)
            };
            if !is_valid_url(&url) {
                return Err(ScrapeError::InvalidTarget(s!("Invalid URL format!")));
            }
            Ok(url)
        }
    }
}

/// `href` made absolute against `base`.
pub fn resolve(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    match Url::parse(href) {
        Ok(abs) => Some(abs.into()),
        Err(_) => Url::parse(base).ok()?.join(href).ok().map(Into::into),
    }
}

fn strip_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Lowercase extension of the URL's path, without the dot. "" when none.
pub fn path_extension(url: &str) -> String {
    let path = strip_query(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => s!(),
    }
}

/// File name part of a URL, query dropped.
pub fn last_segment(url: &str) -> String {
    let path = url.split('?').next().unwrap_or(url);
    s!(path.rsplit('/').next().unwrap_or(path))
}

fn encode(term: &str) -> String {
    form_urlencoded::byte_serialize(term.as_bytes()).collect()
}

/// Search page for the kinds that take a term.
pub fn search_url(kind: PageKind, term: &str) -> Option<String> {
    let q = encode(term);
    match kind {
        PageKind::Movie => Some(format!("{IMDB_BASE}/find?q={q}&ref_=nv_sr_sm")),
        PageKind::Book => Some(format!("{OPENLIBRARY_BASE}/search?q={q}&mode=everything")),
        PageKind::Products => Some(format!("{EBAY_BASE}/sch/i.html?_nkw={q}&_sop=12")),
        _ => None,
    }
}
