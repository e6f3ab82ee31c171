// src/data.rs
//
// What a scrape produces. One `Scraped` variant per page kind; views and
// exports work from `datasets()` (tabular) or `to_text()` (plain text).

use serde::{Deserialize, Serialize};

use crate::config::options::{ImageFormat, PageKind};
use crate::core::sanitize::capitalize_key;
use crate::core::url::path_extension;
use crate::store::DataSet;

/// One scraped `<table>`; `headers` holds the `th` row when present.
pub type Table = DataSet;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub name: String,
    pub poster_url: String,
    pub year: String,
    pub rating: String,
    pub plot: String,
    pub genre: String,
    pub movie_link: String,
}

impl MovieDetails {
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("poster_url", self.poster_url.as_str()),
            ("year", self.year.as_str()),
            ("rating", self.rating.as_str()),
            ("plot", self.plot.as_str()),
            ("genre", self.genre.as_str()),
            ("movie_link", self.movie_link.as_str()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub name: String,
    pub cover_url: String,
    pub author: String,
    pub year: String,
    pub rating: String,
    pub description: String,
    pub book_link: String,
}

impl BookDetails {
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("cover_url", self.cover_url.as_str()),
            ("author", self.author.as_str()),
            ("year", self.year.as_str()),
            ("rating", self.rating.as_str()),
            ("description", self.description.as_str()),
            ("book_link", self.book_link.as_str()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub link: String,
    pub image_url: String,
    pub price: String,
    pub rating: String,
}

impl Product {
    pub const HEADERS: [&'static str; 5] = ["title", "link", "image_url", "price", "rating"];

    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("title", self.title.as_str()),
            ("link", self.link.as_str()),
            ("image_url", self.image_url.as_str()),
            ("price", self.price.as_str()),
            ("rating", self.rating.as_str()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfLink {
    pub url: String,
    pub name: String,
}

/// A gallery image that downloaded. Never cached.
#[derive(Clone, Debug)]
pub struct DownloadedImage {
    pub url: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Scraped {
    /// Every image URL on the page; format/limit apply at display time.
    Images(Vec<String>),
    Text(String),
    Tables(Vec<Table>),
    Movie(MovieDetails),
    Book(BookDetails),
    Videos(Vec<String>),
    Products(Vec<Product>),
    Headlines(Vec<String>),
    PdfLinks(Vec<PdfLink>),
}

fn kv_rows(fields: &[(&'static str, &str)]) -> DataSet {
    DataSet::new(
        Some(vec![s!("Field"), s!("Value")]),
        fields.iter().map(|(k, v)| vec![capitalize_key(k), s!(*v)]).collect(),
    )
}

fn numbered(header: &str, items: &[String]) -> DataSet {
    DataSet::new(
        Some(vec![s!("#"), s!(header)]),
        items.iter().enumerate().map(|(i, v)| vec![(i + 1).to_string(), v.clone()]).collect(),
    )
}

impl Scraped {
    pub fn kind(&self) -> PageKind {
        match self {
            Scraped::Images(_)    => PageKind::Images,
            Scraped::Text(_)      => PageKind::Text,
            Scraped::Tables(_)    => PageKind::Tables,
            Scraped::Movie(_)     => PageKind::Movie,
            Scraped::Book(_)      => PageKind::Book,
            Scraped::Videos(_)    => PageKind::Videos,
            Scraped::Products(_)  => PageKind::Products,
            Scraped::Headlines(_) => PageKind::Headlines,
            Scraped::PdfLinks(_)  => PageKind::PdfLinks,
        }
    }

    /// Item count; single-record kinds count as one.
    pub fn len(&self) -> usize {
        match self {
            Scraped::Images(v) | Scraped::Videos(v) | Scraped::Headlines(v) => v.len(),
            Scraped::Text(t) => usize::from(!t.is_empty()),
            Scraped::Tables(v) => v.len(),
            Scraped::Movie(_) | Scraped::Book(_) => 1,
            Scraped::Products(v) => v.len(),
            Scraped::PdfLinks(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep the first `n` items of list kinds.
    pub fn truncate(&mut self, n: usize) {
        match self {
            Scraped::Images(v) | Scraped::Videos(v) | Scraped::Headlines(v) => v.truncate(n),
            Scraped::Tables(v) => v.truncate(n),
            Scraped::Products(v) => v.truncate(n),
            Scraped::PdfLinks(v) => v.truncate(n),
            Scraped::Text(_) | Scraped::Movie(_) | Scraped::Book(_) => {}
        }
    }

    /// Status line after a successful scrape.
    pub fn summary(&self) -> String {
        match self {
            Scraped::Text(t) => format!("Scraped {} lines of text", t.lines().count()),
            Scraped::Movie(m) => format!("Found movie: {}", m.name),
            Scraped::Book(b) => format!("Found book: {}", b.name),
            other => format!("Found {} {}", other.len(), other.kind().noun()),
        }
    }

    /// Tabular projection; one named set per table, one set for everything else.
    pub fn datasets(&self) -> Vec<(String, DataSet)> {
        let stem = self.kind().export_stem();
        match self {
            Scraped::Tables(tables) => tables
                .iter()
                .enumerate()
                .map(|(i, t)| (format!("{stem}_{:02}", i + 1), t.clone()))
                .collect(),
            Scraped::Images(urls) => vec![(s!(stem), numbered("Url", urls))],
            Scraped::Videos(urls) => vec![(s!(stem), numbered("Url", urls))],
            Scraped::Headlines(h) => vec![(s!(stem), numbered("Headline", h))],
            Scraped::Text(t) => {
                let rows = t.lines().map(|l| vec![s!(l)]).collect();
                vec![(s!(stem), DataSet::new(Some(vec![s!("Text")]), rows))]
            }
            Scraped::Movie(m) => vec![(s!(stem), kv_rows(&m.fields()))],
            Scraped::Book(b) => vec![(s!(stem), kv_rows(&b.fields()))],
            Scraped::Products(ps) => {
                let headers = Product::HEADERS.iter().map(|h| capitalize_key(h)).collect();
                let rows = ps
                    .iter()
                    .map(|p| p.fields().iter().map(|(_, v)| s!(*v)).collect())
                    .collect();
                vec![(s!(stem), DataSet::new(Some(headers), rows))]
            }
            Scraped::PdfLinks(links) => {
                let rows = links.iter().map(|l| vec![l.url.clone(), l.name.clone()]).collect();
                vec![(s!(stem), DataSet::new(Some(vec![s!("Url"), s!("Name")]), rows))]
            }
        }
    }

    /// Plain-text rendering used for .txt export and the clipboard.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self {
            Scraped::Text(t) => out.push_str(t),
            Scraped::Tables(tables) => {
                for (i, t) in tables.iter().enumerate() {
                    out.push_str(&format!("Table {}:\n", i + 1));
                    for row in t.all_rows() {
                        out.push_str(&row.join("\t"));
                        out.push('\n');
                    }
                    out.push('\n');
                }
            }
            Scraped::Movie(m) => push_fields(&mut out, "", &m.fields()),
            Scraped::Book(b) => push_fields(&mut out, "", &b.fields()),
            Scraped::Images(urls) => push_numbered(&mut out, "Image", urls),
            Scraped::Videos(urls) => push_numbered(&mut out, "Video", urls),
            Scraped::Headlines(h) => push_numbered(&mut out, "Headline", h),
            Scraped::Products(ps) => {
                for (i, p) in ps.iter().enumerate() {
                    out.push_str(&format!("Product {}:\n", i + 1));
                    push_fields(&mut out, "  ", &p.fields());
                    out.push('\n');
                }
            }
            Scraped::PdfLinks(links) => {
                for (i, l) in links.iter().enumerate() {
                    out.push_str(&format!("PDF {}:\n", i + 1));
                    push_fields(&mut out, "  ", &[("url", l.url.as_str()), ("name", l.name.as_str())]);
                    out.push('\n');
                }
            }
        }
        out
    }
}

fn push_fields(out: &mut String, indent: &str, fields: &[(&'static str, &str)]) {
    for (k, v) in fields {
        out.push_str(&format!("{indent}{}: {v}\n", capitalize_key(k)));
    }
}

fn push_numbered(out: &mut String, label: &str, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{label} {}: {item}\n", i + 1));
    }
}

/// Images whose URL path ends in one of the format's extensions, then the limit.
pub fn filter_images(urls: &[String], format: ImageFormat, limit: Option<usize>) -> Vec<String> {
    let allowed = format.extensions();
    urls.iter()
        .filter(|u| {
            let ext = path_extension(u);
            !ext.is_empty() && allowed.iter().any(|a| a[1..] == ext)
        })
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}
