// src/config/options.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// The data-type selector. One page/tab per kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    #[default]
    Images,
    Text,
    Tables,
    Movie,
    Book,
    Videos,
    Products,
    Headlines,
    PdfLinks,
}

impl PageKind {
    pub const ALL: [PageKind; 9] = [
        PageKind::Images,
        PageKind::Text,
        PageKind::Tables,
        PageKind::Movie,
        PageKind::Book,
        PageKind::Videos,
        PageKind::Products,
        PageKind::Headlines,
        PageKind::PdfLinks,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PageKind::Images    => "Images",
            PageKind::Text      => "Text",
            PageKind::Tables    => "Tables",
            PageKind::Movie     => "Movie Details",
            PageKind::Book      => "Book Details",
            PageKind::Videos    => "Videos",
            PageKind::Products  => "eBay Products",
            PageKind::Headlines => "News Headlines",
            PageKind::PdfLinks  => "PDF Links",
        }
    }

    /// File name (no extension) for the result cache.
    pub fn slug(&self) -> &'static str {
        match self {
            PageKind::Images    => "images",
            PageKind::Text      => "text",
            PageKind::Tables    => "tables",
            PageKind::Movie     => "movie",
            PageKind::Book      => "book",
            PageKind::Videos    => "videos",
            PageKind::Products  => "products",
            PageKind::Headlines => "headlines",
            PageKind::PdfLinks  => "pdf_links",
        }
    }

    /// File name (no extension) for exports.
    pub fn export_stem(&self) -> &'static str {
        match self {
            PageKind::Images    => "images",
            PageKind::Text      => "text",
            PageKind::Tables    => "tables",
            PageKind::Movie     => "movie_details",
            PageKind::Book      => "book_details",
            PageKind::Videos    => "videos",
            PageKind::Products  => "ebay_products",
            PageKind::Headlines => "news_headlines",
            PageKind::PdfLinks  => "pdf_links",
        }
    }

    /// Lower-case noun used in status lines ("Scraping images...").
    pub fn noun(&self) -> &'static str {
        match self {
            PageKind::Images    => "images",
            PageKind::Text      => "text",
            PageKind::Tables    => "tables",
            PageKind::Movie     => "movie details",
            PageKind::Book      => "book details",
            PageKind::Videos    => "videos",
            PageKind::Products  => "eBay products",
            PageKind::Headlines => "news headlines",
            PageKind::PdfLinks  => "PDF links",
        }
    }

    pub fn empty_message(&self) -> String {
        match self {
            PageKind::Movie | PageKind::Book => s!("No data found!"),
            _ => format!("No {} found!", self.noun()),
        }
    }

    /// Movie/Book/Products take a search term, everything else a page URL.
    pub fn takes_search_term(&self) -> bool {
        matches!(self, PageKind::Movie | PageKind::Book | PageKind::Products)
    }

    /// Which filter controls the page shows.
    pub fn uses_item_limit(&self) -> bool {
        matches!(self, PageKind::Images | PageKind::Videos | PageKind::Products)
    }

    pub fn uses_table_limit(&self) -> bool {
        matches!(self, PageKind::Tables)
    }

    pub fn uses_image_format(&self) -> bool {
        matches!(self, PageKind::Images | PageKind::Products)
    }

    pub fn uses_video_format(&self) -> bool {
        matches!(self, PageKind::Videos)
    }

    /// Keyword used by the web form's `data_type` field.
    pub fn form_key(&self) -> &'static str {
        match self {
            PageKind::Images    => "image",
            PageKind::Text      => "text",
            PageKind::Tables    => "table",
            PageKind::Movie     => "movie",
            PageKind::Book      => "book",
            PageKind::Videos    => "video",
            PageKind::Products  => "ebay",
            PageKind::Headlines => "news",
            PageKind::PdfLinks  => "pdf",
        }
    }

    pub fn from_form_key(key: &str) -> Option<Self> {
        PageKind::ALL.into_iter().find(|k| k.form_key() == key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    All,
    Png,
    Jpg,
    Webp,
    Gif,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 5] = [
        ImageFormat::All,
        ImageFormat::Png,
        ImageFormat::Jpg,
        ImageFormat::Webp,
        ImageFormat::Gif,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImageFormat::All  => "all",
            ImageFormat::Png  => "png",
            ImageFormat::Jpg  => "jpg",
            ImageFormat::Webp => "webp",
            ImageFormat::Gif  => "gif",
        }
    }

    /// Extensions (with dot) a URL may end in to match this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ImageFormat::All  => &[".png", ".jpg", ".jpeg", ".webp", ".gif"],
            ImageFormat::Png  => &[".png"],
            ImageFormat::Jpg  => &[".jpg", ".jpeg"],
            ImageFormat::Webp => &[".webp"],
            ImageFormat::Gif  => &[".gif"],
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "jpeg" => Some(ImageFormat::Jpg),
            _ => ImageFormat::ALL.into_iter().find(|f| f.label() == s),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    #[default]
    All,
    Mp4,
    Avi,
    Mkv,
    Mov,
    Webm,
}

impl VideoFormat {
    pub const ALL: [VideoFormat; 6] = [
        VideoFormat::All,
        VideoFormat::Mp4,
        VideoFormat::Avi,
        VideoFormat::Mkv,
        VideoFormat::Mov,
        VideoFormat::Webm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VideoFormat::All  => "all",
            VideoFormat::Mp4  => "mp4",
            VideoFormat::Avi  => "avi",
            VideoFormat::Mkv  => "mkv",
            VideoFormat::Mov  => "mov",
            VideoFormat::Webm => "webm",
        }
    }

    /// `All` accepts anything; otherwise the bare extension must match.
    pub fn accepts(&self, ext: &str) -> bool {
        match self {
            VideoFormat::All => true,
            other => other.label() == ext.to_ascii_lowercase(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        VideoFormat::ALL.into_iter().find(|f| f.label() == s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub page: PageKind,
    /// URL or search term, as typed.
    pub target: String,
    pub image_format: ImageFormat,
    pub video_format: VideoFormat,
    pub item_limit: Option<usize>,
    pub table_limit: Option<usize>,
    pub use_browser: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            page: PageKind::Images,
            target: s!(),
            image_format: ImageFormat::All,
            video_format: VideoFormat::All,
            item_limit: None,
            table_limit: None,
            use_browser: cfg!(feature = "browser"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Txt,
    Csv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Txt, ExportFormat::Csv, ExportFormat::Json];

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Txt  => "txt",
            ExportFormat::Csv  => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Txt  => "TXT",
            ExportFormat::Csv  => "CSV",
            ExportFormat::Json => "JSON",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        ExportFormat::ALL.into_iter().find(|f| f.ext() == s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    pub include_headers: bool,
    pub open_after_export: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Txt,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
            open_after_export: false,
        }
    }
}

impl ExportOptions {
    /// Parse GUI text into the output directory. Empty → default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() { PathBuf::from(DEFAULT_OUT_DIR) } else { PathBuf::from(s) };
    }
}

/// "All" unless the text is a positive integer.
pub fn parse_limit(text: &str) -> Option<usize> {
    let t = text.trim();
    if t.is_empty() || !t.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    t.parse::<usize>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_accepts_only_positive_digits() {
        assert_eq!(parse_limit("12"), Some(12));
        assert_eq!(parse_limit(" 3 "), Some(3));
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit(""), None);
        assert_eq!(parse_limit("-4"), None);
        assert_eq!(parse_limit("ten"), None);
    }

    #[test]
    fn form_keys_round_trip() {
        for kind in PageKind::ALL {
            assert_eq!(PageKind::from_form_key(kind.form_key()), Some(kind));
        }
        assert_eq!(PageKind::from_form_key("nope"), None);
    }

    #[test]
    fn jpg_covers_jpeg() {
        assert_eq!(ImageFormat::parse("JPEG"), Some(ImageFormat::Jpg));
        assert!(ImageFormat::Jpg.extensions().contains(&".jpeg"));
        assert!(VideoFormat::Mp4.accepts("MP4"));
        assert!(!VideoFormat::Mp4.accepts("webm"));
        assert!(VideoFormat::All.accepts(""));
    }

    #[test]
    fn empty_messages_name_the_kind() {
        assert_eq!(PageKind::Images.empty_message(), "No images found!");
        assert_eq!(PageKind::PdfLinks.empty_message(), "No PDF links found!");
        assert_eq!(PageKind::Movie.empty_message(), "No data found!");
    }
}
