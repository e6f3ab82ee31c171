// src/core/error.rs
use thiserror::Error;

/// Everything a scrape, export or PDF lookup can fail with.
/// Front ends turn it into a one-line message.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// User input rejected before any request was made.
    #[error("{0}")]
    InvalidTarget(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Browser fallback is disabled")]
    BrowserDisabled,

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("{0}")]
    NothingToExport(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Toml(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

impl ScrapeError {
    /// Failures of the request itself (as opposed to "page had nothing").
    pub fn is_network(&self) -> bool {
        matches!(self, ScrapeError::Http(_) | ScrapeError::Status { .. })
    }
}
