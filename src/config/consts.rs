// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";
pub const PAGE_TIMEOUT_SECS: u64 = 10;
pub const IMAGE_TIMEOUT_SECS: u64 = 5;

// Browser fallback
pub const BROWSER_LOAD_TIMEOUT_SECS: u64 = 30;
pub const BROWSER_WAIT_SECS: u64 = 10;
pub const PDF_BROWSER_WAIT_SECS: u64 = 15;

// Search endpoints
pub const IMDB_BASE: &str = "https://www.imdb.com";
pub const OPENLIBRARY_BASE: &str = "https://openlibrary.org";
pub const EBAY_BASE: &str = "https://www.ebay.com";

// Scrape
pub const EBAY_SKIP_LISTINGS: usize = 2; // leading placeholder cards
pub const EBAY_MAX_PRODUCTS: usize = 100;
pub const HEADLINE_MIN_CHARS: usize = 15;
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150?text=No+Image";
pub const NA: &str = "N/A";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "settings.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Gallery
pub const THUMB_EDGE: u32 = 400;
pub const VIEWER_W: u32 = 780;
pub const VIEWER_H: u32 = 520;

// Concurrency
pub const WORKERS: usize = 5;

// Web front end
pub const DEFAULT_WEB_ADDR: &str = "127.0.0.1:5000";
pub const WEB_ADDR_ENV: &str = "WEB_SCRAPE_ADDR";
