// src/scrape/mod.rs
mod images;
mod scrape;

pub use images::download_images;
pub use scrape::Scraper;
