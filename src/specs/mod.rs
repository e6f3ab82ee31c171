// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows where one kind of data lives in a page's HTML and how to
//! pull it out. Specs are **pure**: they take the page text (plus the page URL
//! when relative links need resolving) and return plain data. No requests, no
//! browser, no caching. That is `scrape`'s job.
//!
//! ## Conventions
//! - Selectors are compiled once through `css!`.
//! - Missing fields become `"N/A"` rather than dropping the record, except
//!   where a record is useless without the field (product title/link).
//! - Document order is preserved; dedup only where noted.
//!
//! ## Call chain
//! ```text
//! GUI / CLI / web → scrape::Scraper::run → fetch (or render) → specs::<kind>::parse_*
//! ```
//!
//! Specs are testable offline against inline fixtures.
pub mod book;
pub mod headlines;
pub mod images;
pub mod movie;
pub mod pdf_links;
pub mod products;
pub mod tables;
pub mod text;
pub mod videos;
