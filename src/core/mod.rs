// src/core/mod.rs

pub mod browser;
pub mod error;
pub mod html;
pub mod net;
pub mod sanitize;
pub mod url;

pub use error::{Result, ScrapeError};
