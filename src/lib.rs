// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod pdf;
pub mod progress;
pub mod scrape;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "web")]
pub mod web;
