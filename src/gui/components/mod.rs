// src/gui/components/mod.rs
pub mod action_bar;
pub mod data_table;
pub mod filter_bar;
pub mod results;
pub mod tabs;
pub mod target_bar;
pub mod viewer;
