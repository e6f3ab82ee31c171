// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub dark_mode: bool,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Raw text of the "Number of items/tables" boxes; parsed on use.
    pub item_limit_text: String,
    pub table_limit_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_w: 1200,
            window_h: 800,
            current_page_index: 0,
            item_limit_text: s!(),
            table_limit_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
