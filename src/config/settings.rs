// src/config/settings.rs
//
// Persisted GUI settings (`.store/settings.toml`). Anything missing or
// unreadable falls back to defaults; saving is best-effort.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::{SETTINGS_FILE, STORE_DIR};
use super::options::{ExportFormat, ImageFormat, PageKind, VideoFormat};
use super::state::AppState;
use crate::core::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page: PageKind,
    pub image_format: ImageFormat,
    pub video_format: VideoFormat,
    pub use_browser: bool,
    pub item_limit: String,
    pub table_limit: String,
    pub export_format: ExportFormat,
    pub out_dir: String,
    pub include_headers: bool,
    pub open_after_export: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_state(&AppState::default())
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        Path::new(STORE_DIR).join(SETTINGS_FILE)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(text) = fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                logw!("Settings: {} is unreadable ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn from_state(state: &AppState) -> Self {
        let scrape = &state.options.scrape;
        let export = &state.options.export;
        Self {
            page: scrape.page,
            image_format: scrape.image_format,
            video_format: scrape.video_format,
            use_browser: scrape.use_browser,
            item_limit: state.gui.item_limit_text.clone(),
            table_limit: state.gui.table_limit_text.clone(),
            export_format: export.format,
            out_dir: export.out_dir.to_string_lossy().into_owned(),
            include_headers: export.include_headers,
            open_after_export: export.open_after_export,
            dark_mode: state.gui.dark_mode,
        }
    }

    pub fn apply_to(&self, state: &mut AppState) {
        let scrape = &mut state.options.scrape;
        scrape.page = self.page;
        scrape.image_format = self.image_format;
        scrape.video_format = self.video_format;
        scrape.use_browser = self.use_browser && cfg!(feature = "browser");
        scrape.item_limit = super::options::parse_limit(&self.item_limit);
        scrape.table_limit = super::options::parse_limit(&self.table_limit);

        let export = &mut state.options.export;
        export.format = self.export_format;
        export.set_dir(&self.out_dir);
        export.include_headers = self.include_headers;
        export.open_after_export = self.open_after_export;

        state.gui.item_limit_text = self.item_limit.clone();
        state.gui.table_limit_text = self.table_limit.clone();
        state.gui.dark_mode = self.dark_mode;
        state.gui.current_page_index = PageKind::ALL
            .iter()
            .position(|k| *k == self.page)
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut state = AppState::default();
        state.options.scrape.page = PageKind::Videos;
        state.options.scrape.video_format = VideoFormat::Webm;
        state.options.export.format = ExportFormat::Csv;
        state.gui.item_limit_text = s!("7");
        state.gui.dark_mode = true;

        Settings::from_state(&state).save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);

        let mut fresh = AppState::default();
        loaded.apply_to(&mut fresh);
        assert_eq!(fresh.options.scrape.page, PageKind::Videos);
        assert_eq!(fresh.options.scrape.video_format, VideoFormat::Webm);
        assert_eq!(fresh.options.scrape.item_limit, Some(7));
        assert_eq!(fresh.options.export.format, ExportFormat::Csv);
        assert_eq!(fresh.gui.current_page_index, 5);
        assert!(fresh.gui.dark_mode);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "page = [[[").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "page = \"headlines\"\n").unwrap();
        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.page, PageKind::Headlines);
        assert_eq!(loaded.export_format, ExportFormat::Txt);
    }
}
