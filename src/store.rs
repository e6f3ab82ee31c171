// src/store.rs
//
// Table shape shared by views and exports, plus the last-result cache in
// `.store/<slug>.json` that the GUI reloads at start-up.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::consts::STORE_DIR;
use crate::config::options::PageKind;
use crate::core::error::Result;
use crate::data::Scraped;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.headers.is_none()
    }

    /// Header row (if any) followed by the body.
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.headers.iter().chain(self.rows.iter())
    }
}

fn cache_path(dir: &Path, kind: PageKind) -> PathBuf {
    dir.join(join!(kind.slug(), ".json"))
}

pub fn save_result(scraped: &Scraped) -> Result<PathBuf> {
    save_result_in(Path::new(STORE_DIR), scraped)
}

pub fn save_result_in(dir: &Path, scraped: &Scraped) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = cache_path(dir, scraped.kind());
    let json = serde_json::to_string_pretty(scraped)?;
    fs::write(&path, json)?;
    logd!("Store: saved {} to {}", scraped.kind().slug(), path.display());
    Ok(path)
}

pub fn load_result(kind: PageKind) -> Option<Scraped> {
    load_result_in(Path::new(STORE_DIR), kind)
}

/// `None` when nothing is cached or the file doesn't parse (or belongs to
/// another kind).
pub fn load_result_in(dir: &Path, kind: PageKind) -> Option<Scraped> {
    let path = cache_path(dir, kind);
    let text = fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<Scraped>(&text) {
        Ok(s) if s.kind() == kind => Some(s),
        Ok(_) => None,
        Err(e) => {
            logw!("Store: ignoring {} ({e})", path.display());
            None
        }
    }
}

pub fn load_all() -> Vec<Scraped> {
    load_all_in(Path::new(STORE_DIR))
}

pub fn load_all_in(dir: &Path) -> Vec<Scraped> {
    PageKind::ALL.into_iter().filter_map(|k| load_result_in(dir, k)).collect()
}
