// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Long work runs on a worker thread and reports back through `JobMsg`;
// `poll` drains the channel once per frame.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod scrape;  // src/gui/actions/scrape.rs
mod update;  // src/gui/actions/update.rs

pub use copy::copy;
pub use export::export;
pub use scrape::scrape;
pub use update::update_display;

use std::path::PathBuf;

use eframe::egui;

use crate::{
    config::options::PageKind,
    core::error::{Result, ScrapeError},
    data::Scraped,
    gui::app::{App, Tone},
    gui::gallery::Decoded,
    store,
};

pub enum JobMsg {
    Scraped { kind: PageKind, result: Result<Scraped> },
    Gallery(Vec<Decoded>),
    Exported(Result<Vec<PathBuf>>),
    /// Last message of every job.
    Done,
}

/// Input problems read as they are; everything else gets a prefix.
fn failure_text(prefix: &str, e: &ScrapeError) -> String {
    match e {
        ScrapeError::InvalidTarget(m) | ScrapeError::NotFound(m) | ScrapeError::NothingToExport(m) => m.clone(),
        other => format!("{prefix}: {other}"),
    }
}

pub fn poll(app: &mut App, ctx: &egui::Context) {
    while let Ok(msg) = app.rx.try_recv() {
        match msg {
            JobMsg::Scraped { kind, result: Ok(scraped) } => {
                match store::save_result(&scraped) {
                    Ok(p) => logd!("Cache: Saved {:?} → {}", kind, p.display()),
                    Err(e) => loge!("Cache: Save failed {:?}: {}", kind, e),
                }
                app.results.insert(kind, scraped);
                app.rebuild_view(kind);
                if kind == PageKind::Images {
                    app.gallery.clear();
                    app.viewer = None;
                }

                let empty = app.views.get(&kind).is_none_or(Scraped::is_empty);
                if empty {
                    app.set_status(kind.empty_message(), Tone::Error);
                } else if let Some(view) = app.views.get(&kind) {
                    let summary = view.summary();
                    app.set_status(summary, Tone::Success);
                }
            }
            JobMsg::Scraped { kind, result: Err(e) } => {
                loge!("Scrape: Error page={:?}: {}", kind, e);
                app.set_status(failure_text("Failed to scrape", &e), Tone::Error);
            }
            JobMsg::Gallery(decoded) => {
                let n = decoded.len();
                app.gallery.replace(ctx, decoded);
                if n == 0 {
                    app.set_status("No images could be loaded!", Tone::Error);
                } else {
                    app.set_status(format!("Showing {n} image(s)"), Tone::Success);
                }
            }
            JobMsg::Exported(Ok(paths)) => {
                logf!("Export: OK count={}", paths.len());
                let msg = match paths.as_slice() {
                    [one] => format!("Data exported to {}!", one.display()),
                    many => format!("Exported {} files to {}", many.len(), app.state.options.export.out_dir.display()),
                };
                app.set_status(msg, Tone::Success);
            }
            JobMsg::Exported(Err(e)) => {
                loge!("Export: Error: {}", e);
                app.set_status(failure_text("Failed to export", &e), Tone::Error);
            }
            JobMsg::Done => app.running = false,
        }
        ctx.request_repaint();
    }
}
