// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    file,
    gui::app::{App, Tone},
};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let kind = app.current_page_kind();
    let Some(view) = app.views.get(&kind).filter(|v| !v.is_empty()) else {
        app.set_status("Nothing to copy", Tone::Error);
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    match file::copy_text(view, export.format, export.include_headers) {
        Ok(txt) => {
            logf!("Copy: page={:?}, items={}, chars={}", kind, view.len(), txt.len());
            ui_ctx.copy_text(txt);
            app.set_status("Copied to clipboard!", Tone::Success);
        }
        Err(e) => {
            loge!("Copy: {e}");
            app.set_status(format!("Failed to copy: {e}"), Tone::Error);
        }
    }
}
