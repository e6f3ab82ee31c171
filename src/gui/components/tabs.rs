// src/gui/components/tabs.rs
use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let current = app.current_index();
    ui.horizontal_wrapped(|ui| {
        ui.label("Data type:");
        for (i, page) in router::all_pages().iter().enumerate() {
            if ui.selectable_label(i == current, page.title()).clicked() && i != current {
                app.set_current_index(i);
                app.state.options.scrape.page = page.kind();
                app.viewer = None;
                logd!("UI: Page → {:?}", page.kind());
            }
        }
    });
}
