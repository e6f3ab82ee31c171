// src/gui/components/results.rs
use eframe::egui;

use crate::gui::{
    app::{App, Viewer},
    pages::PageView,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let kind = page.kind();

    let Some(data) = app.views.get(&kind).filter(|d| !d.is_empty()) else {
        let msg = if app.results.contains_key(&kind) {
            kind.empty_message()
        } else {
            s!("Enter a URL or search term and press Scrape Now.")
        };
        ui.centered_and_justified(|ui| ui.weak(msg));
        return;
    };

    let mut view = PageView { data, gallery: &app.gallery, open_image: None };
    page.show(ui, &mut view);

    if let Some(index) = view.open_image {
        logd!("UI: Open image #{}", index + 1);
        app.viewer = Some(Viewer { index, texture: None });
    }
}
