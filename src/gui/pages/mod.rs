// src/gui/pages/mod.rs
//
// One page per data type. A page only draws a non-empty result; the
// empty/placeholder case is handled by `components::results`.

pub mod details;
pub mod images;
pub mod lists;
pub mod products;
pub mod tables;
pub mod text;

use eframe::egui;

use crate::config::options::PageKind;
use crate::data::Scraped;
use crate::gui::gallery::Gallery;

/// What a page gets to draw from, plus what it can ask for back.
pub struct PageView<'a> {
    pub data: &'a Scraped,
    pub gallery: &'a Gallery,
    /// Set by the Images page when a thumbnail is clicked.
    pub open_image: Option<usize>,
}

pub trait Page: Sync {
    fn kind(&self) -> PageKind;

    fn title(&self) -> &'static str {
        self.kind().title()
    }

    fn show(&self, ui: &mut egui::Ui, view: &mut PageView<'_>);
}

/// "1. foo" lines; `row` draws the part after the number.
pub(crate) fn numbered_list<T>(
    ui: &mut egui::Ui,
    items: &[T],
    mut row: impl FnMut(&mut egui::Ui, &T),
) {
    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for (i, item) in items.iter().enumerate() {
            ui.horizontal_wrapped(|ui| {
                ui.label(format!("{}.", i + 1));
                row(ui, item);
            });
        }
    });
}
