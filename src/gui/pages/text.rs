// src/gui/pages/text.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::data::Scraped;

use super::{Page, PageView};

pub struct TextPage;
pub static PAGE: TextPage = TextPage;

impl Page for TextPage {
    fn kind(&self) -> PageKind {
        PageKind::Text
    }

    fn show(&self, ui: &mut egui::Ui, view: &mut PageView<'_>) {
        let Scraped::Text(text) = view.data else { return };
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            // &str is a read-only buffer: selectable, not editable
            let mut buf = text.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut buf)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );
        });
    }
}
