// src/gui/pages/tables.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::data::Scraped;
use crate::gui::components::data_table;

use super::{Page, PageView};

pub struct TablesPage;
pub static PAGE: TablesPage = TablesPage;

impl Page for TablesPage {
    fn kind(&self) -> PageKind {
        PageKind::Tables
    }

    fn show(&self, ui: &mut egui::Ui, view: &mut PageView<'_>) {
        let Scraped::Tables(tables) = view.data else { return };
        egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            for (i, table) in tables.iter().enumerate() {
                ui.strong(format!("Table {} ({} rows)", i + 1, table.row_count()));
                data_table::draw(ui, ("scraped_table", i), table);
                ui.add_space(12.0);
            }
        });
    }
}
