// src/gui/pages/details.rs
//
// Movie and Book share one layout: title, image link, field grid, page link.

use eframe::egui;

use crate::config::consts::NA;
use crate::config::options::PageKind;
use crate::core::sanitize::capitalize_key;
use crate::data::Scraped;

use super::{Page, PageView};

pub struct DetailsPage(PageKind);

pub static MOVIE: DetailsPage = DetailsPage(PageKind::Movie);
pub static BOOK: DetailsPage = DetailsPage(PageKind::Book);

fn link_or_text(ui: &mut egui::Ui, label: &str, url: &str) {
    if url.is_empty() || url == NA {
        ui.label(NA);
    } else {
        ui.hyperlink_to(label, url);
    }
}

impl Page for DetailsPage {
    fn kind(&self) -> PageKind {
        self.0
    }

    fn show(&self, ui: &mut egui::Ui, view: &mut PageView<'_>) {
        // (image field, link field) are drawn as links, the rest as text.
        let (fields, image_key, link_key): (Vec<(&str, &str)>, &str, &str) = match view.data {
            Scraped::Movie(m) => (m.fields().to_vec(), "poster_url", "movie_link"),
            Scraped::Book(b) => (b.fields().to_vec(), "cover_url", "book_link"),
            _ => return,
        };
        let name = fields.iter().find(|(k, _)| *k == "name").map(|(_, v)| *v).unwrap_or(NA);

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.heading(name);
            ui.add_space(6.0);

            egui::Grid::new(("details", self.0))
                .num_columns(2)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for (key, value) in fields.iter().filter(|(k, _)| *k != "name") {
                        ui.strong(capitalize_key(key));
                        if *key == image_key {
                            link_or_text(ui, "Open image", value);
                        } else if *key == link_key {
                            link_or_text(ui, value, value);
                        } else {
                            ui.add(egui::Label::new(*value).wrap());
                        }
                        ui.end_row();
                    }
                });
        });
    }
}
