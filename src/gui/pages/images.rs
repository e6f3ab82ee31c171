// src/gui/pages/images.rs
use eframe::egui::{self, Sense, Vec2};

use crate::config::options::PageKind;
use crate::data::Scraped;

use super::{numbered_list, Page, PageView};

/// On-screen cell; thumbnails are decoded at up to twice this.
const CELL: f32 = 200.0;

pub struct ImagesPage;
pub static PAGE: ImagesPage = ImagesPage;

impl Page for ImagesPage {
    fn kind(&self) -> PageKind {
        PageKind::Images
    }

    fn show(&self, ui: &mut egui::Ui, view: &mut PageView<'_>) {
        let Scraped::Images(urls) = view.data else { return };

        if view.gallery.is_empty() {
            ui.label(format!("{} image URL(s). Press \"Update Display\" to load the gallery.", urls.len()));
            ui.add_space(4.0);
            numbered_list(ui, urls, |ui, url| {
                ui.hyperlink(url);
            });
            return;
        }

        let spacing = ui.spacing().item_spacing.x;
        let cols = ((ui.available_width() + spacing) / (CELL + spacing)).floor().max(1.0) as usize;

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            egui::Grid::new("image_gallery").spacing([spacing, spacing]).show(ui, |ui| {
                for (i, item) in view.gallery.items.iter().enumerate() {
                    let resp = ui
                        .add(
                            egui::Image::new(&item.texture)
                                .max_size(Vec2::splat(CELL))
                                .sense(Sense::click()),
                        )
                        .on_hover_text(item.image.url.as_str());
                    if resp.clicked() {
                        view.open_image = Some(i);
                    }
                    if (i + 1) % cols == 0 {
                        ui.end_row();
                    }
                }
            });
        });
    }
}
