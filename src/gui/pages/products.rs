// src/gui/pages/products.rs
use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::NA;
use crate::config::options::PageKind;
use crate::data::Scraped;

use super::{Page, PageView};

pub struct ProductsPage;
pub static PAGE: ProductsPage = ProductsPage;

impl Page for ProductsPage {
    fn kind(&self) -> PageKind {
        PageKind::Products
    }

    fn show(&self, ui: &mut egui::Ui, view: &mut PageView<'_>) {
        let Scraped::Products(products) = view.data else { return };

        TableBuilder::new(ui)
            .id_salt("products_table")
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::exact(36.0))
            .column(Column::initial(420.0).at_least(120.0).resizable(true).clip(true))
            .column(Column::initial(110.0).resizable(true))
            .column(Column::initial(160.0).resizable(true).clip(true))
            .column(Column::remainder())
            .header(22.0, |mut header| {
                for title in ["#", "Title", "Price", "Rating", "Image"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for (i, p) in products.iter().enumerate() {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            ui.label((i + 1).to_string());
                        });
                        row.col(|ui| {
                            if p.link == NA {
                                ui.label(p.title.as_str());
                            } else {
                                ui.hyperlink_to(p.title.as_str(), &p.link);
                            }
                        });
                        row.col(|ui| {
                            ui.label(p.price.as_str());
                        });
                        row.col(|ui| {
                            ui.label(p.rating.as_str());
                        });
                        row.col(|ui| {
                            if p.image_url == NA {
                                ui.label(NA);
                            } else {
                                ui.hyperlink_to("View", &p.image_url);
                            }
                        });
                    });
                }
            });
    }
}
