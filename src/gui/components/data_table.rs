// src/gui/components/data_table.rs
//
// Draws one `DataSet` as a striped table. Purely a view.

use std::hash::Hash;

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBody, TableBuilder};

use crate::store::DataSet;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, id_salt: impl Hash, ds: &DataSet) {
    // Scraped tables are ragged; size to the widest row.
    let cols = ds.all_rows().map(Vec::len).max().unwrap_or(0);
    if cols == 0 {
        return;
    }

    let mut table = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        let col = if ci + 1 == cols {
            Column::remainder().at_least(60.0).clip(true)
        } else {
            Column::auto().at_least(60.0).at_most(360.0).resizable(true).clip(true)
        };
        table = table.column(col);
    }

    let body = |mut body: TableBody<'_>| {
        for row in &ds.rows {
            body.row(ROW_H, |mut r| {
                for ci in 0..cols {
                    r.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        let cell = row.get(ci).map(String::as_str).unwrap_or("");
                        ui.label(cell).on_hover_text(cell);
                    });
                }
            });
        }
    };

    match &ds.headers {
        Some(headers) => table
            .header(ROW_H + 4.0, |mut header| {
                for ci in 0..cols {
                    header.col(|ui| {
                        let label = headers.get(ci).cloned().unwrap_or_default();
                        ui.label(RichText::new(label).strong());
                    });
                }
            })
            .body(body),
        None => table.body(body),
    };
}
