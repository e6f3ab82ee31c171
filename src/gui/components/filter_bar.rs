// src/gui/components/filter_bar.rs
//
// Per-kind filters. Limits stay as raw text until Scrape Now / Update Display.

use eframe::egui::{self, Checkbox, ComboBox};

use crate::config::options::{ImageFormat, VideoFormat};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_page_kind();

    ui.horizontal(|ui| {
        if kind.uses_table_limit() {
            ui.label("Number of tables:");
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.table_limit_text)
                    .hint_text("all")
                    .desired_width(60.0),
            );
        }

        if kind.uses_item_limit() {
            ui.label("Number of items:");
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.item_limit_text)
                    .hint_text("all")
                    .desired_width(60.0),
            );
        }

        let scrape = &mut app.state.options.scrape;

        if kind.uses_image_format() {
            let before = scrape.image_format;
            ComboBox::from_label("Image format")
                .selected_text(scrape.image_format.label())
                .show_ui(ui, |ui| {
                    for f in ImageFormat::ALL {
                        ui.selectable_value(&mut scrape.image_format, f, f.label());
                    }
                });
            if scrape.image_format != before {
                logf!("UI: Image format → {:?}", scrape.image_format);
            }
        }

        if kind.uses_video_format() {
            let before = scrape.video_format;
            ComboBox::from_label("Video format")
                .selected_text(scrape.video_format.label())
                .show_ui(ui, |ui| {
                    for f in VideoFormat::ALL {
                        ui.selectable_value(&mut scrape.video_format, f, f.label());
                    }
                });
            if scrape.video_format != before {
                logf!("UI: Video format → {:?}", scrape.video_format);
            }
        }

        ui.separator();
        let available = cfg!(feature = "browser");
        ui.add_enabled(available, Checkbox::new(&mut scrape.use_browser, "Browser fallback"))
            .on_hover_text("Render with headless Chrome when the static page has nothing")
            .on_disabled_hover_text("Built without the browser feature");
    });
}
