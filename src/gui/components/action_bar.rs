// src/gui/components/action_bar.rs
use eframe::egui::{self, Align, ComboBox, Layout};

use crate::config::options::ExportFormat;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Update Display")).clicked() {
            actions::update_display(app);
        }
        ui.separator();

        {
            let export = &mut app.state.options.export;
            let before = export.format;
            ComboBox::from_id_salt("export_format")
                .selected_text(export.format.label())
                .show_ui(ui, |ui| {
                    for f in ExportFormat::ALL {
                        ui.selectable_value(&mut export.format, f, f.label());
                    }
                });
            if export.format != before {
                logf!("UI: Export format → {:?}", export.format);
            }
        }

        ui.label("Output:");
        let out = ui.add(
            egui::TextEdit::singleline(&mut app.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(180.0),
        );
        if out.changed() {
            app.state.options.export.set_dir(&app.out_dir_text);
            logd!("UI: Output dir → {}", app.state.options.export.out_dir.display());
        }

        let export = &mut app.state.options.export;
        ui.checkbox(&mut export.include_headers, "Include headers");
        ui.checkbox(&mut export.open_after_export, "Open after export");

        if ui.add_enabled(!app.running, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = if app.state.gui.dark_mode { "Light Mode" } else { "Dark Mode" };
            if ui.button(label).clicked() {
                app.state.gui.dark_mode = !app.state.gui.dark_mode;
                logd!("UI: Dark mode → {}", app.state.gui.dark_mode);
            }
        });
    });
}
