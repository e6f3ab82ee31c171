// src/gui/components/target_bar.rs
use eframe::egui::{self, Color32, Key, RichText, widgets::Spinner};

use crate::gui::{
    actions,
    app::{App, Tone},
};

const HINT: &str = "e.g., https://example.com or movie/book name";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.heading(RichText::new("Web Scraper").strong());

    ui.horizontal(|ui| {
        ui.label("URL / search:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.target_text)
                .hint_text(HINT)
                .desired_width(520.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        let red = Color32::from_rgb(220, 30, 30);
        let button = ui.add_enabled(
            !app.running,
            egui::Button::new(RichText::new("Scrape Now").color(Color32::BLACK).strong()).fill(red),
        );
        if button.clicked() || (submitted && !app.running) {
            actions::scrape(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
            ui.label("Processing...");
        }
    });

    let color = match app.tone {
        Tone::Info => ui.visuals().text_color(),
        Tone::Success => Color32::from_rgb(40, 160, 70),
        Tone::Error => Color32::from_rgb(220, 50, 50),
    };
    ui.colored_label(color, app.status_text());
}
