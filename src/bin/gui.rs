// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use web_scrape::config::{settings::Settings, state::AppState};
use web_scrape::{gui, log};

fn main() {
    log::init_file();

    let mut state = AppState::default();
    Settings::load().apply_to(&mut state);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Web Scraper")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
