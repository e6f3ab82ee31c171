// src/gui/components/viewer.rs
//
// Full-size view of one gallery image with Download / Close.

use eframe::egui::{self, TextureOptions, Vec2};

use crate::config::consts::{VIEWER_H, VIEWER_W};
use crate::file;
use crate::gui::{
    app::{App, Tone},
    gallery::decode_for_viewer,
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(viewer) = app.viewer.as_mut() else { return };
    let Some(item) = app.gallery.items.get(viewer.index) else {
        app.viewer = None;
        return;
    };

    if viewer.texture.is_none() {
        viewer.texture = decode_for_viewer(&item.image.bytes)
            .map(|img| ctx.load_texture(format!("viewer-{}", item.image.url), img, TextureOptions::LINEAR));
    }

    let index = viewer.index;
    let mut open = true;
    let mut close = false;
    let mut download = false;

    egui::Window::new(format!("Image {}", index + 1))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            match &viewer.texture {
                Some(tex) => {
                    ui.add(egui::Image::new(tex).max_size(Vec2::new(VIEWER_W as f32, VIEWER_H as f32)));
                }
                None => {
                    ui.label("Could not display this image.");
                }
            }
            ui.small(item.image.url.as_str());
            ui.horizontal(|ui| {
                download = ui.button("Download").clicked();
                close = ui.button("Close").clicked();
            });
        });

    if download {
        let dir = app.state.options.export.out_dir.clone();
        let saved = app
            .gallery
            .items
            .get(index)
            .map(|it| file::save_image(&dir, index + 1, &it.image.url, &it.image.bytes));
        match saved {
            Some(Ok(path)) => {
                logf!("Viewer: saved {}", path.display());
                app.set_status(format!("Image saved to {}", path.display()), Tone::Success);
            }
            Some(Err(e)) => {
                loge!("Viewer: save failed: {e}");
                app.set_status(format!("Failed to save image: {e}"), Tone::Error);
            }
            None => {}
        }
    }

    if close || !open {
        app.viewer = None;
    }
}
