// src/gui/gallery.rs
//
// Downloaded images for the Images page: bytes for export/download,
// thumbnails decoded off the UI thread, textures created on it.

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use image::imageops::FilterType;

use crate::config::consts::{THUMB_EDGE, VIEWER_H, VIEWER_W};
use crate::data::DownloadedImage;

/// One decoded image as it leaves the worker thread.
pub struct Decoded {
    pub image: DownloadedImage,
    pub thumb: ColorImage,
}

pub struct GalleryItem {
    pub image: DownloadedImage,
    pub texture: TextureHandle,
}

#[derive(Default)]
pub struct Gallery {
    pub items: Vec<GalleryItem>,
}

fn to_color_image(img: image::DynamicImage) -> ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

/// Thumbnail no larger than `THUMB_EDGE` on either side. `None` if the
/// bytes are not an image we can decode.
pub fn decode_thumbnail(bytes: &[u8]) -> Option<ColorImage> {
    let img = image::load_from_memory(bytes).ok()?;
    let fitted = if img.width() > THUMB_EDGE || img.height() > THUMB_EDGE {
        img.thumbnail(THUMB_EDGE, THUMB_EDGE)
    } else {
        img
    };
    Some(to_color_image(fitted))
}

/// Decode for the viewer window, fitted into `VIEWER_W` × `VIEWER_H`.
pub fn decode_for_viewer(bytes: &[u8]) -> Option<ColorImage> {
    let img = image::load_from_memory(bytes).ok()?;
    let fitted = if img.width() > VIEWER_W || img.height() > VIEWER_H {
        img.resize(VIEWER_W, VIEWER_H, FilterType::Lanczos3)
    } else {
        img
    };
    Some(to_color_image(fitted))
}

/// Drop images that won't decode; keep the rest in order.
pub fn decode_all(images: Vec<DownloadedImage>) -> Vec<Decoded> {
    images
        .into_iter()
        .filter_map(|image| match decode_thumbnail(&image.bytes) {
            Some(thumb) => Some(Decoded { image, thumb }),
            None => {
                logw!("Gallery: could not decode {}", image.url);
                None
            }
        })
        .collect()
}

impl Gallery {
    pub fn replace(&mut self, ctx: &egui::Context, decoded: Vec<Decoded>) {
        self.items = decoded
            .into_iter()
            .enumerate()
            .map(|(i, d)| GalleryItem {
                texture: ctx.load_texture(format!("thumb-{i}-{}", d.image.url), d.thumb, TextureOptions::LINEAR),
                image: d.image,
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn images(&self) -> Vec<DownloadedImage> {
        self.items.iter().map(|i| i.image.clone()).collect()
    }
}
