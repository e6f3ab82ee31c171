// src/gui/actions/update.rs
use std::{sync::Arc, thread};

use crate::{
    config::options::PageKind,
    core::net::{Fetch, HttpClient},
    data::Scraped,
    gui::app::{App, Tone},
    gui::gallery::decode_all,
    gui::progress::GuiProgress,
    scrape::download_images,
};

use super::JobMsg;

/// Re-apply the filter boxes to the current result. Images are
/// re-downloaded since the gallery holds only what was shown.
pub fn update_display(app: &mut App) {
    let kind = app.current_page_kind();
    app.apply_limits();
    app.rebuild_view(kind);

    let Some(view) = app.views.get(&kind) else {
        app.set_status(kind.empty_message(), Tone::Error);
        return;
    };
    if kind != PageKind::Images {
        let summary = view.summary();
        app.set_status(summary, Tone::Success);
        return;
    }

    let urls = match view {
        Scraped::Images(urls) => urls.clone(),
        _ => Vec::new(),
    };
    if urls.is_empty() {
        app.gallery.clear();
        app.viewer = None;
        app.set_status(kind.empty_message(), Tone::Error);
        return;
    }
    if app.running {
        return;
    }

    logf!("Update: reloading {} image(s)", urls.len());
    app.viewer = None;
    app.start("Loading images...");

    let tx = app.tx.clone();
    let status = app.status.clone();
    thread::spawn(move || {
        match HttpClient::new() {
            Ok(client) => {
                let net: Arc<dyn Fetch> = Arc::new(client);
                let mut prog = GuiProgress::new(status);
                let images = download_images(net, &urls, Some(&mut prog));
                let _ = tx.send(JobMsg::Gallery(decode_all(images)));
            }
            Err(e) => loge!("Update: could not build HTTP client: {e}"),
        }
        let _ = tx.send(JobMsg::Done);
    });
}
