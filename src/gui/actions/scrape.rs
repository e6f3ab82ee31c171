// src/gui/actions/scrape.rs
use std::thread;

use crate::{
    config::options::PageKind,
    core::url::normalize_target,
    data::{filter_images, Scraped},
    gui::app::{App, Tone},
    gui::gallery::decode_all,
    gui::progress::GuiProgress,
    scrape::{download_images, Scraper},
};

use super::JobMsg;

pub fn scrape(app: &mut App) {
    if app.running {
        return;
    }
    let kind = app.current_page_kind();
    app.apply_limits();

    // Limits apply to the view, so the cache keeps the full result.
    let mut opts = app.state.options.scrape.clone();
    opts.page = kind;
    opts.target = app.target_text.clone();
    opts.item_limit = None;
    opts.table_limit = None;

    if let Err(e) = normalize_target(kind, &opts.target) {
        logd!("Scrape: rejected input for {:?}: {e}", kind);
        app.set_status(e.to_string(), Tone::Error);
        return;
    }

    let image_format = opts.image_format;
    let item_limit = app.state.options.scrape.item_limit;

    logf!("Scrape: Begin page={:?} target={}", kind, opts.target);
    app.start(format!("Scraping {}...", kind.noun()));

    let tx = app.tx.clone();
    let status = app.status.clone();

    // → This is where the scrape happens ←
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let outcome = Scraper::new(&opts).and_then(|s| {
            let scraped = s.run(&opts, Some(&mut prog))?;
            Ok((s, scraped))
        });

        match outcome {
            Ok((scraper, scraped)) => {
                let gallery_urls = match &scraped {
                    Scraped::Images(all) => filter_images(all, image_format, item_limit),
                    _ => Vec::new(),
                };
                let _ = tx.send(JobMsg::Scraped { kind, result: Ok(scraped) });

                if kind == PageKind::Images && !gallery_urls.is_empty() {
                    let images = download_images(scraper.net(), &gallery_urls, Some(&mut prog));
                    let _ = tx.send(JobMsg::Gallery(decode_all(images)));
                }
            }
            Err(e) => {
                let _ = tx.send(JobMsg::Scraped { kind, result: Err(e) });
            }
        }
        let _ = tx.send(JobMsg::Done);
    });
}
