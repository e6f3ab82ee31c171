// src/scrape/images.rs
use std::{
    sync::{mpsc, Arc, atomic::{AtomicUsize, Ordering}},
    thread,
    time::Duration,
};

use crate::{
    config::consts::{IMAGE_TIMEOUT_SECS, WORKERS},
    core::net::Fetch,
    data::DownloadedImage,
    progress::Progress,
};

/// Download `urls` on a small worker pool. Failures are dropped; the rest
/// come back in input order.
pub fn download_images(
    net: Arc<dyn Fetch>,
    urls: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Vec<DownloadedImage> {
    if urls.is_empty() {
        return Vec::new();
    }
    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    type Fetched = (usize, Result<Vec<u8>, String>);

    let urls_arc = Arc::new(urls.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Fetched>();
    let timeout = Duration::from_secs(IMAGE_TIMEOUT_SECS);

    let workers = WORKERS.min(urls.len()).max(1);
    for _ in 0..workers {
        let urls = Arc::clone(&urls_arc);
        let idx = Arc::clone(&counter);
        let net = Arc::clone(&net);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= urls.len() {
                    break;
                }
                let result = net.get_bytes(&urls[i], timeout).map_err(|e| e.to_string());
                if tx.send((i, result)).is_err() {
                    break;
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut slots: Vec<Option<Vec<u8>>> = vec![None; urls.len()];
    for (i, result) in res_rx.iter() {
        match result {
            Ok(bytes) => {
                slots[i] = Some(bytes);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&urls[i]);
                }
            }
            Err(msg) => {
                logw!("Image {}: {msg}", urls[i]);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&urls[i], &msg);
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    urls.iter()
        .zip(slots)
        .filter_map(|(url, bytes)| bytes.map(|bytes| DownloadedImage { url: url.clone(), bytes }))
        .collect()
}
