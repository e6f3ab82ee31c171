// src/gui/actions/export.rs
use std::thread;

use crate::{
    config::options::PageKind,
    file,
    gui::app::{App, Tone},
};

use super::JobMsg;

pub fn export(app: &mut App) {
    if app.running {
        return;
    }
    let kind = app.current_page_kind();
    app.state.options.export.set_dir(&app.out_dir_text);

    let Some(view) = app.views.get(&kind).cloned() else {
        app.set_status(format!("No {} to export!", kind.noun()), Tone::Error);
        logd!("Export: Clicked, but there's nothing to export");
        return;
    };
    let images = if kind == PageKind::Images { app.gallery.images() } else { Vec::new() };
    let opts = app.state.options.export.clone();

    logf!(
        "Export: Begin page={:?}, items={}, format={:?}, dir={}",
        kind,
        view.len(),
        opts.format,
        opts.out_dir.display()
    );
    app.start("Exporting...");

    let tx = app.tx.clone();
    thread::spawn(move || {
        let result = file::export(&view, &images, &opts);
        if let Ok(paths) = &result {
            if opts.open_after_export {
                let target = match paths.as_slice() {
                    [one] => one.as_path(),
                    _ => opts.out_dir.as_path(),
                };
                if let Err(e) = file::open_path(target) {
                    logw!("Export: could not open {}: {e}", target.display());
                }
            }
        }
        let _ = tx.send(JobMsg::Exported(result));
        let _ = tx.send(JobMsg::Done);
    });
}
