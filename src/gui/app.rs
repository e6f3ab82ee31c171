// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{mpsc::{self, Receiver, Sender}, Arc, Mutex},
    time::Duration,
};

use eframe::egui::{self, TextureHandle, Visuals};

use crate::{
    config::{
        options::{parse_limit, PageKind},
        settings::Settings,
        state::AppState,
    },
    data::{filter_images, Scraped},
    store,
};

use super::{
    actions::{self, JobMsg},
    components,
    gallery::Gallery,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Web Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// Colour of the status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Error,
}

/// Image viewer window; texture decoded on first draw.
pub struct Viewer {
    pub index: usize,
    pub texture: Option<TextureHandle>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // text fields mapped onto options on use
    pub target_text: String,
    pub out_dir_text: String,

    // last scrape per kind (as cached) and what is on screen
    pub results: HashMap<PageKind, Scraped>,
    pub views: HashMap<PageKind, Scraped>,

    pub gallery: Gallery,
    pub viewer: Option<Viewer>,

    // status/progress (workers write the text)
    pub status: Arc<Mutex<String>>,
    pub tone: Tone,
    pub running: bool,

    pub(crate) tx: Sender<JobMsg>,
    pub(crate) rx: Receiver<JobMsg>,

    saved: Settings,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut status = s!("Ready");

        let mut results = HashMap::new();
        for scraped in store::load_all() {
            logf!("Cache: Loaded {} ({} item(s))", scraped.kind().slug(), scraped.len());
            results.insert(scraped.kind(), scraped);
            status = s!("Loaded local data");
        }

        let out_dir_text = state.options.export.out_dir.to_string_lossy().into_owned();
        let saved = Settings::from_state(&state);

        let mut app = Self {
            state,
            target_text: s!(),
            out_dir_text,
            results,
            views: HashMap::new(),
            gallery: Gallery::default(),
            viewer: None,
            status: Arc::new(Mutex::new(status)),
            tone: Tone::Info,
            running: false,
            tx,
            rx,
            saved,
        };
        for kind in PageKind::ALL {
            app.rebuild_view(kind);
        }
        logf!("Init: {} cached result(s), page={:?}", app.results.len(), app.current_page_kind());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    pub fn status<T: Into<String>>(&self, msg: T) {
        let mut guard = self.status.lock().unwrap_or_else(|e| e.into_inner());
        *guard = msg.into();
    }

    pub fn set_status<T: Into<String>>(&mut self, msg: T, tone: Tone) {
        self.status(msg);
        self.tone = tone;
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Mark a background job as started.
    pub fn start(&mut self, msg: impl Into<String>) {
        self.running = true;
        self.set_status(msg, Tone::Info);
    }

    /// Limit boxes → options. Called on Scrape Now / Update Display.
    pub fn apply_limits(&mut self) {
        let scrape = &mut self.state.options.scrape;
        scrape.item_limit = parse_limit(&self.state.gui.item_limit_text);
        scrape.table_limit = parse_limit(&self.state.gui.table_limit_text);
    }

    /// Recompute the on-screen view of `kind` from its raw result.
    pub fn rebuild_view(&mut self, kind: PageKind) {
        let Some(raw) = self.results.get(&kind) else {
            self.views.remove(&kind);
            return;
        };
        let opts = &self.state.options.scrape;
        let view = match raw {
            Scraped::Images(all) => Scraped::Images(filter_images(all, opts.image_format, opts.item_limit)),
            other => {
                let mut v = other.clone();
                let limit = if kind.uses_table_limit() {
                    opts.table_limit
                } else if kind.uses_item_limit() {
                    opts.item_limit
                } else {
                    None
                };
                if let Some(n) = limit {
                    v.truncate(n);
                }
                v
            }
        };
        self.views.insert(kind, view);
    }

    /// Persist settings whenever they differ from the last save.
    fn sync_settings(&mut self) {
        let now = Settings::from_state(&self.state);
        if now != self.saved {
            if let Err(e) = now.save() {
                logw!("Settings: save failed: {e}");
            }
            self.saved = now;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.state.gui.dark_mode { Visuals::dark() } else { Visuals::light() });

        actions::poll(self, ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            components::target_bar::draw(ui, self);
            ui.separator();
            components::tabs::draw(ui, self);
            components::filter_bar::draw(ui, self);
            ui.separator();
            components::action_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::results::draw(ui, self);
        });

        components::viewer::draw(ctx, self);

        self.sync_settings();

        // Workers update the status text without a repaint of their own.
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
