// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Mirrors worker progress into the shared status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        let mut guard = self.status.lock().unwrap_or_else(|e| e.into_inner());
        *guard = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }

    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }

    fn item_done(&mut self, _label: &str) {
        self.done += 1;
        self.set_status(format!("Downloading images ({}/{})", self.done + self.failed, self.total));
    }

    fn item_failed(&mut self, _label: &str, _err: &str) {
        self.failed += 1;
        self.set_status(format!("Downloading images ({}/{})", self.done + self.failed, self.total));
    }

    fn finish(&mut self) {
        if self.total == 0 {
            return;
        }
        if self.failed == 0 {
            self.set_status(format!("Downloaded {} image(s)", self.done));
        } else {
            self.set_status(format!("Downloaded {} image(s), {} failed", self.done, self.failed));
        }
    }
}
