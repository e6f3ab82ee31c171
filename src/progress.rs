// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (scrape, gallery download, export). Front ends implement this to surface
/// status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One unit finished (an image downloaded, a file written).
    fn item_done(&mut self, _label: &str) {}

    fn item_failed(&mut self, _label: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Writes progress to the log; used by the CLI and web front ends.
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl LogProgress {
    pub fn new() -> Self {
        Self { total: 0, done: 0 }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, label: &str) {
        self.done += 1;
        logd!("[{}/{}] {label}", self.done, self.total);
    }

    fn item_failed(&mut self, label: &str, err: &str) {
        self.done += 1;
        logw!("[{}/{}] {label} failed: {err}", self.done, self.total);
    }
}
