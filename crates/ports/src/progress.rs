// crates/ports/src/progress.rs
use std::path::Path;

pub trait ProgressSink {
    fn on_start(&self, total: usize);
    fn on_file(&self, path: &Path, succeeded: bool);
    fn on_complete(&self);
}

/// Sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_start(&self, _total: usize) {}
    fn on_file(&self, _path: &Path, _succeeded: bool) {}
    fn on_complete(&self) {}
}
