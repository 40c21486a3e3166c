// src/presentation/progress.rs
use std::path::Path;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use modern_cli_ports::progress::ProgressSink;

use super::display_name;

const TEMPLATE: &str = "{spinner:.green} {msg:<24} [{bar:30.cyan/blue}] {pos}/{len}";

/// Progress bar on stderr. indicatif hides it when stderr is not a terminal.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn stderr() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressSink for BarProgress {
    fn on_start(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_message("Processing files...");
    }

    fn on_file(&self, path: &Path, succeeded: bool) {
        let mark = if succeeded { "✓" } else { "✗" };
        self.bar.set_message(format!("{mark} {}", display_name(path)));
        self.bar.inc(1);
    }

    fn on_complete(&self) {
        self.bar.finish();
    }
}
