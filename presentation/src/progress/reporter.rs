//! Progress reporting for tag renames

use colored::Colorize;
use docbase_application::RenameProgressNotifier;
use docbase_domain::{PostId, RenamePair};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports rename progress with one progress bar per pair, drawn on stderr
pub struct RenameReporter {
    bar: Mutex<Option<ProgressBar>>,
    color: bool,
}

impl RenameReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn pair_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for RenameReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameProgressNotifier for RenameReporter {
    fn on_pair_start(&self, pair: &RenamePair, matched: usize) {
        let pb = ProgressBar::new(matched as u64);
        pb.set_style(Self::pair_style());
        pb.set_prefix(pair.to_string());
        pb.set_message("Updating...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_post_renamed(&self, _pair: &RenamePair, post_id: PostId) {
        if let Some(pb) = self.bar.lock().ok().and_then(|bar| bar.clone()) {
            pb.set_message(format!("post {}", post_id));
            pb.inc(1);
        }
    }

    fn on_pair_complete(&self, pair: &RenamePair, updated: usize) {
        if let Some(pb) = self.bar.lock().ok().and_then(|mut bar| bar.take()) {
            pb.finish_and_clear();
        }
        let mark = if self.color {
            "v".green().to_string()
        } else {
            "v".to_string()
        };
        eprintln!("{} {} ({} posts)", mark, pair, updated);
    }
}
