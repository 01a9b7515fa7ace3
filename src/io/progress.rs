//! Progress display for batch scoring and Monte-Carlo simulation

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for batch scoring runs
///
/// Shows a batch bar when scoring several files at once, and hands out a
/// per-run trial bar while a Monte-Carlo simulation is in flight. Scoring a
/// single file without simulation displays nothing.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SIMULATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
        }
    }

    /// Initialize batch progress based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // A handful of instant reports doesn't warrant a batch bar
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Create a trial progress bar for a simulation run
    pub fn simulation_bar(&self, label: &str, trials: u64) -> ProgressBar {
        let bar = ProgressBar::new(trials);
        bar.set_style(SIMULATION_STYLE.clone());
        bar.set_message(label.to_string());
        self.multi_progress.add(bar)
    }

    /// Mark one file as completed
    pub fn complete_file(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files scored");
        }
        let _ = self.multi_progress.clear();
    }
}
