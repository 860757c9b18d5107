//! Progress display for the cost table computation

use crate::io::configuration::{MIN_SHREDS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows one bar per image while its cost table is computed
///
/// Small images finish instantly, so no bar is drawn below
/// `MIN_SHREDS_FOR_PROGRESS` shreds.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    enabled: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager that draws bars
    pub const fn new() -> Self {
        Self {
            bar: None,
            enabled: true,
        }
    }

    /// Create a manager that never draws anything
    pub const fn hidden() -> Self {
        Self {
            bar: None,
            enabled: false,
        }
    }

    /// Prepare a bar for the cost table of `path`
    pub fn start_image(&mut self, path: &Path, shred_count: usize) {
        if !self.enabled || shred_count < MIN_SHREDS_FOR_PROGRESS {
            self.bar = None;
            return;
        }

        let bar = ProgressBar::new(shred_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        self.bar = Some(bar);
    }

    /// Record one finished cost table row
    ///
    /// Safe to call from worker threads.
    pub fn row_done(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Mark the current image as completed
    pub fn complete_image(&mut self, elapsed: Duration) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(format!("✓ {elapsed:.2?}"));
        }
    }

    /// Remove the current bar without marking it complete
    pub fn abandon(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }

    /// Whether a bar is currently shown
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }
}
