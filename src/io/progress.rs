//! Per-strategy progress bars for batch generation

use crate::algorithm::strategy::Strategy;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>12}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per strategy being generated
///
/// Bars can be advanced from worker threads.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    bars: Vec<(Strategy, ProgressBar)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            bars: Vec::new(),
        }
    }

    /// Create one bar of length `count` for each strategy
    pub fn initialize(&mut self, strategies: &[Strategy], count: u64) {
        for &strategy in strategies {
            let bar = ProgressBar::new(count);
            bar.set_style(PROGRESS_STYLE.clone());
            bar.set_prefix(strategy.label());
            self.bars.push((strategy, self.multi_progress.add(bar)));
        }
    }

    /// Current position of a strategy's bar
    pub fn position(&self, strategy: Strategy) -> Option<u64> {
        self.bar(strategy).map(ProgressBar::position)
    }

    /// Record one finished map
    pub fn advance(&self, strategy: Strategy) {
        if let Some(bar) = self.bar(strategy) {
            bar.inc(1);
        }
    }

    /// Mark a strategy as done, filling its bar
    pub fn complete(&self, strategy: Strategy) {
        if let Some(bar) = self.bar(strategy) {
            bar.finish_with_message("✓");
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }

    fn bar(&self, strategy: Strategy) -> Option<&ProgressBar> {
        self.bars
            .iter()
            .find(|(candidate, _)| *candidate == strategy)
            .map(|(_, bar)| bar)
    }
}
