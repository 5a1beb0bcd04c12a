//! Terminal progress for the packing race

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static RACE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Sink for packing-race progress events.
///
/// Worker threads report through a shared reference, so implementations
/// must tolerate concurrent calls.
pub trait ProgressSink: Sync {
    /// A race over `total` candidate subsets is starting.
    fn begin(&self, total: usize);
    /// One candidate subset finished packing, successfully or not.
    fn step(&self);
    /// The race ended; `message` summarizes the outcome.
    fn finish(&self, message: &str);
}

/// Discards every event. Used in tests and under `--quiet`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn begin(&self, _total: usize) {}

    fn step(&self) {}

    fn finish(&self, _message: &str) {}
}

/// Single indicatif bar spanning the whole candidate list.
#[derive(Debug)]
pub struct RaceBar {
    bar: ProgressBar,
}

impl Default for RaceBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RaceBar {
    /// Create the bar; it stays at zero length until the race begins.
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(RACE_STYLE.clone());
        Self { bar }
    }
}

impl ProgressSink for RaceBar {
    fn begin(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_message("packing");
    }

    fn step(&self) {
        self.bar.inc(1);
    }

    fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_owned());
    }
}
