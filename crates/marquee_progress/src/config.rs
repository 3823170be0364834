use std::time::Duration;

use derive_setters::Setters;

/// Quiet period after the last ordinary write before the progress line is
/// drawn again.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Settings for a [`ProgressLine`](crate::ProgressLine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
pub struct ProgressConfig {
    /// Debounce delay before restoring the progress line.
    pub delay: Duration,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { delay: DEFAULT_DELAY }
    }
}
