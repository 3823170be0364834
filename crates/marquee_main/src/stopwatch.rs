use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

/// Tracks time since it was started.
#[derive(Clone, Copy)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { started_at: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl fmt::Display for Stopwatch {
    /// Formats as "01s", "59s", "1:01m", "1:01h"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_elapsed(self.elapsed(), f)
    }
}

fn format_elapsed(elapsed: Duration, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let total_seconds = elapsed.as_secs();
    if total_seconds < 60 {
        write!(f, "{:02}s", total_seconds)
    } else if total_seconds < 3600 {
        write!(f, "{}:{:02}m", total_seconds / 60, total_seconds % 60)
    } else {
        write!(f, "{}:{:02}h", total_seconds / 3600, (total_seconds % 3600) / 60)
    }
}
