use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep};

/// Single reusable deadline that triggers restoring the progress line.
///
/// Re-arming resets the one underlying `Sleep` in place, so a deadline that
/// elapsed but was never observed is replaced rather than delivered late.
/// Must be created inside a tokio runtime with the time driver enabled.
pub(crate) struct DebounceTimer {
    sleep: Pin<Box<Sleep>>,
    delay: Duration,
    armed: bool,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self { sleep: Box::pin(tokio::time::sleep(delay)), delay, armed: false }
    }

    /// Replaces any pending deadline with `now + delay`.
    pub fn arm(&mut self) {
        self.sleep.as_mut().reset(Instant::now() + self.delay);
        self.armed = true;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Resolves once the armed deadline passes, leaving the timer idle.
    ///
    /// Only poll while [`is_armed`](Self::is_armed); an idle timer's stale
    /// deadline would otherwise resolve immediately.
    pub async fn fired(&mut self) {
        self.sleep.as_mut().await;
        self.armed = false;
    }
}
