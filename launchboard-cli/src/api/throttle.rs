//! Fixed pause between record submissions
//!
//! Monday.com rate-limits by query complexity. A short sleep after each
//! record keeps bulk pushes under the limit; it has no effect on ordering.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// No pause at all (dry runs and tests)
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_enabled(&self) -> bool {
        !self.delay.is_zero()
    }

    /// Sleep for the configured delay
    pub async fn pause(&self) {
        if self.is_enabled() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::from_millis(500)
    }
}
