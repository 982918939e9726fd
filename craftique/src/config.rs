use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CHECK_DELAY_MS: u64 = 300;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_COUNTDOWN_SECS: u32 = 10;

/// Latencies of the mock directory and length of the reset countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Timings {
    /// Delay before a handle or address check answers.
    pub check_delay_ms: u64,
    /// Delay before a registration is acknowledged.
    pub submit_delay_ms: u64,
    /// Seconds shown on the reset confirmation before going back to login.
    pub countdown_secs: u32,
}

impl Timings {
    pub fn check_delay(&self) -> Duration {
        Duration::from_millis(self.check_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            check_delay_ms: DEFAULT_CHECK_DELAY_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() {
        let timings: Timings = toml::from_str("check_delay_ms = 50").unwrap();
        assert_eq!(timings.check_delay(), Duration::from_millis(50));
        assert_eq!(timings.submit_delay(), Duration::from_millis(1500));
        assert_eq!(timings.countdown_secs, 10);
    }
}
