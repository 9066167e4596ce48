//! Request timing between retries
//!
//! Server-provided retry delays take priority over the local default delay.

use std::time::{Duration, Instant};

/// Configuration for request timing behavior
#[derive(Debug, Clone)]
pub struct RequestTimerConfig {
    /// Default retry delay when server doesn't provide one
    pub default_retry_delay: Duration,
    /// Upper bound applied to server-provided delays
    pub max_retry_delay: Duration,
}

impl RequestTimerConfig {
    pub fn new(default_retry_delay: Duration, max_retry_delay: Duration) -> Self {
        Self {
            default_retry_delay,
            max_retry_delay,
        }
    }
}

/// Tracks when the next request may be sent.
#[derive(Debug)]
pub struct RequestTimer {
    config: RequestTimerConfig,
    retry_until: Option<Instant>,
}

impl RequestTimer {
    pub fn new(config: RequestTimerConfig) -> Self {
        Self {
            config,
            retry_until: None,
        }
    }

    /// Record a successful request; clears any pending retry delay.
    pub fn record_success(&mut self) {
        self.retry_until = None;
    }

    /// Record a failed request with optional server-provided retry delay
    pub fn record_failure(&mut self, server_retry_delay: Option<Duration>) {
        let delay = server_retry_delay
            .map(|delay| delay.min(self.config.max_retry_delay))
            .unwrap_or(self.config.default_retry_delay);
        self.retry_until = Some(Instant::now() + delay);
    }

    /// Get time until next request is allowed
    pub fn time_until_next(&mut self) -> Duration {
        let now = Instant::now();
        match self.retry_until {
            Some(retry_until) if now < retry_until => retry_until.duration_since(now),
            _ => {
                // Clear expired retry delay
                self.retry_until = None;
                Duration::ZERO
            }
        }
    }
}
