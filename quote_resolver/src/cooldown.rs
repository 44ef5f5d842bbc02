//! Per-provider request spacing.
//!
//! Neither provider documents a rate limit, but both start refusing clients that hammer
//! them. `Cooldown` remembers when each provider (identified by name) was last called
//! and, before the next call, blocks the calling thread until the configured period
//! has elapsed. Operations:
//!
//! - `Cooldown::remaining(provider)` - how long a call to `provider` would have to wait.
//! - `Cooldown::wait(provider)` - sleep for that long, then record the call.
//!
//! Notes:
//! - Time is measured with `std::time::Instant`, which is monotonic.
//! - The map is owned by one resolver and mutated through `&mut self`; there is no
//!   process-wide state, so separate resolvers never delay each other.
//! - A zero period disables waiting entirely.

use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

/// Tracks the last request time per provider.
pub struct Cooldown {
    /// Last request time per provider name.
    last_request: HashMap<String, Instant>,
    /// Minimum spacing between two requests to the same provider.
    period: Duration,
}

impl Cooldown {
    /// Create a cooldown with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            last_request: HashMap::new(),
            period,
        }
    }

    /// Configured period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left before `provider` may be called again. Zero if never called.
    pub fn remaining(&self, provider: &str) -> Duration {
        self.last_request
            .get(provider)
            .map(|last| self.period.saturating_sub(last.elapsed()))
            .unwrap_or(Duration::ZERO)
    }

    /// Block until `provider` may be called, then mark it as called now.
    ///
    /// Returns how long the thread slept.
    pub fn wait(&mut self, provider: &str) -> Duration {
        if self.period.is_zero() {
            return Duration::ZERO;
        }
        let remaining = self.remaining(provider);
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last_request.insert(provider.to_string(), Instant::now());
        remaining
    }
}
