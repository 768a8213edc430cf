//! Rate Limiting Infrastructure
//!
//! Sliding-window limiter guarding outbound calls. The ledger keeps the
//! timestamp of every admitted call; entries older than the window are
//! pruned lazily on each check. Exceeding the limit fails fast, nothing
//! here ever sleeps waiting for a slot.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 50,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }
}

/// Rate limit check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    /// Slots left in the current window after this check
    pub remaining: u32,
    /// When denied: time until the oldest retained entry leaves the window
    pub retry_after: Option<Duration>,
}

/// In-process sliding-window limiter
///
/// Invariant: the number of retained timestamps newer than `now - window`
/// never exceeds `max_requests`. Prune, check and append run under one
/// lock so concurrent callers cannot overshoot.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    config: RateLimitConfig,
    ledger: Mutex<VecDeque<Instant>>,
}

impl SlidingWindowLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let capacity = config.max_requests as usize;
        Self {
            config,
            ledger: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Would a call be admitted right now? Does not record anything.
    pub fn check(&self) -> RateLimitResult {
        self.check_at(Instant::now())
    }

    /// Admit and record a call if the window has room.
    pub fn try_acquire(&self) -> RateLimitResult {
        self.try_acquire_at(Instant::now())
    }

    pub fn check_at(&self, now: Instant) -> RateLimitResult {
        let mut ledger = self.lock();
        self.prune(&mut ledger, now);
        self.evaluate(&ledger, now)
    }

    pub fn try_acquire_at(&self, now: Instant) -> RateLimitResult {
        let mut ledger = self.lock();
        self.prune(&mut ledger, now);
        let result = self.evaluate(&ledger, now);
        if result.allowed {
            ledger.push_back(now);
            return RateLimitResult {
                remaining: result.remaining.saturating_sub(1),
                ..result
            };
        }
        result
    }

    /// Number of timestamps currently retained (including stale ones not yet pruned)
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Instant>> {
        // A poisoned ledger is still a valid list of instants
        self.ledger.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn prune(&self, ledger: &mut VecDeque<Instant>, now: Instant) {
        while let Some(&oldest) = ledger.front() {
            if now.saturating_duration_since(oldest) > self.config.window {
                ledger.pop_front();
            } else {
                break;
            }
        }
    }

    fn evaluate(&self, ledger: &VecDeque<Instant>, now: Instant) -> RateLimitResult {
        let used = ledger.len() as u32;
        if used >= self.config.max_requests {
            let retry_after = ledger.front().map(|&oldest| {
                let age = now.saturating_duration_since(oldest);
                self.config.window.saturating_sub(age)
            });
            return RateLimitResult {
                allowed: false,
                remaining: 0,
                retry_after,
            };
        }
        RateLimitResult {
            allowed: true,
            remaining: self.config.max_requests - used,
            retry_after: None,
        }
    }
}
