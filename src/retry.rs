// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Conflict retry policy with exponential backoff.
//!
//! The update path of the set command races concurrent writers: the API
//! server rejects a replace whose resource version is stale (HTTP 409), and
//! the only remedy is to re-read and re-apply. This module provides the
//! bounded retry policy driving that loop.
//!
//! The policy is plain data so tests can drop the delays to zero and script
//! a store that conflicts N times before succeeding.

use std::time::Duration;

use rand::RngExt;

use crate::constants::{
    RETRY_BACKOFF_MULTIPLIER, RETRY_INITIAL_INTERVAL_MILLIS, RETRY_MAX_ATTEMPTS,
    RETRY_MAX_INTERVAL_SECS, RETRY_RANDOMIZATION_FACTOR,
};

/// Bounded retry policy for optimistic-concurrency conflicts.
///
/// # Default Configuration
///
/// - **Max attempts**: 5 update attempts total
/// - **Initial interval**: 10ms
/// - **Max interval**: 2 seconds
/// - **Multiplier**: 2.0 (exponential growth)
/// - **Randomization**: ±10% (prevents thundering herd)
///
/// With these settings, sleeps between attempts occur at approximately
/// 10ms, 20ms, 40ms, and 80ms. Short increasing delays suit a one-shot
/// CLI, where losing the race a handful of times is already unusual.
#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of update attempts before giving up
    pub max_attempts: u32,
    /// Interval slept after the first conflict
    pub initial_interval: Duration,
    /// Upper bound for any single interval
    pub max_interval: Duration,
    /// Exponential growth factor applied per attempt
    pub multiplier: f64,
    /// Randomization factor (e.g., 0.1 for ±10%); 0.0 disables jitter
    pub randomization_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: RETRY_MAX_ATTEMPTS,
            initial_interval: Duration::from_millis(RETRY_INITIAL_INTERVAL_MILLIS),
            max_interval: Duration::from_secs(RETRY_MAX_INTERVAL_SECS),
            multiplier: RETRY_BACKOFF_MULTIPLIER,
            randomization_factor: RETRY_RANDOMIZATION_FACTOR,
        }
    }
}

impl RetryPolicy {
    /// A policy with the given attempt budget and no delays or jitter.
    ///
    /// Used by tests that script conflicts and must not sleep.
    #[must_use]
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_interval: Duration::ZERO,
            max_interval: Duration::ZERO,
            multiplier: 1.0,
            randomization_factor: 0.0,
        }
    }

    /// Start a backoff sequence for one operation.
    #[must_use]
    pub fn backoff(&self) -> Backoff {
        Backoff {
            current_interval: self.initial_interval,
            max_interval: self.max_interval,
            multiplier: self.multiplier,
            randomization_factor: self.randomization_factor,
        }
    }
}

/// Stateful generator of backoff intervals for a single operation.
#[derive(Debug)]
pub struct Backoff {
    current_interval: Duration,
    max_interval: Duration,
    multiplier: f64,
    randomization_factor: f64,
}

impl Backoff {
    /// Get the next interval to sleep, growing the internal interval
    /// exponentially up to the policy's maximum.
    pub fn next_interval(&mut self) -> Duration {
        let interval = self.current_interval;
        let jittered = self.apply_jitter(interval);

        let next = interval.as_secs_f64() * self.multiplier;
        self.current_interval = Duration::from_secs_f64(next).min(self.max_interval);

        jittered
    }

    /// Apply randomization (jitter) to an interval.
    fn apply_jitter(&self, interval: Duration) -> Duration {
        if self.randomization_factor == 0.0 || interval.is_zero() {
            return interval;
        }

        let secs = interval.as_secs_f64();
        let delta = secs * self.randomization_factor;
        let min = secs - delta;
        let max = secs + delta;

        let mut rng = rand::rng();
        let jittered = rng.random_range(min..=max);

        Duration::from_secs_f64(jittered.max(0.0))
    }
}
