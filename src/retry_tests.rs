// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `retry.rs`

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::retry::RetryPolicy;

    /// Test that the default policy has the expected values
    #[test]
    fn test_default_policy_configuration() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.max_attempts, 5, "default budget should be 5 attempts");
        assert_eq!(
            policy.initial_interval,
            Duration::from_millis(10),
            "initial interval should be 10ms"
        );
        assert_eq!(
            policy.max_interval,
            Duration::from_secs(2),
            "max interval should be 2 seconds"
        );

        #[allow(clippy::float_cmp)]
        {
            assert_eq!(
                policy.multiplier, 2.0,
                "multiplier should be 2.0 for exponential growth"
            );
            assert_eq!(
                policy.randomization_factor, 0.1,
                "randomization factor should be 0.1 (±10%)"
            );
        }
    }

    /// Intervals grow exponentially when jitter is disabled
    #[test]
    fn test_backoff_progression_without_jitter() {
        let policy = RetryPolicy {
            max_attempts: 5,
            initial_interval: Duration::from_millis(100),
            max_interval: Duration::from_secs(30),
            multiplier: 2.0,
            randomization_factor: 0.0,
        };
        let mut backoff = policy.backoff();

        assert_eq!(backoff.next_interval(), Duration::from_millis(100));
        assert_eq!(backoff.next_interval(), Duration::from_millis(200));
        assert_eq!(backoff.next_interval(), Duration::from_millis(400));
        assert_eq!(backoff.next_interval(), Duration::from_millis(800));
    }

    /// Intervals cap at the policy's max interval
    #[test]
    fn test_backoff_caps_at_max_interval() {
        let policy = RetryPolicy {
            max_attempts: 10,
            initial_interval: Duration::from_millis(100),
            max_interval: Duration::from_millis(250),
            multiplier: 2.0,
            randomization_factor: 0.0,
        };
        let mut backoff = policy.backoff();

        assert_eq!(backoff.next_interval(), Duration::from_millis(100));
        assert_eq!(backoff.next_interval(), Duration::from_millis(200));
        assert_eq!(
            backoff.next_interval(),
            Duration::from_millis(250),
            "third interval should be capped"
        );
        assert_eq!(
            backoff.next_interval(),
            Duration::from_millis(250),
            "capped interval should not grow further"
        );
    }

    /// Jittered intervals stay within the randomization bounds
    #[test]
    fn test_backoff_jitter_within_bounds() {
        let policy = RetryPolicy {
            max_attempts: 5,
            initial_interval: Duration::from_millis(100),
            max_interval: Duration::from_secs(30),
            multiplier: 2.0,
            randomization_factor: 0.1,
        };

        for _ in 0..50 {
            let mut backoff = policy.backoff();
            let interval = backoff.next_interval();
            assert!(
                interval >= Duration::from_millis(90) && interval <= Duration::from_millis(110),
                "first interval should be 100ms ±10%, got {interval:?}"
            );
        }
    }

    /// The immediate policy never sleeps
    #[test]
    fn test_immediate_policy_has_zero_intervals() {
        let policy = RetryPolicy::immediate(3);
        assert_eq!(policy.max_attempts, 3);

        let mut backoff = policy.backoff();
        assert_eq!(backoff.next_interval(), Duration::ZERO);
        assert_eq!(backoff.next_interval(), Duration::ZERO);
        assert_eq!(backoff.next_interval(), Duration::ZERO);
    }
}
