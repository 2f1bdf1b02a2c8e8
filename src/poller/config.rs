// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Poll loop configuration.

use std::time::Duration;

use crate::command::Instruction;
use crate::error::ConfigError;

/// What the poll loop does when a measurement fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Stop the loop and return the error.
    #[default]
    Abort,
    /// Log the error and try again on the next interval.
    LogAndContinue,
}

/// Configuration for a [`Poller`](super::Poller).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use bh1750_poll::poller::{FailurePolicy, PollerConfig};
///
/// let config = PollerConfig::new();
/// assert_eq!(config.interval(), Duration::from_millis(500));
/// assert_eq!(config.failure_policy(), FailurePolicy::Abort);
///
/// let config = PollerConfig::new()
///     .with_interval(Duration::from_secs(2))
///     .unwrap()
///     .with_failure_policy(FailurePolicy::LogAndContinue);
/// assert_eq!(config.interval(), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    interval: Duration,
    failure_policy: FailurePolicy,
}

impl PollerConfig {
    /// Default delay between polls.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

    /// Creates a configuration with the default interval and policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Sets the delay between polls.
    ///
    /// Intervals shorter than the sensor's conversion time are accepted but
    /// logged, since readings taken that fast may be stale.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroInterval` if `interval` is zero.
    pub fn with_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if let Some(conversion) = Instruction::OneTimeHighRes.measurement_time()
            && interval < conversion
        {
            tracing::warn!(
                interval = ?interval,
                conversion = ?conversion,
                "Poll interval is shorter than the sensor conversion time"
            );
        }
        self.interval = interval;
        Ok(self)
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Returns the delay between polls.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the failure policy.
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PollerConfig::default();
        assert_eq!(config.interval(), Duration::from_millis(500));
        assert_eq!(config.failure_policy(), FailurePolicy::Abort);
    }

    #[test]
    fn zero_interval_rejected() {
        assert_eq!(
            PollerConfig::new().with_interval(Duration::ZERO),
            Err(ConfigError::ZeroInterval)
        );
    }

    #[test]
    fn short_interval_accepted() {
        let config = PollerConfig::new()
            .with_interval(Duration::from_millis(50))
            .unwrap();
        assert_eq!(config.interval(), Duration::from_millis(50));
    }

    #[test]
    fn failure_policy_setter() {
        let config = PollerConfig::new().with_failure_policy(FailurePolicy::LogAndContinue);
        assert_eq!(config.failure_policy(), FailurePolicy::LogAndContinue);
    }
}
