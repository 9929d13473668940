// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Truncated [exponential backoff].
//!
//! The delay after the n-th failed attempt is `initial * scaling^(n-1)`,
//! capped at the maximum delay. Retry loops may add full jitter, polling loops
//! never do.
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use crate::retry_state::RetryState;
use std::time::Duration;

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling value ({0}) should be >= 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) should be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error(
        "the maximum delay ({maximum:?}) should be greater than or equal to the initial delay ({initial:?})"
    )]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

/// Builds [ExponentialBackoff] policies.
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
    jitter: bool,
}

impl ExponentialBackoffBuilder {
    /// Creates a builder with the default parameters.
    ///
    /// The defaults are one second initial delay, one minute maximum delay,
    /// a scaling factor of 2.0 and no jitter.
    ///
    /// # Example
    /// ```
    /// # use container_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
    /// use std::time::Duration;
    ///
    /// let policy = ExponentialBackoffBuilder::new()
    ///         .with_initial_delay(Duration::from_millis(100))
    ///         .with_maximum_delay(Duration::from_secs(5))
    ///         .with_scaling(4.0)
    ///         .build()?;
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(60),
            scaling: 2.0,
            jitter: false,
        }
    }

    /// Change the initial delay.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Change the maximum delay.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Change the scaling factor in this backoff policy.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Pick each retry delay uniformly from zero to the computed delay.
    ///
    /// Only affects [BackoffPolicy][crate::backoff_policy::BackoffPolicy],
    /// polling delays are never randomized.
    pub fn with_full_jitter(mut self) -> Self {
        self.jitter = true;
        self
    }

    /// Creates a new exponential backoff policy.
    ///
    /// # Example
    /// ```
    /// # use container_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
    /// # use container_gax::backoff_policy::BackoffPolicy;
    /// # use container_gax::retry_state::RetryState;
    /// use std::time::Duration;
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::from_secs(5))
    ///     .with_maximum_delay(Duration::from_secs(50))
    ///     .with_scaling(2.0)
    ///     .build()?;
    /// let p = backoff.on_failure(&RetryState::new().set_attempt_count(1_u32));
    /// assert_eq!(p, Duration::from_secs(5));
    /// let p = backoff.on_failure(&RetryState::new().set_attempt_count(2_u32));
    /// assert_eq!(p, Duration::from_secs(10));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
            jitter: self.jitter,
        })
    }

    /// Creates a new exponential backoff policy clamping the ranges towards
    /// recommended values.
    ///
    /// The maximum delay is clamped first, to be between one millisecond and
    /// one day (both inclusive). Then the initial delay is clamped to be
    /// between one millisecond and the maximum delay. Finally, the scaling
    /// factor is clamped to the `[1.0, 32.0]` range.
    ///
    /// The method configuration may contain any values, the registry uses this
    /// function to turn them into a usable policy.
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = if self.scaling.is_nan() {
            1.0
        } else {
            self.scaling.clamp(1.0, 32.0)
        };
        let maximum_delay = self
            .maximum_delay
            .clamp(Duration::from_millis(1), Duration::from_secs(24 * 60 * 60));
        let initial_delay = self
            .initial_delay
            .clamp(Duration::from_millis(1), maximum_delay);
        ExponentialBackoff {
            initial_delay,
            maximum_delay,
            scaling,
            jitter: self.jitter,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Implements truncated exponential backoff.
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
    jitter: bool,
}

impl ExponentialBackoff {
    /// The delay before the first retry.
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// The maximum delay between attempts.
    pub fn maximum_delay(&self) -> Duration {
        self.maximum_delay
    }

    /// The growth factor between consecutive delays.
    pub fn scaling(&self) -> f64 {
        self.scaling
    }

    fn delay(&self, attempt_count: u32) -> Duration {
        let exp = std::cmp::min(i32::MAX as u32, attempt_count) as i32;
        let exp = exp.saturating_sub(1);
        let scaling = self.scaling.powi(exp);
        if scaling >= self.maximum_delay.div_duration_f64(self.initial_delay) {
            self.maximum_delay
        } else {
            // .mul_f64() cannot panic: scaling >= 1.0 and we just checked
            // that initial_delay * scaling < maximum_delay.
            self.initial_delay.mul_f64(scaling)
        }
    }

    fn delay_with_jitter(&self, attempt_count: u32, rng: &mut impl rand::Rng) -> Duration {
        let delay = self.delay(attempt_count);
        rng.random_range(Duration::ZERO..=delay)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::new().clamp()
    }
}

impl crate::polling_backoff_policy::PollingBackoffPolicy for ExponentialBackoff {
    fn wait_period(&self, state: &RetryState) -> Duration {
        self.delay(state.attempt_count)
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, state: &RetryState) -> Duration {
        if self.jitter {
            return self.delay_with_jitter(state.attempt_count, &mut rand::rng());
        }
        self.delay(state.attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff_policy::BackoffPolicy;
    use crate::polling_backoff_policy::PollingBackoffPolicy;
    use test_case::test_case;

    fn state(attempt_count: u32) -> RetryState {
        RetryState::new().set_attempt_count(attempt_count)
    }

    #[test]
    fn exponential_build_errors() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .with_maximum_delay(Duration::from_secs(5))
            .build();
        assert!(matches!(b, Err(Error::InvalidInitialDelay(_))), "{b:?}");
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(10))
            .with_maximum_delay(Duration::from_secs(5))
            .build();
        assert!(matches!(b, Err(Error::EmptyRange { .. })), "{b:?}");

        let b = ExponentialBackoffBuilder::new()
            .with_scaling(-1.0)
            .build();
        assert!(matches!(b, Err(Error::InvalidScalingFactor(_))), "{b:?}");

        let b = ExponentialBackoffBuilder::new()
            .with_scaling(0.0)
            .build();
        assert!(matches!(b, Err(Error::InvalidScalingFactor(_))), "{b:?}");
    }

    #[test]
    fn exponential_build_limits() {
        let r = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_nanos(1))
            .with_maximum_delay(Duration::MAX)
            .with_scaling(1.0)
            .build();
        assert!(r.is_ok(), "{r:?}");
    }

    #[test]
    fn exponential_builder_defaults() {
        let r = ExponentialBackoffBuilder::new().build();
        assert!(r.is_ok(), "{r:?}");
        let r = ExponentialBackoffBuilder::default().build();
        assert!(r.is_ok(), "{r:?}");
        let b = ExponentialBackoff::default();
        assert_eq!(b.initial_delay(), Duration::from_secs(1));
        assert_eq!(b.maximum_delay(), Duration::from_secs(60));
        assert_eq!(b.scaling(), 2.0);
    }

    #[test_case(Duration::from_secs(1), Duration::MAX, 0.5; "scaling below range")]
    #[test_case(Duration::from_secs(1), Duration::MAX, 1_000_000.0; "scaling over range")]
    #[test_case(Duration::from_secs(1), Duration::MAX, f64::NAN; "scaling not a number")]
    #[test_case(Duration::from_secs(1), Duration::MAX, 8.0; "max over range")]
    #[test_case(Duration::from_secs(1), Duration::ZERO, 8.0; "max below range")]
    #[test_case(Duration::from_secs(10), Duration::ZERO, 8.0; "init over range")]
    #[test_case(Duration::ZERO, Duration::ZERO, 8.0; "init below range")]
    fn exponential_clamp(init: Duration, max: Duration, scaling: f64) {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(init)
            .with_maximum_delay(max)
            .with_scaling(scaling)
            .clamp();
        assert_eq!(b.scaling.clamp(1.0, 32.0), b.scaling);
        assert_eq!(
            b.initial_delay
                .clamp(Duration::from_millis(1), b.maximum_delay),
            b.initial_delay
        );
        assert_eq!(
            b.maximum_delay
                .clamp(b.initial_delay, Duration::from_secs(24 * 60 * 60)),
            b.maximum_delay
        );
    }

    #[test]
    fn exponential_scaling() -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_maximum_delay(Duration::from_secs(10))
            .with_scaling(2.0)
            .build()?;

        assert_eq!(b.on_failure(&state(1)), Duration::from_secs(1));
        assert_eq!(b.on_failure(&state(2)), Duration::from_secs(2));
        assert_eq!(b.on_failure(&state(3)), Duration::from_secs(4));
        assert_eq!(b.on_failure(&state(4)), Duration::from_secs(8));
        assert_eq!(b.on_failure(&state(5)), Duration::from_secs(10));
        assert_eq!(b.on_failure(&state(100)), Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn exponential_fractional_scaling() -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(2))
            .with_maximum_delay(Duration::from_secs(60))
            .with_scaling(1.5)
            .build()?;

        assert_eq!(b.on_failure(&state(1)), Duration::from_secs(2));
        assert_eq!(b.on_failure(&state(2)), Duration::from_secs(3));
        assert_eq!(b.on_failure(&state(3)), Duration::from_millis(4500));
        Ok(())
    }

    #[test]
    fn wait_period() -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_maximum_delay(Duration::from_secs(4))
            .with_scaling(2.0)
            .with_full_jitter()
            .build()?;

        assert_eq!(b.wait_period(&state(1)), Duration::from_secs(1));
        assert_eq!(b.wait_period(&state(2)), Duration::from_secs(2));
        assert_eq!(b.wait_period(&state(3)), Duration::from_secs(4));
        assert_eq!(b.wait_period(&state(4)), Duration::from_secs(4));
        Ok(())
    }

    #[test]
    fn on_failure_with_jitter() -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_maximum_delay(Duration::from_secs(4))
            .with_scaling(2.0)
            .with_full_jitter()
            .build()?;

        for (attempt, cap) in [(1, 1), (2, 2), (3, 4), (4, 4), (5, 4)] {
            let d = b.on_failure(&state(attempt));
            assert!(d <= Duration::from_secs(cap), "{attempt} {d:?}");
        }
        Ok(())
    }
}
