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

//! Defines traits for retry policies and some common implementations.
//!
//! The call wrapper automatically retries RPCs when they fail with an error
//! that the effective retry policy classifies as transient. Each method has a
//! default policy, loaded from the method configuration. Applications may
//! override the default for a single call, see
//! [RequestOptionsBuilder::with_retry_policy].
//!
//! # Example
//! ```
//! # use container_gax::retry_policy::*;
//! # use container_gax::error::rpc::Code;
//! use std::time::Duration;
//! let policy = RetryableCodes::new([Code::Unavailable, Code::DeadlineExceeded])
//!     .with_attempt_limit(5)
//!     .with_time_limit(Duration::from_secs(30));
//! ```
//!
//! [RequestOptionsBuilder::with_retry_policy]: crate::options::RequestOptionsBuilder::with_retry_policy

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use crate::retry_state::RetryState;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `state` - the start time of the retry loop and the number of
    ///   attempts made so far, including the one that just failed.
    /// * `error` - the last error received.
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop uses this value to clamp the timeout of the next
    /// attempt. Policies that are not time based return `None`.
    fn remaining_time(&self, _state: &RetryState) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T: RetryPolicy + 'static> std::convert::From<T> for RetryPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl std::convert::From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy].
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// The `remaining_time()` function returns the remaining time. This is
    /// always [Duration::ZERO] once or after the policy's deadline is reached.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// This policy decorates an inner policy and limits the total number of
    /// attempts. Note that `on_error()` is not called before the initial
    /// (non-retry) attempt. Therefore, setting the maximum number of attempts
    /// to 0 or 1 results in no retry attempts.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// Retries errors whose canonical code is in a configured set.
///
/// This is the policy created from the method configuration. Errors without
/// a code (invalid arguments, serialization problems) are never retried.
///
/// # Example
/// ```
/// # use container_gax::retry_policy::*;
/// # use container_gax::retry_state::RetryState;
/// # use container_gax::error::{Error, rpc::{Code, Status}};
/// let policy = RetryableCodes::new([Code::Unavailable]);
/// let state = RetryState::new().set_attempt_count(1_u32);
/// let unavailable = Error::service(Status::default().set_code(Code::Unavailable));
/// assert!(policy.on_error(&state, unavailable).is_continue());
/// let not_found = Error::service(Status::default().set_code(Code::NotFound));
/// assert!(policy.on_error(&state, not_found).is_permanent());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RetryableCodes {
    codes: HashSet<Code>,
}

impl RetryableCodes {
    /// Creates a policy retrying the given codes.
    pub fn new<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = Code>,
    {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// The set of codes retried by this policy.
    pub fn codes(&self) -> &HashSet<Code> {
        &self.codes
    }

    /// Returns true if the policy retries no codes at all.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl RetryPolicy for RetryableCodes {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        match error.code() {
            Some(code) if self.codes.contains(&code) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop. It is mostly useful in tests.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that treats every error as permanent.
///
/// Equivalent to disabling retries, but usable where a policy is required.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Permanent(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// Create instances via [RetryPolicyExt::with_time_limit].
#[derive(Debug)]
pub struct LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance, with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn deadline(&self, state: &RetryState) -> std::time::Instant {
        state.start + self.maximum_duration
    }

    fn on_error_now(&self, now: std::time::Instant, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if now >= self.deadline(state) => RetryResult::Exhausted(e),
            flow => flow,
        }
    }

    fn remaining_time_now(&self, now: std::time::Instant, state: &RetryState) -> Option<Duration> {
        let remaining = self.deadline(state).saturating_duration_since(now);
        match self.inner.remaining_time(state) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        self.on_error_now(now(), state, error)
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        self.remaining_time_now(now(), state)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// Create instances via [RetryPolicyExt::with_attempt_limit].
#[derive(Debug)]
pub struct LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance, with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if state.attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            flow => flow,
        }
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        self.inner.remaining_time(state)
    }
}

// The retry loop records its start time using the tokio clock, which may be
// paused in tests.
fn now() -> std::time::Instant {
    tokio::time::Instant::now().into_std()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Status;
    use test_case::test_case;

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;
            fn remaining_time(&self, state: &RetryState) -> Option<Duration>;
        }
    }

    fn from_code(code: Code) -> Error {
        Error::service(Status::default().set_code(code))
    }

    // Verify `RetryPolicyArg` can be converted from the desired types.
    #[test]
    fn retry_policy_arg() {
        let policy = AlwaysRetry.with_attempt_limit(3);
        let _ = RetryPolicyArg::from(policy);

        let policy: Arc<dyn RetryPolicy> = Arc::new(AlwaysRetry.with_time_limit(Duration::from_secs(1)));
        let arg = RetryPolicyArg::from(policy);
        let _: Arc<dyn RetryPolicy> = arg.into();
    }

    #[test_case(Code::Unavailable, true)]
    #[test_case(Code::DeadlineExceeded, true)]
    #[test_case(Code::NotFound, false)]
    #[test_case(Code::PermissionDenied, false)]
    #[test_case(Code::Internal, false)]
    fn retryable_codes(code: Code, want_continue: bool) {
        let policy = RetryableCodes::new([Code::Unavailable, Code::DeadlineExceeded]);
        let state = RetryState::new().set_attempt_count(1_u32);
        let flow = policy.on_error(&state, from_code(code));
        assert_eq!(flow.is_continue(), want_continue, "{flow:?}");
        assert_eq!(flow.is_permanent(), !want_continue, "{flow:?}");
        assert!(policy.remaining_time(&state).is_none());
    }

    #[test]
    fn retryable_codes_client_errors() {
        let policy = RetryableCodes::new([Code::Unavailable]);
        let state = RetryState::new().set_attempt_count(1_u32);
        let flow = policy.on_error(&state, Error::invalid_argument("bad name"));
        assert!(flow.is_permanent(), "{flow:?}");
        let flow = policy.on_error(&state, Error::io("connection refused"));
        assert!(flow.is_continue(), "{flow:?}");
        let flow = policy.on_error(&state, Error::timeout("slow"));
        assert!(flow.is_permanent(), "{flow:?}");
    }

    #[test]
    fn retryable_codes_empty() {
        let policy = RetryableCodes::default();
        assert!(policy.is_empty());
        let state = RetryState::new().set_attempt_count(1_u32);
        let flow = policy.on_error(&state, from_code(Code::Unavailable));
        assert!(flow.is_permanent(), "{flow:?}");
    }

    #[test]
    fn always_retry() {
        let state = RetryState::new().set_attempt_count(1_u32);
        let flow = AlwaysRetry.on_error(&state, from_code(Code::PermissionDenied));
        assert!(flow.is_continue(), "{flow:?}");
        assert!(AlwaysRetry.remaining_time(&state).is_none());

        let flow = NeverRetry.on_error(&state, from_code(Code::Unavailable));
        assert!(flow.is_permanent(), "{flow:?}");
    }

    #[test]
    fn limited_time_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_remaining_time().times(1).returning(|_| None);

        let policy = mock.with_time_limit(Duration::from_secs(60));
        let state = RetryState::new().set_attempt_count(1_u32);
        let flow = policy.on_error(&state, from_code(Code::Unavailable));
        assert!(flow.is_continue(), "{flow:?}");
        let remaining = policy.remaining_time(&state);
        assert!(remaining.is_some_and(|d| d <= Duration::from_secs(60)), "{remaining:?}");
    }

    #[test]
    fn limited_time_exhausted() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(2)
            .returning(|_, e| RetryResult::Continue(e));

        let policy = mock.with_time_limit(Duration::from_secs(60));
        let state = RetryState::new().set_attempt_count(1_u32);
        let deadline = policy.deadline(&state);

        let flow = policy.on_error_now(
            deadline - Duration::from_secs(10),
            &state,
            from_code(Code::Unavailable),
        );
        assert!(flow.is_continue(), "{flow:?}");
        let flow = policy.on_error_now(
            deadline + Duration::from_secs(10),
            &state,
            from_code(Code::Unavailable),
        );
        assert!(flow.is_exhausted(), "{flow:?}");
    }

    #[test]
    fn limited_time_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Permanent(e));

        let policy = mock.with_time_limit(Duration::from_secs(60));
        let state = RetryState::new().set_attempt_count(1_u32);
        let flow = policy.on_error_now(
            policy.deadline(&state) + Duration::from_secs(10),
            &state,
            from_code(Code::NotFound),
        );
        assert!(flow.is_permanent(), "{flow:?}");
    }

    #[test]
    fn limited_time_remaining() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(3)
            .returning(|_| Some(Duration::from_secs(30)));

        let policy = mock.with_time_limit(Duration::from_secs(60));
        let state = RetryState::new();
        let deadline = policy.deadline(&state);

        let got = policy.remaining_time_now(deadline - Duration::from_secs(50), &state);
        assert_eq!(got, Some(Duration::from_secs(30)));
        let got = policy.remaining_time_now(deadline - Duration::from_secs(10), &state);
        assert_eq!(got, Some(Duration::from_secs(10)));
        let got = policy.remaining_time_now(deadline + Duration::from_secs(10), &state);
        assert_eq!(got, Some(Duration::ZERO));
    }

    #[test_case(1, false)]
    #[test_case(2, false)]
    #[test_case(3, true)]
    #[test_case(4, true)]
    fn limited_attempt_count(attempt_count: u32, want_exhausted: bool) {
        let policy = AlwaysRetry.with_attempt_limit(3);
        let state = RetryState::new().set_attempt_count(attempt_count);
        let flow = policy.on_error(&state, from_code(Code::Unavailable));
        assert_eq!(flow.is_exhausted(), want_exhausted, "{flow:?}");
        assert_eq!(flow.is_continue(), !want_exhausted, "{flow:?}");
    }

    #[test]
    fn limited_attempt_count_permanent() {
        let policy = RetryableCodes::new([Code::Unavailable]).with_attempt_limit(3);
        let state = RetryState::new().set_attempt_count(5_u32);
        let flow = policy.on_error(&state, from_code(Code::NotFound));
        assert!(flow.is_permanent(), "{flow:?}");
    }

    #[test]
    fn limited_attempt_count_forwards_remaining_time() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_| Some(Duration::from_secs(7)));
        let policy = mock.with_attempt_limit(3);
        let got = policy.remaining_time(&RetryState::new());
        assert_eq!(got, Some(Duration::from_secs(7)));
    }
}
