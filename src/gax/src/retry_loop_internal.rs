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

//! The retry loop shared by all wrapped methods.
//!
//! This module is an implementation detail of the call wrapper. It is public
//! so transports and tests can run a single RPC under a retry policy without
//! going through a client.

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::retry_policy::RetryPolicy;
use crate::retry_result::RetryResult;
use crate::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;

/// Runs the retry loop for a given function.
///
/// This function calls `inner` until (1) it returns a successful response,
/// (2) it returns an error the retry policy considers permanent, or (3) the
/// retry policy is exhausted. `inner` receives the attempt number (starting
/// at 1) and the remaining time in the retry policy, if any.
///
/// In between calls the function waits the amount of time prescribed by the
/// backoff policy, using `sleep` to implement any sleep. If the retry policy
/// has less time remaining than the next backoff delay the loop stops without
/// sleeping.
///
/// Permanent errors keep their kind. After one or more retries they also
/// record the number of attempts. An exhausted policy returns
/// [Error::exhausted] wrapping the last error and the number of attempts.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(u32, Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let mut state = RetryState::new().set_start(tokio::time::Instant::now().into_std());
    loop {
        let remaining_time = retry_policy.remaining_time(&state);
        state.attempt_count += 1;
        let error = match inner(state.attempt_count, remaining_time).await {
            Ok(r) => return Ok(r),
            Err(e) => e,
        };
        match retry_policy.on_error(&state, error) {
            RetryResult::Permanent(e) if state.attempt_count > 1 => {
                return Err(e.with_attempt_count(state.attempt_count));
            }
            RetryResult::Permanent(e) => return Err(e),
            RetryResult::Exhausted(e) => return Err(Error::exhausted(state.attempt_count, e)),
            RetryResult::Continue(e) => {
                let delay = backoff_policy.on_failure(&state);
                if retry_policy
                    .remaining_time(&state)
                    .is_some_and(|remaining| remaining < delay)
                {
                    return Err(Error::exhausted(state.attempt_count, e));
                }
                tracing::debug!(
                    attempt_count = state.attempt_count,
                    ?delay,
                    error = %e,
                    "retrying after transient error"
                );
                sleep(delay).await;
            }
        }
    }
}

/// Computes the timeout for the next attempt.
///
/// The attempt timeout never exceeds the time remaining in the retry policy.
pub fn effective_timeout(
    attempt_timeout: Option<Duration>,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (attempt_timeout, remaining_time) {
        (None, None) => None,
        (None, Some(t)) => Some(t),
        (Some(t), None) => Some(t),
        (Some(a), Some(r)) => Some(std::cmp::min(a, r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::retry_policy::{RetryPolicyExt, RetryableCodes};
    use std::collections::VecDeque;
    use std::error::Error as _;
    use std::sync::Mutex;
    use test_case::test_case;

    #[test_case(None, None, None)]
    #[test_case(Some(Duration::from_secs(4)), Some(Duration::from_secs(4)), None)]
    #[test_case(Some(Duration::from_secs(4)), None, Some(Duration::from_secs(4)))]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4))
    )]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4)),
        Some(Duration::from_secs(2))
    )]
    fn effective_timeouts(
        want: Option<Duration>,
        remaining: Option<Duration>,
        attempt: Option<Duration>,
    ) {
        assert_eq!(effective_timeout(attempt, remaining), want);
    }

    #[tokio::test]
    async fn immediate_success() -> anyhow::Result<()> {
        let mut calls = 0;
        let inner = async |_: u32, _: Option<Duration>| -> Result<String> {
            calls += 1;
            Ok("success".to_string())
        };
        let sleep = async |d: Duration| assert!(d.is_zero(), "unexpected sleep {d:?}");
        let response = retry_loop(inner, sleep, retry_policy(5), backoff_policy()).await?;
        assert_eq!(response, "success");
        assert_eq!(calls, 1);
        Ok(())
    }

    #[tokio::test]
    async fn immediate_failure() -> anyhow::Result<()> {
        let mut calls = 0;
        let inner = async |_: u32, _: Option<Duration>| -> Result<String> {
            calls += 1;
            Err(permanent())
        };
        let sleep = async |d: Duration| assert!(d.is_zero(), "unexpected sleep {d:?}");
        let err = retry_loop(inner, sleep, retry_policy(5), backoff_policy())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::PermissionDenied), "{err:?}");
        assert!(!err.is_exhausted(), "{err:?}");
        assert_eq!(err.attempt_count(), None, "{err:?}");
        assert_eq!(calls, 1);
        Ok(())
    }

    #[tokio::test]
    async fn retry_then_success() -> anyhow::Result<()> {
        let mut responses: VecDeque<Result<String>> =
            VecDeque::from([Err(transient()), Err(transient()), Ok("success".into())]);
        let mut attempts = Vec::new();
        let inner = async |attempt: u32, _: Option<Duration>| -> Result<String> {
            attempts.push(attempt);
            responses.pop_front().unwrap_or_else(|| Err(permanent()))
        };
        let sleeps = Mutex::new(Vec::new());
        let sleep = async |d: Duration| sleeps.lock().unwrap().push(d);

        let response = retry_loop(inner, sleep, retry_policy(5), backoff_policy()).await?;
        assert_eq!(response, "success");
        assert_eq!(attempts, vec![1, 2, 3]);
        assert_eq!(
            sleeps.into_inner()?,
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn retry_then_permanent() -> anyhow::Result<()> {
        let mut responses: VecDeque<Result<String>> =
            VecDeque::from([Err(transient()), Err(permanent())]);
        let inner = async |_: u32, _: Option<Duration>| -> Result<String> {
            responses
                .pop_front()
                .unwrap_or_else(|| Ok("unexpected".into()))
        };
        let sleep = async |_: Duration| {};

        let err = retry_loop(inner, sleep, retry_policy(5), backoff_policy())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::PermissionDenied), "{err:?}");
        assert!(!err.is_exhausted(), "{err:?}");
        assert_eq!(err.attempt_count(), Some(2), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn exhausted_by_attempt_count() -> anyhow::Result<()> {
        let mut calls = 0;
        let inner = async |_: u32, _: Option<Duration>| -> Result<String> {
            calls += 1;
            Err(transient())
        };
        let sleeps = Mutex::new(Vec::new());
        let sleep = async |d: Duration| sleeps.lock().unwrap().push(d);

        let err = retry_loop(inner, sleep, retry_policy(3), backoff_policy())
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(err.attempt_count(), Some(3));
        assert_eq!(err.code(), Some(Code::Unavailable));
        let source = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(source.is_some_and(|e| e.status().is_some()), "{err:?}");
        assert_eq!(calls, 3);
        assert_eq!(sleeps.into_inner()?.len(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_by_remaining_time() -> anyhow::Result<()> {
        let policy: Arc<dyn RetryPolicy> = Arc::new(
            RetryableCodes::new([Code::Unavailable]).with_time_limit(Duration::from_millis(2500)),
        );
        let mut remaining = Vec::new();
        let inner = async |_: u32, r: Option<Duration>| -> Result<String> {
            remaining.push(r);
            Err(transient())
        };
        let sleep = async |d: Duration| tokio::time::sleep(d).await;

        let err = retry_loop(inner, sleep, policy, backoff_policy())
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        // Waits 1s and 2s would exceed the 2.5s budget, the loop stops after
        // the second attempt instead of sleeping.
        assert_eq!(err.attempt_count(), Some(2));
        assert_eq!(remaining.len(), 2, "{remaining:?}");
        assert_eq!(remaining[0], Some(Duration::from_millis(2500)));
        assert!(
            remaining[1].is_some_and(|d| d <= Duration::from_millis(1500)
                && d >= Duration::from_millis(1499)),
            "{remaining:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn custom_policies() -> anyhow::Result<()> {
        let mut retry = MockRetryPolicy::new();
        retry.expect_remaining_time().returning(|_| None);
        retry
            .expect_on_error()
            .once()
            .withf(|state, _| state.attempt_count == 1)
            .returning(|_, e| RetryResult::Continue(e));
        retry
            .expect_on_error()
            .once()
            .withf(|state, _| state.attempt_count == 2)
            .returning(|_, e| RetryResult::Exhausted(e));
        let mut backoff = MockBackoffPolicy::new();
        backoff
            .expect_on_failure()
            .once()
            .return_const(Duration::from_millis(10));

        let inner = async |_: u32, _: Option<Duration>| -> Result<String> { Err(transient()) };
        let sleep = async |_: Duration| {};
        let err = retry_loop(inner, sleep, Arc::new(retry), Arc::new(backoff))
            .await
            .unwrap_err();
        assert_eq!(err.attempt_count(), Some(2), "{err:?}");
        Ok(())
    }

    fn retry_policy(attempts: u32) -> Arc<dyn RetryPolicy> {
        Arc::new(RetryableCodes::new([Code::Unavailable]).with_attempt_limit(attempts))
    }

    fn backoff_policy() -> Arc<dyn BackoffPolicy> {
        Arc::new(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_secs(1))
                .with_maximum_delay(Duration::from_secs(10))
                .with_scaling(2.0)
                .clamp(),
        )
    }

    fn transient() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable).set_message("try-again"))
    }

    fn permanent() -> Error {
        Error::service(Status::default().set_code(Code::PermissionDenied).set_message("uh-oh"))
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;
            fn remaining_time(&self, state: &RetryState) -> Option<Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn on_failure(&self, state: &RetryState) -> Duration;
        }
    }
}
