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

//! Retry loop control types.
//!
//! Applications only need to use these types when implementing their own retry
//! policies.

use crate::error::Error;

/// The decision made by a retry policy after a failed attempt.
///
/// # Example
///
/// ```
/// # use container_gax::error::Error;
/// # use container_gax::retry_policy::RetryPolicy;
/// # use container_gax::retry_result::RetryResult;
/// # use container_gax::retry_state::RetryState;
/// #[derive(Debug)]
/// struct UpToFortyTwo;
/// impl RetryPolicy for UpToFortyTwo {
///     fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
///         if state.attempt_count > 42 {
///             return RetryResult::Exhausted(error);
///         }
///         RetryResult::Continue(error)
///     }
/// }
/// ```
#[derive(Debug)]
pub enum RetryResult {
    /// The error is not retryable, stop the loop and return it unchanged.
    Permanent(Error),

    /// The error is retryable, but the policy budget is used up.
    ///
    /// The call wrapper reports the error as an exhausted retry policy,
    /// including the number of attempts made.
    Exhausted(Error),

    /// The error is retryable, wait and make another attempt.
    Continue(Error),
}

impl RetryResult {
    /// Returns true if the result is [RetryResult::Permanent].
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }

    /// Returns true if the result is [RetryResult::Exhausted].
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    /// Returns true if the result is [RetryResult::Continue].
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Discards the decision and returns the underlying error.
    pub fn into_error(self) -> Error {
        match self {
            Self::Permanent(e) | Self::Exhausted(e) | Self::Continue(e) => e,
        }
    }
}
