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

//! Defines the trait for polling backoff policies.
//!
//! Mutations in the cluster manager service return an operation handle. The
//! client libraries can poll that handle until the operation completes. When
//! doing so they back off between polls to avoid overloading the service.
//!
//! These policies should not be confused with retry backoff policies. Polling
//! backoff policies do not use jitter, the expected completion time of an
//! operation is not correlated with other clients.

use crate::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;

/// Defines the trait implemented by all polling backoff strategies.
pub trait PollingBackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the wait period before the next poll.
    ///
    /// The `state` includes the number of polls made so far. This method is
    /// always called after the first poll.
    fn wait_period(&self, state: &RetryState) -> Duration;
}

/// A helper type to use [PollingBackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingBackoffPolicyArg(Arc<dyn PollingBackoffPolicy>);

impl<T: PollingBackoffPolicy + 'static> std::convert::From<T> for PollingBackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn PollingBackoffPolicy>> for PollingBackoffPolicyArg {
    fn from(value: Arc<dyn PollingBackoffPolicy>) -> Self {
        Self(value)
    }
}

impl std::convert::From<PollingBackoffPolicyArg> for Arc<dyn PollingBackoffPolicy> {
    fn from(value: PollingBackoffPolicyArg) -> Arc<dyn PollingBackoffPolicy> {
        value.0
    }
}
