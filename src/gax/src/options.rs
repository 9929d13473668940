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

//! Per request options.
//!
//! Each method has a default retry policy and a default attempt timeout,
//! loaded from the method configuration when the client is built.
//! Applications may need to change the behavior of a single call, for example
//! to disable retries or to use a longer timeout. The request builder returned
//! by each client method implements the [RequestOptionsBuilder] trait where
//! applications can override these defaults.
//!
//! Overrides are call-scoped: they never change the defaults used by other
//! calls to the same method.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// A call-scoped override of a method default.
#[derive(Clone, Debug, PartialEq)]
pub enum Override<T> {
    /// Use the method default, if any.
    Default,
    /// Disable the feature for this call.
    Disabled,
    /// Use this value instead of the method default.
    Value(T),
}

impl<T> Override<T> {
    /// Resolves the effective value given the method default.
    ///
    /// # Example
    /// ```
    /// # use container_gax::options::Override;
    /// assert_eq!(Override::Default.resolve(Some(&1)), Some(&1));
    /// assert_eq!(Override::Disabled.resolve(Some(&1)), None);
    /// assert_eq!(Override::Value(2).resolve(Some(&1)), Some(&2));
    /// ```
    pub fn resolve<'a>(&'a self, default: Option<&'a T>) -> Option<&'a T> {
        match self {
            Self::Default => default,
            Self::Disabled => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Returns true if the override is [Override::Default].
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl<T> std::default::Default for Override<T> {
    fn default() -> Self {
        Self::Default
    }
}

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    retry_policy: Override<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    attempt_timeout: Override<Duration>,
    metadata: Vec<(String, String)>,
}

impl RequestOptions {
    /// The retry policy override.
    pub fn retry_policy(&self) -> &Override<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Use this retry policy instead of the method default.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Override::Value(v.into().into());
    }

    /// Make a single attempt, regardless of the method default.
    pub fn disable_retry(&mut self) {
        self.retry_policy = Override::Disabled;
    }

    /// The backoff policy override.
    ///
    /// Only used when the effective retry policy is not disabled.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Use this backoff policy instead of the method default.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// The per-attempt timeout override.
    pub fn attempt_timeout(&self) -> &Override<Duration> {
        &self.attempt_timeout
    }

    /// Use this timeout for each attempt instead of the method default.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Override::Value(v.into());
    }

    /// Do not time out individual attempts.
    ///
    /// The retry policy may still limit the total time spent in the call.
    pub fn disable_timeout(&mut self) {
        self.attempt_timeout = Override::Disabled;
    }

    /// Additional metadata attached to each attempt.
    pub fn metadata(&self) -> &[(String, String)] {
        &self.metadata
    }

    /// Attach a key-value pair to each attempt.
    ///
    /// The pairs are merged with the client identification metadata. Keys
    /// must be valid (lowercase) HTTP header names, otherwise the call fails
    /// before any attempt is made.
    pub fn insert_metadata<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.metadata.push((key.into(), value.into()));
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each RPC. These builders can be
/// used to set the request parameters, e.g., the name of the resource targeted
/// by the RPC, as well as any request options.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Sets the per-attempt timeout for this call.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Disables the per-attempt timeout for this call.
    fn without_timeout(self) -> Self;

    /// Sets the retry policy for this call.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Disables retries for this call: the call makes exactly one attempt.
    fn without_retry(self) -> Self;

    /// Sets the backoff policy for this call.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Attaches a metadata key-value pair to this call.
    fn with_metadata<K: Into<String>, V: Into<String>>(self, key: K, value: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn without_timeout(mut self) -> Self {
        self.request_options().disable_timeout();
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn without_retry(mut self) -> Self {
        self.request_options().disable_retry();
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_metadata<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.request_options().insert_metadata(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::retry_policy::{AlwaysRetry, RetryPolicyExt};

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl internal::RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options_defaults() {
        let opts = RequestOptions::default();
        assert!(opts.retry_policy().is_default(), "{opts:?}");
        assert!(opts.backoff_policy().is_none(), "{opts:?}");
        assert!(opts.attempt_timeout().is_default(), "{opts:?}");
        assert!(opts.metadata().is_empty(), "{opts:?}");
    }

    #[test]
    fn request_options_setters() {
        let mut opts = RequestOptions::default();
        opts.set_attempt_timeout(Duration::from_secs(3));
        assert_eq!(
            opts.attempt_timeout(),
            &Override::Value(Duration::from_secs(3))
        );
        opts.disable_timeout();
        assert_eq!(opts.attempt_timeout(), &Override::Disabled);

        opts.set_retry_policy(AlwaysRetry.with_attempt_limit(3));
        assert!(
            matches!(opts.retry_policy(), Override::Value(_)),
            "{opts:?}"
        );
        opts.disable_retry();
        assert!(matches!(opts.retry_policy(), Override::Disabled), "{opts:?}");

        opts.set_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(opts.backoff_policy().is_some(), "{opts:?}");

        opts.insert_metadata("x-goog-user-project", "my-project");
        assert_eq!(
            opts.metadata(),
            &[("x-goog-user-project".to_string(), "my-project".to_string())]
        );
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default()
            .with_attempt_timeout(Duration::from_secs(7))
            .with_retry_policy(AlwaysRetry.with_attempt_limit(2))
            .with_backoff_policy(ExponentialBackoffBuilder::new().clamp())
            .with_metadata("k1", "v1")
            .with_metadata("k2", "v2");
        let opts = &builder.request_options;
        assert_eq!(
            opts.attempt_timeout(),
            &Override::Value(Duration::from_secs(7))
        );
        assert!(matches!(opts.retry_policy(), Override::Value(_)), "{opts:?}");
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        assert_eq!(opts.metadata().len(), 2);

        let builder = TestBuilder::default().without_retry().without_timeout();
        let opts = &builder.request_options;
        assert!(matches!(opts.retry_policy(), Override::Disabled), "{opts:?}");
        assert_eq!(opts.attempt_timeout(), &Override::Disabled);
    }

    #[test]
    fn resolve() {
        let default = Duration::from_secs(10);
        let o = Override::<Duration>::default();
        assert_eq!(o.resolve(Some(&default)), Some(&default));
        assert_eq!(o.resolve(None), None);
        let o = Override::<Duration>::Disabled;
        assert_eq!(o.resolve(Some(&default)), None);
        let o = Override::Value(Duration::from_secs(1));
        assert_eq!(o.resolve(Some(&default)), Some(&Duration::from_secs(1)));
        assert_eq!(o.resolve(None), Some(&Duration::from_secs(1)));
    }
}
