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

//! The per-method default retry and timeout configuration.
//!
//! Generated clients ship a JSON document describing, for each RPC, which
//! status codes are retried, how the backoff grows between attempts, and how
//! long each attempt may take. The document is parsed once, when the client
//! is built, into a [MethodConfigs] registry. Lookups are read-only after
//! that point.
//!
//! The document uses this format:
//!
//! ```json
//! {
//!   "interfaces": {
//!     "google.container.v1.ClusterManager": {
//!       "retry_codes": {
//!         "idempotent": ["DEADLINE_EXCEEDED", "UNAVAILABLE"],
//!         "non_idempotent": []
//!       },
//!       "retry_params": {
//!         "default": {
//!           "initial_retry_delay_millis": 100,
//!           "retry_delay_multiplier": 1.3,
//!           "max_retry_delay_millis": 60000,
//!           "initial_rpc_timeout_millis": 20000,
//!           "rpc_timeout_multiplier": 1.0,
//!           "max_rpc_timeout_millis": 20000,
//!           "total_timeout_millis": 600000
//!         }
//!       },
//!       "methods": {
//!         "GetCluster": {
//!           "timeout_millis": 20000,
//!           "retry_codes_name": "idempotent",
//!           "retry_params_name": "default"
//!         }
//!       }
//!     }
//!   }
//! }
//! ```

use crate::backoff_policy::BackoffPolicy;
use crate::client_builder::{Error, Result};
use crate::error::rpc::Code;
use crate::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use crate::retry_policy::{RetryPolicy, RetryPolicyExt, RetryableCodes};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

/// The default retry behavior of a method.
#[derive(Clone, Debug, PartialEq)]
pub struct RetrySettings {
    codes: HashSet<Code>,
    backoff: ExponentialBackoff,
    total_timeout: Option<Duration>,
    max_attempts: Option<u32>,
}

impl RetrySettings {
    /// Retry the given codes, with the default backoff and no limits.
    pub fn new<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = Code>,
    {
        Self {
            codes: codes.into_iter().collect(),
            backoff: ExponentialBackoff::default(),
            total_timeout: None,
            max_attempts: None,
        }
    }

    /// Change the backoff between attempts.
    pub fn with_backoff(mut self, v: ExponentialBackoff) -> Self {
        self.backoff = v;
        self
    }

    /// Limit the total time spent in the retry loop.
    pub fn with_total_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.total_timeout = Some(v.into());
        self
    }

    /// Limit the number of attempts, including the initial attempt.
    pub fn with_max_attempts(mut self, v: u32) -> Self {
        self.max_attempts = Some(v);
        self
    }

    pub fn codes(&self) -> &HashSet<Code> {
        &self.codes
    }

    pub fn backoff(&self) -> &ExponentialBackoff {
        &self.backoff
    }

    pub fn total_timeout(&self) -> Option<Duration> {
        self.total_timeout
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Creates the retry policy for these settings.
    ///
    /// Returns `None` when no codes are retryable, which disables retries.
    pub fn retry_policy(&self) -> Option<Arc<dyn RetryPolicy>> {
        if self.codes.is_empty() {
            return None;
        }
        let codes = RetryableCodes::new(self.codes.iter().copied());
        let policy: Arc<dyn RetryPolicy> = match (self.total_timeout, self.max_attempts) {
            (Some(t), Some(n)) => Arc::new(codes.with_time_limit(t).with_attempt_limit(n)),
            (Some(t), None) => Arc::new(codes.with_time_limit(t)),
            (None, Some(n)) => Arc::new(codes.with_attempt_limit(n)),
            (None, None) => Arc::new(codes),
        };
        Some(policy)
    }

    /// Creates the backoff policy for these settings.
    pub fn backoff_policy(&self) -> Arc<dyn BackoffPolicy> {
        Arc::new(self.backoff.clone())
    }
}

/// The per-attempt timeout of a method.
#[derive(Clone, Debug, PartialEq)]
pub enum TimeoutPolicy {
    /// Every attempt gets the same timeout.
    Constant(Duration),
    /// The timeout grows with each attempt, up to a maximum.
    Exponential {
        initial: Duration,
        multiplier: f64,
        maximum: Duration,
    },
}

impl TimeoutPolicy {
    /// The timeout for attempt `attempt_count`, starting at 1.
    ///
    /// # Example
    /// ```
    /// # use container_gax::method_config::TimeoutPolicy;
    /// # use std::time::Duration;
    /// let policy = TimeoutPolicy::Exponential {
    ///     initial: Duration::from_secs(1),
    ///     multiplier: 2.0,
    ///     maximum: Duration::from_secs(5),
    /// };
    /// assert_eq!(policy.attempt_timeout(1), Duration::from_secs(1));
    /// assert_eq!(policy.attempt_timeout(2), Duration::from_secs(2));
    /// assert_eq!(policy.attempt_timeout(4), Duration::from_secs(5));
    /// ```
    pub fn attempt_timeout(&self, attempt_count: u32) -> Duration {
        match self {
            Self::Constant(d) => *d,
            Self::Exponential {
                initial,
                multiplier,
                maximum,
            } => {
                if initial >= maximum || initial.is_zero() {
                    return *std::cmp::min(initial, maximum);
                }
                let exp = std::cmp::min(i32::MAX as u32, attempt_count.max(1)) as i32 - 1;
                let scaling = multiplier.max(1.0).powi(exp);
                if scaling >= maximum.div_duration_f64(*initial) {
                    *maximum
                } else {
                    initial.mul_f64(scaling)
                }
            }
        }
    }
}

/// The default behavior of a single method.
///
/// Both fields are optional: a method without retry settings is attempted
/// once, and a method without a timeout policy has no per-attempt deadline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodConfig {
    pub retry: Option<RetrySettings>,
    pub timeout: Option<TimeoutPolicy>,
}

impl MethodConfig {
    pub fn with_retry(mut self, v: RetrySettings) -> Self {
        self.retry = Some(v);
        self
    }

    pub fn with_timeout(mut self, v: TimeoutPolicy) -> Self {
        self.timeout = Some(v);
        self
    }
}

/// The registry of method defaults for one service interface.
#[derive(Clone, Debug, Default)]
pub struct MethodConfigs {
    methods: HashMap<String, Arc<MethodConfig>>,
    unknown: Arc<MethodConfig>,
}

impl MethodConfigs {
    /// Parses a JSON document and extracts the configuration of `interface`.
    pub fn from_json(source: &str, interface: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(Error::configuration)?;
        Self::from_value(value, interface)
    }

    /// Extracts the configuration of `interface` from a parsed document.
    pub fn from_value(source: serde_json::Value, interface: &str) -> Result<Self> {
        let mut document: Document = serde_json::from_value(source).map_err(Error::configuration)?;
        let config = document.interfaces.remove(interface).ok_or_else(|| {
            Error::configuration(format!(
                "the method configuration has no entry for {interface}"
            ))
        })?;
        config.resolve(interface)
    }

    /// Returns the defaults for `method`.
    ///
    /// Methods without an entry get no retry and no timeout.
    pub fn lookup(&self, method: &str) -> Arc<MethodConfig> {
        self.methods
            .get(method)
            .cloned()
            .unwrap_or_else(|| self.unknown.clone())
    }

    /// Adds or replaces the defaults for `method`.
    pub fn insert<K: Into<String>>(&mut self, method: K, config: MethodConfig) {
        self.methods.insert(method.into(), Arc::new(config));
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    interfaces: HashMap<String, InterfaceConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct InterfaceConfig {
    #[serde(default)]
    retry_codes: HashMap<String, Vec<String>>,
    #[serde(default)]
    retry_params: HashMap<String, RetryParams>,
    #[serde(default)]
    methods: HashMap<String, MethodEntry>,
}

#[derive(Debug, Deserialize)]
struct RetryParams {
    initial_retry_delay_millis: u64,
    retry_delay_multiplier: f64,
    max_retry_delay_millis: u64,
    initial_rpc_timeout_millis: u64,
    rpc_timeout_multiplier: f64,
    max_rpc_timeout_millis: u64,
    total_timeout_millis: u64,
    #[serde(default)]
    max_attempts: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MethodEntry {
    #[serde(default)]
    timeout_millis: Option<u64>,
    #[serde(default)]
    retry_codes_name: Option<String>,
    #[serde(default)]
    retry_params_name: Option<String>,
}

impl InterfaceConfig {
    fn resolve(self, interface: &str) -> Result<MethodConfigs> {
        let mut codes = HashMap::new();
        for (name, values) in self.retry_codes {
            let parsed = values
                .iter()
                .map(|v| Code::try_from(v.as_str()))
                .collect::<std::result::Result<HashSet<_>, _>>()
                .map_err(|e| {
                    Error::configuration(format!("in {interface} retry codes {name}: {e}"))
                })?;
            codes.insert(name, parsed);
        }

        let mut methods = HashMap::new();
        for (method, entry) in self.methods {
            let retry_codes = match &entry.retry_codes_name {
                None => HashSet::new(),
                Some(name) => codes.get(name).cloned().ok_or_else(|| {
                    Error::configuration(format!(
                        "method {interface}.{method} uses unknown retry codes {name}"
                    ))
                })?,
            };
            let params = match &entry.retry_params_name {
                None => None,
                Some(name) => Some(self.retry_params.get(name).ok_or_else(|| {
                    Error::configuration(format!(
                        "method {interface}.{method} uses unknown retry params {name}"
                    ))
                })?),
            };
            methods.insert(method, Arc::new(entry.to_config(retry_codes, params)));
        }
        Ok(MethodConfigs {
            methods,
            unknown: Arc::new(MethodConfig::default()),
        })
    }
}

impl MethodEntry {
    fn to_config(&self, codes: HashSet<Code>, params: Option<&RetryParams>) -> MethodConfig {
        let constant = self
            .timeout_millis
            .map(|t| TimeoutPolicy::Constant(Duration::from_millis(t)));
        let Some(params) = params else {
            let retry = (!codes.is_empty()).then(|| RetrySettings::new(codes));
            return MethodConfig {
                retry,
                timeout: constant,
            };
        };
        let timeout = Some(TimeoutPolicy::Exponential {
            initial: Duration::from_millis(params.initial_rpc_timeout_millis),
            multiplier: params.rpc_timeout_multiplier,
            maximum: Duration::from_millis(params.max_rpc_timeout_millis),
        });
        if codes.is_empty() {
            return MethodConfig {
                retry: None,
                timeout,
            };
        }
        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(params.initial_retry_delay_millis))
            .with_maximum_delay(Duration::from_millis(params.max_retry_delay_millis))
            .with_scaling(params.retry_delay_multiplier)
            .clamp();
        let mut retry = RetrySettings::new(codes)
            .with_backoff(backoff)
            .with_total_timeout(Duration::from_millis(params.total_timeout_millis));
        if let Some(n) = params.max_attempts {
            retry = retry.with_max_attempts(n);
        }
        MethodConfig {
            retry: Some(retry),
            timeout,
        }
    }
}
