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

//! The call wrapper shared by all RPCs.
//!
//! Each client keeps a [MethodCache]. The first call to a method binds the
//! method defaults (retry codes, backoff, per-attempt timeout) and the client
//! identification metadata into a [WrappedMethod]. Later calls reuse that
//! entry. A call then resolves its overrides against the defaults, and runs
//! the raw transport function once, or inside the retry loop.

use crate::Result;
use crate::api_header::ClientInfo;
use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::exponential_backoff::ExponentialBackoff;
use crate::method_config::{MethodConfig, MethodConfigs, TimeoutPolicy};
use crate::options::{Override, RequestOptions};
use crate::retry_loop_internal::{effective_timeout, retry_loop};
use crate::retry_policy::RetryPolicy;
use crate::transport::AttemptContext;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Identifies an RPC of a service.
///
/// Generated clients define an enum with one variant per RPC. The name must
/// match the method key in the method configuration.
pub trait MethodId: Copy + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static {
    fn name(&self) -> &'static str;
}

/// A method bound to its defaults.
#[derive(Debug)]
pub struct WrappedMethod {
    name: &'static str,
    config: Arc<MethodConfig>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    headers: HeaderMap,
}

impl WrappedMethod {
    pub fn new(name: &'static str, config: Arc<MethodConfig>, client_info: &ClientInfo) -> Self {
        let retry_policy = config.retry.as_ref().and_then(|r| r.retry_policy());
        let backoff_policy = config
            .retry
            .as_ref()
            .map(|r| r.backoff_policy())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()));
        let headers = client_info.headers().unwrap_or_else(|e| {
            tracing::warn!(method = name, error = %e, "ignoring invalid client info");
            HeaderMap::new()
        });
        Self {
            name,
            config,
            retry_policy,
            backoff_policy,
            headers,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The method defaults this wrapper was built from.
    pub fn config(&self) -> &Arc<MethodConfig> {
        &self.config
    }

    /// Runs one call.
    ///
    /// `raw` performs a single attempt. It receives a copy of the request
    /// and the attempt context for each attempt.
    pub async fn call<Req, Resp, F>(
        &self,
        raw: F,
        request: Req,
        options: RequestOptions,
    ) -> Result<Resp>
    where
        Req: Clone + Send + Sync,
        F: AsyncFn(Req, AttemptContext) -> Result<Resp> + Send + Sync,
    {
        let headers = self.headers(&options)?;
        let timeout = self.timeout(&options);
        let retry_policy = options
            .retry_policy()
            .resolve(self.retry_policy.as_ref())
            .cloned();
        let Some(retry_policy) = retry_policy else {
            let context = AttemptContext::new()
                .set_attempt_count(1_u32)
                .set_timeout(timeout.as_ref().map(|t| t.attempt_timeout(1)))
                .set_headers(headers);
            return attempt(context, request, &raw).await;
        };
        let backoff_policy = options
            .backoff_policy()
            .clone()
            .unwrap_or_else(|| self.backoff_policy.clone());
        let inner = async |attempt_count: u32, remaining: Option<Duration>| {
            let context = AttemptContext::new()
                .set_attempt_count(attempt_count)
                .set_timeout(effective_timeout(
                    timeout.as_ref().map(|t| t.attempt_timeout(attempt_count)),
                    remaining,
                ))
                .set_headers(headers.clone());
            attempt(context, request.clone(), &raw).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        retry_loop(inner, sleep, retry_policy, backoff_policy).await
    }

    fn timeout(&self, options: &RequestOptions) -> Option<TimeoutPolicy> {
        match options.attempt_timeout() {
            Override::Default => self.config.timeout.clone(),
            Override::Disabled => None,
            Override::Value(t) => Some(TimeoutPolicy::Constant(*t)),
        }
    }

    fn headers(&self, options: &RequestOptions) -> Result<HeaderMap> {
        let mut headers = self.headers.clone();
        for (key, value) in options.metadata() {
            let name = HeaderName::try_from(key.as_str()).map_err(Error::invalid_argument)?;
            let value = HeaderValue::try_from(value.as_str()).map_err(Error::invalid_argument)?;
            headers.append(name, value);
        }
        Ok(headers)
    }
}

async fn attempt<Req, Resp, F>(context: AttemptContext, request: Req, raw: &F) -> Result<Resp>
where
    F: AsyncFn(Req, AttemptContext) -> Result<Resp>,
{
    match context.timeout {
        None => raw(request, context).await,
        Some(t) => match tokio::time::timeout(t, raw(request, context)).await {
            Ok(r) => r,
            Err(e) => Err(Error::timeout(e)),
        },
    }
}

/// Creates the [WrappedMethod] for a method on first use.
pub trait WrapMethod: Send + Sync + std::fmt::Debug {
    fn wrap(
        &self,
        name: &'static str,
        config: Arc<MethodConfig>,
        client_info: &ClientInfo,
    ) -> WrappedMethod;
}

/// The default [WrapMethod] implementation.
#[derive(Clone, Debug, Default)]
pub struct DefaultWrapper;

impl WrapMethod for DefaultWrapper {
    fn wrap(
        &self,
        name: &'static str,
        config: Arc<MethodConfig>,
        client_info: &ClientInfo,
    ) -> WrappedMethod {
        WrappedMethod::new(name, config, client_info)
    }
}

/// The per-client cache of wrapped methods.
///
/// Each method is wrapped at most once, on its first call. Concurrent first
/// calls observe the same entry.
#[derive(Debug)]
pub struct MethodCache<K: MethodId> {
    configs: MethodConfigs,
    client_info: ClientInfo,
    wrapper: Arc<dyn WrapMethod>,
    entries: Mutex<HashMap<K, Arc<WrappedMethod>>>,
}

impl<K: MethodId> MethodCache<K> {
    pub fn new(configs: MethodConfigs, client_info: ClientInfo, wrapper: Arc<dyn WrapMethod>) -> Self {
        Self {
            configs,
            client_info,
            wrapper,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the wrapped method, creating it on first use.
    pub fn get(&self, method: K) -> Arc<WrappedMethod> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .entry(method)
            .or_insert_with(|| {
                tracing::debug!(method = method.name(), "wrapping method on first use");
                Arc::new(self.wrapper.wrap(
                    method.name(),
                    self.configs.lookup(method.name()),
                    &self.client_info,
                ))
            })
            .clone()
    }

    /// The number of methods wrapped so far.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn configs(&self) -> &MethodConfigs {
        &self.configs
    }
}
