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

//! Transport selection and the per-attempt context.
//!
//! A transport executes one attempt of an RPC. Clients either create their
//! default transport, receive a pre-built instance, or receive a factory
//! that creates one. Pre-built instances are used as-is: they must already
//! carry their own authentication, and supplying credentials as well is a
//! configuration error.

use crate::client_builder::{Error, Result};
use crate::credentials::Credentials;
use http::HeaderMap;
use std::sync::Arc;
use std::time::Duration;

/// The information a transport receives for each attempt.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct AttemptContext {
    /// The attempt number, starting at 1.
    pub attempt_count: u32,
    /// The deadline for this attempt, if any.
    pub timeout: Option<Duration>,
    /// The metadata to send with the request.
    pub headers: HeaderMap,
}

impl AttemptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attempt_count<T: Into<u32>>(mut self, v: T) -> Self {
        self.attempt_count = v.into();
        self
    }

    pub fn set_timeout<T: Into<Option<Duration>>>(mut self, v: T) -> Self {
        self.timeout = v.into();
        self
    }

    pub fn set_headers(mut self, v: HeaderMap) -> Self {
        self.headers = v;
        self
    }
}

/// Creates a transport from the (optional) credentials.
pub type TransportFactory<T> =
    Arc<dyn Fn(Option<Credentials>, TransportHint<T>) -> Result<Arc<T>> + Send + Sync>;

type DefaultTransport<T> = Arc<dyn Fn(&str, Option<Credentials>) -> Result<Arc<T>> + Send + Sync>;

/// How the client obtains its transport.
pub enum Transport<T: ?Sized> {
    /// A pre-built instance, used as-is.
    Direct(Arc<T>),
    /// A factory, invoked once when the client is built.
    Factory(TransportFactory<T>),
}

impl<T: ?Sized> Clone for Transport<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Direct(t) => Self::Direct(t.clone()),
            Self::Factory(f) => Self::Factory(f.clone()),
        }
    }
}

impl<T: ?Sized + std::fmt::Debug> std::fmt::Debug for Transport<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct(t) => f.debug_tuple("Direct").field(t).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Describes the default transport to a [TransportFactory].
///
/// Factories typically decorate the default transport, for example to add
/// logging. The hint lets them create it without knowing its type.
pub struct TransportHint<T: ?Sized> {
    endpoint: String,
    default: DefaultTransport<T>,
}

impl<T: ?Sized> TransportHint<T> {
    pub fn new<F>(endpoint: String, default: F) -> Self
    where
        F: Fn(&str, Option<Credentials>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self {
            endpoint,
            default: Arc::new(default),
        }
    }

    /// The endpoint configured for the client.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Creates the default transport for the configured endpoint.
    pub fn build_default(&self, credentials: Option<Credentials>) -> Result<Arc<T>> {
        (self.default)(&self.endpoint, credentials)
    }
}

impl<T: ?Sized> std::fmt::Debug for TransportHint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportHint")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Resolves the transport used by a client.
///
/// - No transport: build the default with the credentials.
/// - A pre-built instance: use it, credentials are rejected.
/// - A factory: call it with the credentials and the default hint.
pub fn select<T: ?Sized>(
    transport: Option<Transport<T>>,
    credentials: Option<Credentials>,
    hint: TransportHint<T>,
) -> Result<Arc<T>> {
    match (transport, credentials) {
        (Some(Transport::Direct(_)), Some(_)) => Err(Error::configuration(
            "credentials cannot be combined with a pre-built transport instance, \
             the instance must carry its own authentication",
        )),
        (Some(Transport::Direct(t)), None) => Ok(t),
        (Some(Transport::Factory(f)), credentials) => f(credentials, hint),
        (None, credentials) => hint.build_default(credentials),
    }
}
