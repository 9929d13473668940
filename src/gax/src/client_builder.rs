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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the authentication
//! credentials, the transport, or the default retry configuration of each
//! method. The generated clients use a generic builder type to provide such
//! functionality. The types in this module implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! All validation happens in [ClientBuilder::build], before any network
//! activity. Conflicting inputs (for example, credentials and a pre-built
//! transport instance) produce a configuration error.

use crate::api_header::ClientInfo;
use crate::credentials::Credentials;
use crate::transport::{Transport, TransportHint};
use crate::wrapper::WrapMethod;
use std::sync::Arc;

/// The result type for client construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```
/// # use container_gax::client_builder::Error;
/// let error = Error::configuration("credentials and transport instance are mutually exclusive");
/// assert!(error.is_configuration());
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The client configuration is invalid.
    ///
    /// Conflicting inputs, or a method configuration without an entry for the
    /// service interface. The client cannot be used.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// The transport could not be created.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Creates a new configuration error.
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }

    /// Creates a new transport initialization error.
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("invalid client configuration: {0}")]
    Configuration(#[source] BoxError),
    #[error("could not initialize transport client: {0}")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// `F` creates the client, `T` is the transport trait of the service.
pub struct ClientBuilder<F, T: ?Sized> {
    config: internal::ClientConfig<T>,
    factory: F,
}

impl<F, T: ?Sized> ClientBuilder<F, T> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Transport = T>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint used by the default transport.
    ///
    /// Ignored when the application supplies a transport instance.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client emits a span for each RPC, including the request and the
    /// response. This can also be enabled with the
    /// `GOOGLE_CLOUD_RUST_LOGGING=true` environment variable.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Sets the credentials used by the transport.
    ///
    /// Mutually exclusive with [with_transport][Self::with_transport].
    pub fn with_credentials<V: Into<Credentials>>(mut self, v: V) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Uses a pre-built transport instance.
    ///
    /// The instance is used as-is, it must already be authenticated.
    /// Mutually exclusive with [with_credentials][Self::with_credentials].
    pub fn with_transport(mut self, v: Arc<T>) -> Self {
        self.config.transport = Some(Transport::Direct(v));
        self
    }

    /// Uses a factory to create the transport.
    ///
    /// The factory receives the credentials (if any) and a hint describing
    /// the default transport, which it may use to build and decorate the
    /// default.
    pub fn with_transport_factory<Fn>(mut self, v: Fn) -> Self
    where
        Fn: std::ops::Fn(Option<Credentials>, TransportHint<T>) -> Result<Arc<T>>
            + Send
            + Sync
            + 'static,
    {
        self.config.transport = Some(Transport::Factory(Arc::new(v)));
        self
    }

    /// Overrides the method configuration.
    ///
    /// The value must use the client configuration format, with an entry for
    /// the service interface. Missing entries are reported by `build()`.
    pub fn with_method_config<V: Into<serde_json::Value>>(mut self, v: V) -> Self {
        self.config.method_config = Some(v.into());
        self
    }

    /// Sets the client identification metadata.
    pub fn with_client_info(mut self, v: ClientInfo) -> Self {
        self.config.client_info = Some(v);
        self
    }

    /// Replaces the factory used to wrap each method on first use.
    ///
    /// Mostly useful in tests that need to observe the call wrapper.
    pub fn with_method_wrapper<V: WrapMethod + 'static>(mut self, v: V) -> Self {
        self.config.method_wrapper = Some(Arc::new(v));
        self
    }
}

impl<F: std::fmt::Debug, T: ?Sized + std::fmt::Debug> std::fmt::Debug for ClientBuilder<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("factory", &self.factory)
            .finish()
    }
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details used by the generated clients.
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Transport: ?Sized;
        fn build(
            self,
            config: ClientConfig<Self::Transport>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, T, C>(factory: F) -> super::ClientBuilder<F, T>
    where
        T: ?Sized,
        F: ClientFactory<Client = C, Transport = T>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A common client configuration for all clients.
    pub struct ClientConfig<T: ?Sized> {
        pub endpoint: Option<String>,
        pub cred: Option<Credentials>,
        pub transport: Option<Transport<T>>,
        pub method_config: Option<serde_json::Value>,
        pub client_info: Option<ClientInfo>,
        pub method_wrapper: Option<Arc<dyn WrapMethod>>,
        pub tracing: bool,
    }

    const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

    impl<T: ?Sized> ClientConfig<T> {
        /// Returns true if tracing is enabled, in the builder or via the
        /// environment.
        pub fn tracing_enabled(&self) -> bool {
            if self.tracing {
                return true;
            }
            std::env::var(LOGGING_VAR)
                .map(|v| v == "true")
                .unwrap_or(false)
        }
    }

    impl<T: ?Sized> std::default::Default for ClientConfig<T> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                transport: None,
                method_config: None,
                client_info: None,
                method_wrapper: None,
                tracing: false,
            }
        }
    }

    impl<T: ?Sized + std::fmt::Debug> std::fmt::Debug for ClientConfig<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ClientConfig")
                .field("endpoint", &self.endpoint)
                .field("cred", &self.cred)
                .field("transport", &self.transport)
                .field("method_config", &self.method_config)
                .field("client_info", &self.client_info)
                .field("method_wrapper", &self.method_wrapper)
                .field("tracing", &self.tracing)
                .finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use scoped_env::ScopedEnv;
    use serde_json::json;

    #[derive(Debug)]
    struct FakeTransport;

    struct Client(ClientConfig<FakeTransport>);

    #[derive(Debug)]
    struct Factory;
    impl ClientFactory for Factory {
        type Client = Client;
        type Transport = FakeTransport;
        async fn build(self, config: ClientConfig<FakeTransport>) -> Result<Client> {
            Ok(Client(config))
        }
    }

    fn builder() -> ClientBuilder<Factory, FakeTransport> {
        new_builder(Factory)
    }

    #[tokio::test]
    async fn build_default() -> anyhow::Result<()> {
        let client = builder().build().await?;
        let config = client.0;
        assert_eq!(config.endpoint, None);
        assert!(config.cred.is_none(), "{config:?}");
        assert!(config.transport.is_none(), "{config:?}");
        assert!(config.method_config.is_none(), "{config:?}");
        assert!(config.client_info.is_none(), "{config:?}");
        assert!(config.method_wrapper.is_none(), "{config:?}");
        assert!(!config.tracing);
        Ok(())
    }

    #[tokio::test]
    async fn setters() -> anyhow::Result<()> {
        let client = builder()
            .with_endpoint("http://example.com")
            .with_tracing()
            .with_credentials(Credentials::anonymous())
            .with_method_config(json!({"interfaces": {}}))
            .with_client_info(ClientInfo::new("1.2.3"))
            .with_method_wrapper(crate::wrapper::DefaultWrapper)
            .build()
            .await?;
        let config = client.0;
        assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
        assert!(config.tracing);
        assert!(config.cred.is_some(), "{config:?}");
        assert_eq!(config.method_config, Some(json!({"interfaces": {}})));
        assert_eq!(config.client_info, Some(ClientInfo::new("1.2.3")));
        assert!(config.method_wrapper.is_some(), "{config:?}");
        Ok(())
    }

    #[tokio::test]
    async fn transport_instance() -> anyhow::Result<()> {
        let client = builder()
            .with_transport(Arc::new(FakeTransport))
            .build()
            .await?;
        assert!(
            matches!(client.0.transport, Some(Transport::Direct(_))),
            "{:?}",
            client.0
        );
        Ok(())
    }

    #[tokio::test]
    async fn transport_factory() -> anyhow::Result<()> {
        let client = builder()
            .with_transport_factory(|_cred, hint| hint.build_default(None))
            .build()
            .await?;
        assert!(
            matches!(client.0.transport, Some(Transport::Factory(_))),
            "{:?}",
            client.0
        );
        Ok(())
    }

    #[test]
    fn errors() {
        let e = Error::configuration("conflicting inputs");
        assert!(e.is_configuration(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
        assert!(e.to_string().contains("conflicting inputs"), "{e}");

        let e = Error::transport("cannot create pool");
        assert!(e.is_transport(), "{e:?}");
        assert!(!e.is_configuration(), "{e:?}");
        assert!(e.to_string().contains("cannot create pool"), "{e}");
    }

    #[test]
    #[serial_test::serial]
    fn tracing_enabled() {
        let config = ClientConfig::<FakeTransport>::default();
        let _e = ScopedEnv::remove("GOOGLE_CLOUD_RUST_LOGGING");
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
        let config = ClientConfig::<FakeTransport> {
            tracing: true,
            ..Default::default()
        };
        assert!(config.tracing_enabled(), "expected tracing to be enabled");
    }

    #[test]
    #[serial_test::serial]
    fn tracing_enabled_env() {
        let config = ClientConfig::<FakeTransport>::default();
        let _e = ScopedEnv::set("GOOGLE_CLOUD_RUST_LOGGING", "true");
        assert!(config.tracing_enabled(), "expected tracing to be enabled");
        let _e = ScopedEnv::set("GOOGLE_CLOUD_RUST_LOGGING", "not-true");
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
    }
}
