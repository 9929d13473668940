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

//! Request builders for the clients in this crate.
//!
//! Each RPC has its own builder. The builder holds the request and the
//! call-scoped options, the [RequestOptionsBuilder] trait adds the retry,
//! backoff, timeout and metadata overrides.
//!
//! [RequestOptionsBuilder]: gax::options::RequestOptionsBuilder

pub mod cluster_manager {
    use crate::Result;
    use crate::client::{Inner, Method};
    use crate::model;
    use crate::resource::{IdMismatch, Target};
    use gax::api_header::X_GOOG_REQUEST_PARAMS;
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::transport::AttemptContext;
    use std::sync::Arc;

    /// A builder for [ClusterManager][crate::client::ClusterManager].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_container_v1::*;
    /// # use builder::cluster_manager::ClientBuilder;
    /// # use client::ClusterManager;
    /// let builder: ClientBuilder = ClusterManager::builder();
    /// let client = builder
    ///     .with_endpoint("https://container.googleapis.com")
    ///     .build()
    ///     .await?;
    /// # Ok::<(), anyhow::Error>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, dyn crate::stub::ClusterManager>;

    pub(crate) mod client {
        use crate::client::ClusterManager;

        #[derive(Debug)]
        pub struct Factory;

        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ClusterManager;
            type Transport = dyn crate::stub::ClusterManager;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                ClusterManager::new(config)
            }
        }
    }

    /// Common implementation for [ClusterManager][crate::client::ClusterManager] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R> {
        inner: Arc<Inner>,
        request: R,
        options: RequestOptions,
        invalid: Option<IdMismatch>,
    }

    impl<R: Target> RequestBuilder<R> {
        pub(crate) fn new(inner: Arc<Inner>, request: R, invalid: Option<IdMismatch>) -> Self {
            Self {
                inner,
                request,
                options: RequestOptions::default(),
                invalid,
            }
        }

        /// Adds the routing header derived from the resource name.
        ///
        /// Fails if the resource id did not fit the request, before any attempt
        /// is made.
        fn prepare(self) -> Result<(Arc<Inner>, R, RequestOptions)> {
            let Self {
                inner,
                request,
                mut options,
                invalid,
            } = self;
            if let Some(e) = invalid {
                return Err(Error::invalid_argument(e));
            }
            if let Some(params) = request.routing() {
                options.insert_metadata(X_GOOG_REQUEST_PARAMS, params);
            }
            Ok((inner, request, options))
        }
    }

    /// The request builder for [ClusterManager::list_clusters][crate::client::ClusterManager::list_clusters] calls.
    #[derive(Clone, Debug)]
    pub struct ListClusters(RequestBuilder<model::ListClustersRequest>);

    impl ListClusters {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::ListClustersRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::ListClustersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ListClustersResponse> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::ListClusters)
                .call(
                    async |r: model::ListClustersRequest, c: AttemptContext| {
                        stub.list_clusters(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for ListClusters {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::get_cluster][crate::client::ClusterManager::get_cluster] calls.
    #[derive(Clone, Debug)]
    pub struct GetCluster(RequestBuilder<model::GetClusterRequest>);

    impl GetCluster {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::GetClusterRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::GetClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Cluster> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::GetCluster)
                .call(
                    async |r: model::GetClusterRequest, c: AttemptContext| {
                        stub.get_cluster(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for GetCluster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::create_cluster][crate::client::ClusterManager::create_cluster] calls.
    #[derive(Clone, Debug)]
    pub struct CreateCluster(RequestBuilder<model::CreateClusterRequest>);

    impl CreateCluster {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::CreateClusterRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::CreateClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::CreateCluster)
                .call(
                    async |r: model::CreateClusterRequest, c: AttemptContext| {
                        stub.create_cluster(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for CreateCluster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::update_cluster][crate::client::ClusterManager::update_cluster] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateCluster(RequestBuilder<model::UpdateClusterRequest>);

    impl UpdateCluster {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::UpdateClusterRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::UpdateClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::UpdateCluster)
                .call(
                    async |r: model::UpdateClusterRequest, c: AttemptContext| {
                        stub.update_cluster(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for UpdateCluster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::update_node_pool][crate::client::ClusterManager::update_node_pool] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateNodePool(RequestBuilder<model::UpdateNodePoolRequest>);

    impl UpdateNodePool {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::UpdateNodePoolRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::UpdateNodePoolRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sets the deprecated node pool id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_node_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.node_pool_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::UpdateNodePool)
                .call(
                    async |r: model::UpdateNodePoolRequest, c: AttemptContext| {
                        stub.update_node_pool(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for UpdateNodePool {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_node_pool_autoscaling][crate::client::ClusterManager::set_node_pool_autoscaling] calls.
    #[derive(Clone, Debug)]
    pub struct SetNodePoolAutoscaling(RequestBuilder<model::SetNodePoolAutoscalingRequest>);

    impl SetNodePoolAutoscaling {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetNodePoolAutoscalingRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetNodePoolAutoscalingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sets the deprecated node pool id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_node_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.node_pool_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetNodePoolAutoscaling)
                .call(
                    async |r: model::SetNodePoolAutoscalingRequest, c: AttemptContext| {
                        stub.set_node_pool_autoscaling(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetNodePoolAutoscaling {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_logging_service][crate::client::ClusterManager::set_logging_service] calls.
    #[derive(Clone, Debug)]
    pub struct SetLoggingService(RequestBuilder<model::SetLoggingServiceRequest>);

    impl SetLoggingService {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetLoggingServiceRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetLoggingServiceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetLoggingService)
                .call(
                    async |r: model::SetLoggingServiceRequest, c: AttemptContext| {
                        stub.set_logging_service(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetLoggingService {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_monitoring_service][crate::client::ClusterManager::set_monitoring_service] calls.
    #[derive(Clone, Debug)]
    pub struct SetMonitoringService(RequestBuilder<model::SetMonitoringServiceRequest>);

    impl SetMonitoringService {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetMonitoringServiceRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetMonitoringServiceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetMonitoringService)
                .call(
                    async |r: model::SetMonitoringServiceRequest, c: AttemptContext| {
                        stub.set_monitoring_service(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetMonitoringService {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_addons_config][crate::client::ClusterManager::set_addons_config] calls.
    #[derive(Clone, Debug)]
    pub struct SetAddonsConfig(RequestBuilder<model::SetAddonsConfigRequest>);

    impl SetAddonsConfig {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetAddonsConfigRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetAddonsConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetAddonsConfig)
                .call(
                    async |r: model::SetAddonsConfigRequest, c: AttemptContext| {
                        stub.set_addons_config(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetAddonsConfig {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_locations][crate::client::ClusterManager::set_locations] calls.
    #[derive(Clone, Debug)]
    pub struct SetLocations(RequestBuilder<model::SetLocationsRequest>);

    impl SetLocations {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetLocationsRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetLocationsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetLocations)
                .call(
                    async |r: model::SetLocationsRequest, c: AttemptContext| {
                        stub.set_locations(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetLocations {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::update_master][crate::client::ClusterManager::update_master] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateMaster(RequestBuilder<model::UpdateMasterRequest>);

    impl UpdateMaster {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::UpdateMasterRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::UpdateMasterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::UpdateMaster)
                .call(
                    async |r: model::UpdateMasterRequest, c: AttemptContext| {
                        stub.update_master(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for UpdateMaster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_master_auth][crate::client::ClusterManager::set_master_auth] calls.
    #[derive(Clone, Debug)]
    pub struct SetMasterAuth(RequestBuilder<model::SetMasterAuthRequest>);

    impl SetMasterAuth {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetMasterAuthRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetMasterAuthRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetMasterAuth)
                .call(
                    async |r: model::SetMasterAuthRequest, c: AttemptContext| {
                        stub.set_master_auth(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetMasterAuth {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::delete_cluster][crate::client::ClusterManager::delete_cluster] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteCluster(RequestBuilder<model::DeleteClusterRequest>);

    impl DeleteCluster {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::DeleteClusterRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::DeleteClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::DeleteCluster)
                .call(
                    async |r: model::DeleteClusterRequest, c: AttemptContext| {
                        stub.delete_cluster(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for DeleteCluster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::list_operations][crate::client::ClusterManager::list_operations] calls.
    #[derive(Clone, Debug)]
    pub struct ListOperations(RequestBuilder<model::ListOperationsRequest>);

    impl ListOperations {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::ListOperationsRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::ListOperationsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ListOperationsResponse> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::ListOperations)
                .call(
                    async |r: model::ListOperationsRequest, c: AttemptContext| {
                        stub.list_operations(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for ListOperations {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::get_operation][crate::client::ClusterManager::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::GetOperationRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::GetOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated operation id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_operation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.operation_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::GetOperation)
                .call(
                    async |r: model::GetOperationRequest, c: AttemptContext| {
                        stub.get_operation(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::cancel_operation][crate::client::ClusterManager::cancel_operation] calls.
    #[derive(Clone, Debug)]
    pub struct CancelOperation(RequestBuilder<model::CancelOperationRequest>);

    impl CancelOperation {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::CancelOperationRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::CancelOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated operation id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_operation_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.operation_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::CancelOperation)
                .call(
                    async |r: model::CancelOperationRequest, c: AttemptContext| {
                        stub.cancel_operation(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for CancelOperation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::get_server_config][crate::client::ClusterManager::get_server_config] calls.
    #[derive(Clone, Debug)]
    pub struct GetServerConfig(RequestBuilder<model::GetServerConfigRequest>);

    impl GetServerConfig {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::GetServerConfigRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::GetServerConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ServerConfig> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::GetServerConfig)
                .call(
                    async |r: model::GetServerConfigRequest, c: AttemptContext| {
                        stub.get_server_config(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for GetServerConfig {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::list_node_pools][crate::client::ClusterManager::list_node_pools] calls.
    #[derive(Clone, Debug)]
    pub struct ListNodePools(RequestBuilder<model::ListNodePoolsRequest>);

    impl ListNodePools {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::ListNodePoolsRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::ListNodePoolsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ListNodePoolsResponse> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::ListNodePools)
                .call(
                    async |r: model::ListNodePoolsRequest, c: AttemptContext| {
                        stub.list_node_pools(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for ListNodePools {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::get_node_pool][crate::client::ClusterManager::get_node_pool] calls.
    #[derive(Clone, Debug)]
    pub struct GetNodePool(RequestBuilder<model::GetNodePoolRequest>);

    impl GetNodePool {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::GetNodePoolRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::GetNodePoolRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sets the deprecated node pool id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_node_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.node_pool_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::NodePool> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::GetNodePool)
                .call(
                    async |r: model::GetNodePoolRequest, c: AttemptContext| {
                        stub.get_node_pool(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for GetNodePool {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::create_node_pool][crate::client::ClusterManager::create_node_pool] calls.
    #[derive(Clone, Debug)]
    pub struct CreateNodePool(RequestBuilder<model::CreateNodePoolRequest>);

    impl CreateNodePool {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::CreateNodePoolRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::CreateNodePoolRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::CreateNodePool)
                .call(
                    async |r: model::CreateNodePoolRequest, c: AttemptContext| {
                        stub.create_node_pool(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for CreateNodePool {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::delete_node_pool][crate::client::ClusterManager::delete_node_pool] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteNodePool(RequestBuilder<model::DeleteNodePoolRequest>);

    impl DeleteNodePool {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::DeleteNodePoolRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::DeleteNodePoolRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sets the deprecated node pool id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_node_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.node_pool_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::DeleteNodePool)
                .call(
                    async |r: model::DeleteNodePoolRequest, c: AttemptContext| {
                        stub.delete_node_pool(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for DeleteNodePool {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::rollback_node_pool_upgrade][crate::client::ClusterManager::rollback_node_pool_upgrade] calls.
    #[derive(Clone, Debug)]
    pub struct RollbackNodePoolUpgrade(RequestBuilder<model::RollbackNodePoolUpgradeRequest>);

    impl RollbackNodePoolUpgrade {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::RollbackNodePoolUpgradeRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::RollbackNodePoolUpgradeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sets the deprecated node pool id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_node_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.node_pool_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::RollbackNodePoolUpgrade)
                .call(
                    async |r: model::RollbackNodePoolUpgradeRequest, c: AttemptContext| {
                        stub.rollback_node_pool_upgrade(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for RollbackNodePoolUpgrade {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_node_pool_management][crate::client::ClusterManager::set_node_pool_management] calls.
    #[derive(Clone, Debug)]
    pub struct SetNodePoolManagement(RequestBuilder<model::SetNodePoolManagementRequest>);

    impl SetNodePoolManagement {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetNodePoolManagementRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetNodePoolManagementRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sets the deprecated node pool id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_node_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.node_pool_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetNodePoolManagement)
                .call(
                    async |r: model::SetNodePoolManagementRequest, c: AttemptContext| {
                        stub.set_node_pool_management(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetNodePoolManagement {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_labels][crate::client::ClusterManager::set_labels] calls.
    #[derive(Clone, Debug)]
    pub struct SetLabels(RequestBuilder<model::SetLabelsRequest>);

    impl SetLabels {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetLabelsRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetLabelsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetLabels)
                .call(
                    async |r: model::SetLabelsRequest, c: AttemptContext| {
                        stub.set_labels(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetLabels {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_legacy_abac][crate::client::ClusterManager::set_legacy_abac] calls.
    #[derive(Clone, Debug)]
    pub struct SetLegacyAbac(RequestBuilder<model::SetLegacyAbacRequest>);

    impl SetLegacyAbac {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetLegacyAbacRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetLegacyAbacRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetLegacyAbac)
                .call(
                    async |r: model::SetLegacyAbacRequest, c: AttemptContext| {
                        stub.set_legacy_abac(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetLegacyAbac {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::start_ip_rotation][crate::client::ClusterManager::start_ip_rotation] calls.
    #[derive(Clone, Debug)]
    pub struct StartIpRotation(RequestBuilder<model::StartIpRotationRequest>);

    impl StartIpRotation {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::StartIpRotationRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::StartIpRotationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Also rotates the cluster credentials.
        pub fn with_rotate_credentials<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.rotate_credentials = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::StartIpRotation)
                .call(
                    async |r: model::StartIpRotationRequest, c: AttemptContext| {
                        stub.start_ip_rotation(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for StartIpRotation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::complete_ip_rotation][crate::client::ClusterManager::complete_ip_rotation] calls.
    #[derive(Clone, Debug)]
    pub struct CompleteIpRotation(RequestBuilder<model::CompleteIpRotationRequest>);

    impl CompleteIpRotation {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::CompleteIpRotationRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::CompleteIpRotationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::CompleteIpRotation)
                .call(
                    async |r: model::CompleteIpRotationRequest, c: AttemptContext| {
                        stub.complete_ip_rotation(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for CompleteIpRotation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_node_pool_size][crate::client::ClusterManager::set_node_pool_size] calls.
    #[derive(Clone, Debug)]
    pub struct SetNodePoolSize(RequestBuilder<model::SetNodePoolSizeRequest>);

    impl SetNodePoolSize {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetNodePoolSizeRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetNodePoolSizeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sets the deprecated node pool id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_node_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.node_pool_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetNodePoolSize)
                .call(
                    async |r: model::SetNodePoolSizeRequest, c: AttemptContext| {
                        stub.set_node_pool_size(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetNodePoolSize {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_network_policy][crate::client::ClusterManager::set_network_policy] calls.
    #[derive(Clone, Debug)]
    pub struct SetNetworkPolicy(RequestBuilder<model::SetNetworkPolicyRequest>);

    impl SetNetworkPolicy {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetNetworkPolicyRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetNetworkPolicyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetNetworkPolicy)
                .call(
                    async |r: model::SetNetworkPolicyRequest, c: AttemptContext| {
                        stub.set_network_policy(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetNetworkPolicy {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterManager::set_maintenance_policy][crate::client::ClusterManager::set_maintenance_policy] calls.
    #[derive(Clone, Debug)]
    pub struct SetMaintenancePolicy(RequestBuilder<model::SetMaintenancePolicyRequest>);

    impl SetMaintenancePolicy {
        pub(crate) fn new(
            inner: Arc<Inner>,
            request: model::SetMaintenancePolicyRequest,
            invalid: Option<IdMismatch>,
        ) -> Self {
            Self(RequestBuilder::new(inner, request, invalid))
        }

        /// Replaces the full request.
        pub fn with_request<V: Into<model::SetMaintenancePolicyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.invalid = None;
            self
        }

        /// Sets the deprecated project id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the deprecated zone.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the deprecated cluster id.
        ///
        /// Prefer the hierarchical resource name. The service ignores this
        /// field when the request carries a name.
        #[deprecated(note = "identify the resource with its hierarchical name")]
        pub fn with_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Operation> {
            let (inner, request, options) = self.0.prepare()?;
            let stub = &inner.stub;
            inner
                .methods
                .get(Method::SetMaintenancePolicy)
                .call(
                    async |r: model::SetMaintenancePolicyRequest, c: AttemptContext| {
                        stub.set_maintenance_policy(r, c).await
                    },
                    request,
                    options,
                )
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for SetMaintenancePolicy {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
