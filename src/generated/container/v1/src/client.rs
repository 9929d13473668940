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

use crate::builder;
use crate::model;
use crate::resource::{ResourceId, Target};
use gax::api_header::ClientInfo;
use gax::client_builder::Error as BuilderError;
use gax::client_builder::internal::ClientConfig;
use gax::credentials::Credentials;
use gax::method_config::MethodConfigs;
use gax::path_template::expand;
use gax::transport::TransportHint;
use gax::wrapper::{DefaultWrapper, MethodCache, MethodId};
use std::sync::Arc;

/// The service interface name, as used in the method configuration.
pub(crate) const INTERFACE: &str = "google.container.v1.ClusterManager";
const DEFAULT_ENDPOINT: &str = "https://container.googleapis.com";
const DEFAULT_METHOD_CONFIG: &str = include_str!("config.json");

/// Implements a client for the Kubernetes Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_container_v1::client::ClusterManager;
/// let client = ClusterManager::builder().build().await?;
/// // use `client` to make requests to the Kubernetes Engine API.
/// # Ok::<(), anyhow::Error>(()) });
/// ```
///
/// # Service Description
///
/// Google Kubernetes Engine Cluster Manager v1. Creates, updates and deletes
/// clusters and their node pools, and tracks the long-running operations
/// that perform those changes.
///
/// Resources are named as follows:
///
/// - Locations: `projects/{project}/locations/{location}`
/// - Clusters: `projects/{project}/locations/{location}/clusters/{cluster}`
/// - Node pools: `projects/{project}/locations/{location}/clusters/{cluster}/nodePools/{node_pool}`
/// - Operations: `projects/{project}/locations/{location}/operations/{operation}`
///
/// Each RPC also accepts the deprecated project, zone, and resource id
/// fields, see [ResourceId].
///
/// # Configuration
///
/// To configure `ClusterManager` use the `with_*` methods in the type returned
/// by [builder()][ClusterManager::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://container.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default.
/// * [with_credentials()]: by default this client sends unauthenticated
///   requests. Most applications need to provide credentials.
/// * [with_method_config()]: replaces the default retry and timeout settings
///   of each RPC.
///
/// # Pooling and Cloning
///
/// `ClusterManager` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `ClusterManager` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
///
/// [with_endpoint()]: builder::cluster_manager::ClientBuilder::with_endpoint
/// [with_credentials()]: builder::cluster_manager::ClientBuilder::with_credentials
/// [with_method_config()]: builder::cluster_manager::ClientBuilder::with_method_config
#[derive(Clone, Debug)]
pub struct ClusterManager {
    inner: Arc<Inner>,
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) stub: Arc<dyn crate::stub::ClusterManager>,
    pub(crate) methods: MethodCache<Method>,
}

impl ClusterManager {
    /// Returns a builder for [ClusterManager].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_container_v1::client::ClusterManager;
    /// let client = ClusterManager::builder().build().await?;
    /// # Ok::<(), anyhow::Error>(()) });
    /// ```
    pub fn builder() -> builder::cluster_manager::ClientBuilder {
        gax::client_builder::internal::new_builder(builder::cluster_manager::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior. The client uses the default method configuration,
    /// the stub receives one call per attempt.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::ClusterManager + 'static,
    {
        let configs = MethodConfigs::from_json(DEFAULT_METHOD_CONFIG, INTERFACE).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring invalid default method configuration");
            MethodConfigs::default()
        });
        Self {
            inner: Arc::new(Inner {
                stub: Arc::new(stub),
                methods: MethodCache::new(configs, default_client_info(), Arc::new(DefaultWrapper)),
            }),
        }
    }

    pub(crate) fn new(
        config: ClientConfig<dyn crate::stub::ClusterManager>,
    ) -> gax::client_builder::Result<Self> {
        let tracing_enabled = config.tracing_enabled();
        let ClientConfig {
            endpoint,
            cred,
            transport,
            method_config,
            client_info,
            method_wrapper,
            ..
        } = config;
        let configs = match method_config {
            Some(v) => MethodConfigs::from_value(v, INTERFACE)?,
            None => MethodConfigs::from_json(DEFAULT_METHOD_CONFIG, INTERFACE)?,
        };
        let client_info = client_info.unwrap_or_else(default_client_info);
        client_info.headers().map_err(BuilderError::configuration)?;
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let hint = TransportHint::new(endpoint, |endpoint: &str, cred: Option<Credentials>| {
            let stub: Arc<dyn crate::stub::ClusterManager> =
                Arc::new(crate::transport::ClusterManager::new(endpoint, cred)?);
            Ok(stub)
        });
        let stub = gax::transport::select(transport, cred, hint)?;
        let stub: Arc<dyn crate::stub::ClusterManager> = if tracing_enabled {
            Arc::new(crate::tracing::ClusterManager::new(stub))
        } else {
            stub
        };
        let wrapper = method_wrapper.unwrap_or_else(|| Arc::new(DefaultWrapper));
        Ok(Self {
            inner: Arc::new(Inner {
                stub,
                methods: MethodCache::new(configs, client_info, wrapper),
            }),
        })
    }

    /// Formats a location resource name.
    ///
    /// ```
    /// # use google_cloud_container_v1::client::ClusterManager;
    /// let name = ClusterManager::location_path("my-project", "us-central1")?;
    /// assert_eq!(name, "projects/my-project/locations/us-central1");
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn location_path(project: &str, location: &str) -> crate::Result<String> {
        expand(
            "projects/{project}/locations/{location}",
            &[("project", project), ("location", location)],
        )
    }

    /// Formats a cluster resource name.
    pub fn cluster_path(project: &str, location: &str, cluster: &str) -> crate::Result<String> {
        expand(
            "projects/{project}/locations/{location}/clusters/{cluster}",
            &[("project", project), ("location", location), ("cluster", cluster)],
        )
    }

    /// Formats a node pool resource name.
    pub fn node_pool_path(
        project: &str,
        location: &str,
        cluster: &str,
        node_pool: &str,
    ) -> crate::Result<String> {
        expand(
            "projects/{project}/locations/{location}/clusters/{cluster}/nodePools/{node_pool}",
            &[
                ("project", project),
                ("location", location),
                ("cluster", cluster),
                ("node_pool", node_pool),
            ],
        )
    }

    /// Formats an operation resource name.
    pub fn operation_path(project: &str, location: &str, operation: &str) -> crate::Result<String> {
        expand(
            "projects/{project}/locations/{location}/operations/{operation}",
            &[
                ("project", project),
                ("location", location),
                ("operation", operation),
            ],
        )
    }

    /// Returns a poller that waits for `operation` to complete.
    pub fn poller(&self, operation: model::Operation) -> crate::lro::Poller {
        crate::lro::Poller::new(self.clone(), operation)
    }

    /// Lists the clusters in a location, or in all locations.
    ///
    /// Use `-` as the location (or zone) to list the clusters in all locations.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_container_v1::client::ClusterManager;
    /// # async fn sample(client: &ClusterManager) -> anyhow::Result<()> {
    /// let parent = ClusterManager::location_path("my-project", "-")?;
    /// let response = client.list_clusters(parent).send().await?;
    /// for cluster in response.clusters {
    ///     println!("{} {}", cluster.name, cluster.status);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list_clusters<P: Into<ResourceId>>(
        &self,
        parent: P,
    ) -> builder::cluster_manager::ListClusters {
        let mut request = model::ListClustersRequest::default();
        let invalid = request.apply(parent.into()).err();
        builder::cluster_manager::ListClusters::new(self.inner.clone(), request, invalid)
    }

    /// Gets the details of a cluster.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_container_v1::client::ClusterManager;
    /// # use google_cloud_container_v1::resource::ResourceId;
    /// # async fn sample(client: &ClusterManager) -> anyhow::Result<()> {
    /// let name = ClusterManager::cluster_path("my-project", "us-central1", "my-cluster")?;
    /// let cluster = client.get_cluster(name).send().await?;
    /// println!("{cluster:?}");
    ///
    /// // The deprecated identifiers are still supported.
    /// let id = ResourceId::from_legacy_triple("my-project", "us-central1-a", "my-cluster");
    /// let cluster = client.get_cluster(id).send().await?;
    /// println!("{cluster:?}");
    /// # Ok(()) }
    /// ```
    pub fn get_cluster<N: Into<ResourceId>>(&self, name: N) -> builder::cluster_manager::GetCluster {
        let mut request = model::GetClusterRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::GetCluster::new(self.inner.clone(), request, invalid)
    }

    /// Creates a cluster.
    ///
    /// The cluster has the node pools described in `cluster`, or a default node
    /// pool with `initial_node_count` nodes.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_container_v1::client::ClusterManager;
    /// # use google_cloud_container_v1::model::Cluster;
    /// # async fn sample(client: &ClusterManager) -> anyhow::Result<()> {
    /// let parent = ClusterManager::location_path("my-project", "us-central1")?;
    /// let cluster = Cluster::new().set_name("my-cluster").set_initial_node_count(3);
    /// let operation = client.create_cluster(parent, cluster).send().await?;
    /// let done = client.poller(operation).until_done().await?;
    /// println!("{done:?}");
    /// # Ok(()) }
    /// ```
    pub fn create_cluster<P, C>(
        &self,
        parent: P,
        cluster: C,
    ) -> builder::cluster_manager::CreateCluster
    where
        P: Into<ResourceId>,
        C: Into<model::Cluster>,
    {
        let mut request = model::CreateClusterRequest::default();
        let invalid = request.apply(parent.into()).err();
        request.cluster = Some(cluster.into());
        builder::cluster_manager::CreateCluster::new(self.inner.clone(), request, invalid)
    }

    /// Updates the settings of a cluster.
    pub fn update_cluster<N, U>(
        &self,
        name: N,
        update: U,
    ) -> builder::cluster_manager::UpdateCluster
    where
        N: Into<ResourceId>,
        U: Into<model::ClusterUpdate>,
    {
        let mut request = model::UpdateClusterRequest::default();
        let invalid = request.apply(name.into()).err();
        request.update = Some(update.into());
        builder::cluster_manager::UpdateCluster::new(self.inner.clone(), request, invalid)
    }

    /// Updates the Kubernetes version and image type of a node pool.
    pub fn update_node_pool<N, V, I>(
        &self,
        name: N,
        node_version: V,
        image_type: I,
    ) -> builder::cluster_manager::UpdateNodePool
    where
        N: Into<ResourceId>,
        V: Into<String>,
        I: Into<String>,
    {
        let mut request = model::UpdateNodePoolRequest::default();
        let invalid = request.apply(name.into()).err();
        request.node_version = node_version.into();
        request.image_type = image_type.into();
        builder::cluster_manager::UpdateNodePool::new(self.inner.clone(), request, invalid)
    }

    /// Sets the autoscaling settings of a node pool.
    pub fn set_node_pool_autoscaling<N, A>(
        &self,
        name: N,
        autoscaling: A,
    ) -> builder::cluster_manager::SetNodePoolAutoscaling
    where
        N: Into<ResourceId>,
        A: Into<model::NodePoolAutoscaling>,
    {
        let mut request = model::SetNodePoolAutoscalingRequest::default();
        let invalid = request.apply(name.into()).err();
        request.autoscaling = Some(autoscaling.into());
        builder::cluster_manager::SetNodePoolAutoscaling::new(self.inner.clone(), request, invalid)
    }

    /// Sets the logging service of a cluster.
    pub fn set_logging_service<N, V>(
        &self,
        name: N,
        logging_service: V,
    ) -> builder::cluster_manager::SetLoggingService
    where
        N: Into<ResourceId>,
        V: Into<String>,
    {
        let mut request = model::SetLoggingServiceRequest::default();
        let invalid = request.apply(name.into()).err();
        request.logging_service = logging_service.into();
        builder::cluster_manager::SetLoggingService::new(self.inner.clone(), request, invalid)
    }

    /// Sets the monitoring service of a cluster.
    pub fn set_monitoring_service<N, V>(
        &self,
        name: N,
        monitoring_service: V,
    ) -> builder::cluster_manager::SetMonitoringService
    where
        N: Into<ResourceId>,
        V: Into<String>,
    {
        let mut request = model::SetMonitoringServiceRequest::default();
        let invalid = request.apply(name.into()).err();
        request.monitoring_service = monitoring_service.into();
        builder::cluster_manager::SetMonitoringService::new(self.inner.clone(), request, invalid)
    }

    /// Sets the add-ons of a cluster.
    pub fn set_addons_config<N, A>(
        &self,
        name: N,
        addons_config: A,
    ) -> builder::cluster_manager::SetAddonsConfig
    where
        N: Into<ResourceId>,
        A: Into<model::AddonsConfig>,
    {
        let mut request = model::SetAddonsConfigRequest::default();
        let invalid = request.apply(name.into()).err();
        request.addons_config = Some(addons_config.into());
        builder::cluster_manager::SetAddonsConfig::new(self.inner.clone(), request, invalid)
    }

    /// Sets the zones where the nodes of a cluster run.
    pub fn set_locations<N, L, V>(
        &self,
        name: N,
        locations: L,
    ) -> builder::cluster_manager::SetLocations
    where
        N: Into<ResourceId>,
        L: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut request = model::SetLocationsRequest::default();
        let invalid = request.apply(name.into()).err();
        request.locations = locations.into_iter().map(|v| v.into()).collect();
        builder::cluster_manager::SetLocations::new(self.inner.clone(), request, invalid)
    }

    /// Updates the Kubernetes version of the cluster master.
    pub fn update_master<N, V>(
        &self,
        name: N,
        master_version: V,
    ) -> builder::cluster_manager::UpdateMaster
    where
        N: Into<ResourceId>,
        V: Into<String>,
    {
        let mut request = model::UpdateMasterRequest::default();
        let invalid = request.apply(name.into()).err();
        request.master_version = master_version.into();
        builder::cluster_manager::UpdateMaster::new(self.inner.clone(), request, invalid)
    }

    /// Changes the master authentication of a cluster.
    ///
    /// The `action` selects between setting the password, generating a new
    /// password, or setting the username.
    pub fn set_master_auth<N, A, U>(
        &self,
        name: N,
        action: A,
        update: U,
    ) -> builder::cluster_manager::SetMasterAuth
    where
        N: Into<ResourceId>,
        A: Into<model::MasterAuthAction>,
        U: Into<model::MasterAuth>,
    {
        let mut request = model::SetMasterAuthRequest::default();
        let invalid = request.apply(name.into()).err();
        request.action = action.into();
        request.update = Some(update.into());
        builder::cluster_manager::SetMasterAuth::new(self.inner.clone(), request, invalid)
    }

    /// Deletes a cluster, including its master and all its nodes.
    pub fn delete_cluster<N: Into<ResourceId>>(
        &self,
        name: N,
    ) -> builder::cluster_manager::DeleteCluster {
        let mut request = model::DeleteClusterRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::DeleteCluster::new(self.inner.clone(), request, invalid)
    }

    /// Lists the operations in a location, or in all locations.
    pub fn list_operations<P: Into<ResourceId>>(
        &self,
        parent: P,
    ) -> builder::cluster_manager::ListOperations {
        let mut request = model::ListOperationsRequest::default();
        let invalid = request.apply(parent.into()).err();
        builder::cluster_manager::ListOperations::new(self.inner.clone(), request, invalid)
    }

    /// Gets an operation.
    pub fn get_operation<N: Into<ResourceId>>(
        &self,
        name: N,
    ) -> builder::cluster_manager::GetOperation {
        let mut request = model::GetOperationRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::GetOperation::new(self.inner.clone(), request, invalid)
    }

    /// Cancels an operation.
    pub fn cancel_operation<N: Into<ResourceId>>(
        &self,
        name: N,
    ) -> builder::cluster_manager::CancelOperation {
        let mut request = model::CancelOperationRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::CancelOperation::new(self.inner.clone(), request, invalid)
    }

    /// Returns the Kubernetes Engine configuration of a location.
    pub fn get_server_config<N: Into<ResourceId>>(
        &self,
        name: N,
    ) -> builder::cluster_manager::GetServerConfig {
        let mut request = model::GetServerConfigRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::GetServerConfig::new(self.inner.clone(), request, invalid)
    }

    /// Lists the node pools of a cluster.
    pub fn list_node_pools<P: Into<ResourceId>>(
        &self,
        parent: P,
    ) -> builder::cluster_manager::ListNodePools {
        let mut request = model::ListNodePoolsRequest::default();
        let invalid = request.apply(parent.into()).err();
        builder::cluster_manager::ListNodePools::new(self.inner.clone(), request, invalid)
    }

    /// Gets a node pool.
    pub fn get_node_pool<N: Into<ResourceId>>(
        &self,
        name: N,
    ) -> builder::cluster_manager::GetNodePool {
        let mut request = model::GetNodePoolRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::GetNodePool::new(self.inner.clone(), request, invalid)
    }

    /// Creates a node pool in a cluster.
    pub fn create_node_pool<P, N>(
        &self,
        parent: P,
        node_pool: N,
    ) -> builder::cluster_manager::CreateNodePool
    where
        P: Into<ResourceId>,
        N: Into<model::NodePool>,
    {
        let mut request = model::CreateNodePoolRequest::default();
        let invalid = request.apply(parent.into()).err();
        request.node_pool = Some(node_pool.into());
        builder::cluster_manager::CreateNodePool::new(self.inner.clone(), request, invalid)
    }

    /// Deletes a node pool.
    pub fn delete_node_pool<N: Into<ResourceId>>(
        &self,
        name: N,
    ) -> builder::cluster_manager::DeleteNodePool {
        let mut request = model::DeleteNodePoolRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::DeleteNodePool::new(self.inner.clone(), request, invalid)
    }

    /// Rolls back an upgrade of a node pool that was aborted or failed.
    ///
    /// The nodes already upgraded revert to their previous version.
    pub fn rollback_node_pool_upgrade<N: Into<ResourceId>>(
        &self,
        name: N,
    ) -> builder::cluster_manager::RollbackNodePoolUpgrade {
        let mut request = model::RollbackNodePoolUpgradeRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::RollbackNodePoolUpgrade::new(self.inner.clone(), request, invalid)
    }

    /// Sets the automatic repair and upgrade settings of a node pool.
    pub fn set_node_pool_management<N, M>(
        &self,
        name: N,
        management: M,
    ) -> builder::cluster_manager::SetNodePoolManagement
    where
        N: Into<ResourceId>,
        M: Into<model::NodeManagement>,
    {
        let mut request = model::SetNodePoolManagementRequest::default();
        let invalid = request.apply(name.into()).err();
        request.management = Some(management.into());
        builder::cluster_manager::SetNodePoolManagement::new(self.inner.clone(), request, invalid)
    }

    /// Sets the resource labels of a cluster.
    ///
    /// The `label_fingerprint` must match the current labels, it is returned by
    /// [get_cluster()][ClusterManager::get_cluster].
    pub fn set_labels<N, L, K, V, F>(
        &self,
        name: N,
        resource_labels: L,
        label_fingerprint: F,
    ) -> builder::cluster_manager::SetLabels
    where
        N: Into<ResourceId>,
        L: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        F: Into<String>,
    {
        let mut request = model::SetLabelsRequest::default();
        let invalid = request.apply(name.into()).err();
        request.resource_labels = resource_labels
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        request.label_fingerprint = label_fingerprint.into();
        builder::cluster_manager::SetLabels::new(self.inner.clone(), request, invalid)
    }

    /// Enables or disables attribute-based access control on a cluster.
    pub fn set_legacy_abac<N: Into<ResourceId>>(
        &self,
        name: N,
        enabled: bool,
    ) -> builder::cluster_manager::SetLegacyAbac {
        let mut request = model::SetLegacyAbacRequest::default();
        let invalid = request.apply(name.into()).err();
        request.enabled = enabled;
        builder::cluster_manager::SetLegacyAbac::new(self.inner.clone(), request, invalid)
    }

    /// Starts the rotation of the master IP address.
    pub fn start_ip_rotation<N: Into<ResourceId>>(
        &self,
        name: N,
    ) -> builder::cluster_manager::StartIpRotation {
        let mut request = model::StartIpRotationRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::StartIpRotation::new(self.inner.clone(), request, invalid)
    }

    /// Completes the rotation of the master IP address.
    pub fn complete_ip_rotation<N: Into<ResourceId>>(
        &self,
        name: N,
    ) -> builder::cluster_manager::CompleteIpRotation {
        let mut request = model::CompleteIpRotationRequest::default();
        let invalid = request.apply(name.into()).err();
        builder::cluster_manager::CompleteIpRotation::new(self.inner.clone(), request, invalid)
    }

    /// Sets the number of nodes in a node pool.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_container_v1::client::ClusterManager;
    /// # async fn sample(client: &ClusterManager) -> anyhow::Result<()> {
    /// use google_cloud_container_v1::options::RequestOptionsBuilder;
    /// use std::time::Duration;
    /// let name = ClusterManager::node_pool_path("my-project", "us-central1", "my-cluster", "default-pool")?;
    /// let operation = client
    ///     .set_node_pool_size(name, 5)
    ///     .with_attempt_timeout(Duration::from_secs(30))
    ///     .with_metadata("x-goog-user-project", "my-billing-project")
    ///     .send()
    ///     .await?;
    /// println!("{operation:?}");
    /// # Ok(()) }
    /// ```
    pub fn set_node_pool_size<N: Into<ResourceId>>(
        &self,
        name: N,
        node_count: i32,
    ) -> builder::cluster_manager::SetNodePoolSize {
        let mut request = model::SetNodePoolSizeRequest::default();
        let invalid = request.apply(name.into()).err();
        request.node_count = node_count;
        builder::cluster_manager::SetNodePoolSize::new(self.inner.clone(), request, invalid)
    }

    /// Enables or disables the network policy of a cluster.
    pub fn set_network_policy<N, P>(
        &self,
        name: N,
        network_policy: P,
    ) -> builder::cluster_manager::SetNetworkPolicy
    where
        N: Into<ResourceId>,
        P: Into<model::NetworkPolicy>,
    {
        let mut request = model::SetNetworkPolicyRequest::default();
        let invalid = request.apply(name.into()).err();
        request.network_policy = Some(network_policy.into());
        builder::cluster_manager::SetNetworkPolicy::new(self.inner.clone(), request, invalid)
    }

    /// Sets the maintenance policy of a cluster.
    pub fn set_maintenance_policy<N, P>(
        &self,
        name: N,
        maintenance_policy: P,
    ) -> builder::cluster_manager::SetMaintenancePolicy
    where
        N: Into<ResourceId>,
        P: Into<model::MaintenancePolicy>,
    {
        let mut request = model::SetMaintenancePolicyRequest::default();
        let invalid = request.apply(name.into()).err();
        request.maintenance_policy = Some(maintenance_policy.into());
        builder::cluster_manager::SetMaintenancePolicy::new(self.inner.clone(), request, invalid)
    }
}

fn default_client_info() -> ClientInfo {
    ClientInfo::new(env!("CARGO_PKG_VERSION"))
}

/// The RPCs of the service, keys into the method configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Method {
    ListClusters,
    GetCluster,
    CreateCluster,
    UpdateCluster,
    UpdateNodePool,
    SetNodePoolAutoscaling,
    SetLoggingService,
    SetMonitoringService,
    SetAddonsConfig,
    SetLocations,
    UpdateMaster,
    SetMasterAuth,
    DeleteCluster,
    ListOperations,
    GetOperation,
    CancelOperation,
    GetServerConfig,
    ListNodePools,
    GetNodePool,
    CreateNodePool,
    DeleteNodePool,
    RollbackNodePoolUpgrade,
    SetNodePoolManagement,
    SetLabels,
    SetLegacyAbac,
    StartIpRotation,
    CompleteIpRotation,
    SetNodePoolSize,
    SetNetworkPolicy,
    SetMaintenancePolicy,
}

impl MethodId for Method {
    fn name(&self) -> &'static str {
        match self {
            Self::ListClusters => "ListClusters",
            Self::GetCluster => "GetCluster",
            Self::CreateCluster => "CreateCluster",
            Self::UpdateCluster => "UpdateCluster",
            Self::UpdateNodePool => "UpdateNodePool",
            Self::SetNodePoolAutoscaling => "SetNodePoolAutoscaling",
            Self::SetLoggingService => "SetLoggingService",
            Self::SetMonitoringService => "SetMonitoringService",
            Self::SetAddonsConfig => "SetAddonsConfig",
            Self::SetLocations => "SetLocations",
            Self::UpdateMaster => "UpdateMaster",
            Self::SetMasterAuth => "SetMasterAuth",
            Self::DeleteCluster => "DeleteCluster",
            Self::ListOperations => "ListOperations",
            Self::GetOperation => "GetOperation",
            Self::CancelOperation => "CancelOperation",
            Self::GetServerConfig => "GetServerConfig",
            Self::ListNodePools => "ListNodePools",
            Self::GetNodePool => "GetNodePool",
            Self::CreateNodePool => "CreateNodePool",
            Self::DeleteNodePool => "DeleteNodePool",
            Self::RollbackNodePoolUpgrade => "RollbackNodePoolUpgrade",
            Self::SetNodePoolManagement => "SetNodePoolManagement",
            Self::SetLabels => "SetLabels",
            Self::SetLegacyAbac => "SetLegacyAbac",
            Self::StartIpRotation => "StartIPRotation",
            Self::CompleteIpRotation => "CompleteIPRotation",
            Self::SetNodePoolSize => "SetNodePoolSize",
            Self::SetNetworkPolicy => "SetNetworkPolicy",
            Self::SetMaintenancePolicy => "SetMaintenancePolicy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::method_config::TimeoutPolicy;
    use std::time::Duration;
    use test_case::test_case;

    #[test]
    fn paths() -> anyhow::Result<()> {
        assert_eq!(
            ClusterManager::cluster_path("p", "l", "c")?,
            "projects/p/locations/l/clusters/c"
        );
        assert_eq!(
            ClusterManager::node_pool_path("p", "l", "c", "np")?,
            "projects/p/locations/l/clusters/c/nodePools/np"
        );
        assert_eq!(
            ClusterManager::operation_path("p", "l", "op")?,
            "projects/p/locations/l/operations/op"
        );
        Ok(())
    }

    #[test]
    fn path_missing_value() {
        let err = ClusterManager::cluster_path("p", "", "c").unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
    }

    #[test]
    fn default_method_config() -> anyhow::Result<()> {
        let configs = MethodConfigs::from_json(DEFAULT_METHOD_CONFIG, INTERFACE)?;
        assert_eq!(configs.len(), 30);
        Ok(())
    }

    #[test_case(Method::GetCluster, true)]
    #[test_case(Method::ListOperations, true)]
    #[test_case(Method::DeleteNodePool, true)]
    #[test_case(Method::CreateCluster, false)]
    #[test_case(Method::StartIpRotation, false)]
    #[test_case(Method::SetNodePoolSize, false)]
    fn default_retry(method: Method, idempotent: bool) -> anyhow::Result<()> {
        let configs = MethodConfigs::from_json(DEFAULT_METHOD_CONFIG, INTERFACE)?;
        let config = configs.lookup(method.name());
        assert_eq!(config.retry.is_some(), idempotent, "{config:?}");
        let timeout = config.timeout.as_ref().map(|t| t.attempt_timeout(1));
        assert_eq!(timeout, Some(Duration::from_secs(20)));
        assert!(
            matches!(config.timeout, Some(TimeoutPolicy::Exponential { .. })),
            "{config:?}"
        );
        Ok(())
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::StartIpRotation.name(), "StartIPRotation");
        assert_eq!(Method::CompleteIpRotation.name(), "CompleteIPRotation");
        assert_eq!(Method::ListClusters.name(), "ListClusters");
    }
}
