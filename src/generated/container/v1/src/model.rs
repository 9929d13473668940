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

//! The messages exchanged with the Kubernetes Engine API.
//!
//! All messages use the JSON representation of the service: field names in
//! `camelCase`, missing fields take their default value. Enumerations keep
//! unrecognized values in an `UnknownValue` variant so newer servers do not
//! break older clients.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

macro_rules! setters {
    ($type:ident {
        $($setter:ident => $field:ident: $ty:ty),* $(,)?
    } $(repeated {
        $($rsetter:ident => $rfield:ident: $rty:ty),* $(,)?
    })?) => {
        impl $type {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Sets the value of [", stringify!($field), "][", stringify!($type), "::", stringify!($field), "].")]
                pub fn $setter<T: Into<$ty>>(mut self, v: T) -> Self {
                    self.$field = v.into();
                    self
                }
            )*

            $($(
                #[doc = concat!("Sets the value of [", stringify!($rfield), "][", stringify!($type), "::", stringify!($rfield), "].")]
                pub fn $rsetter<T, V>(mut self, v: T) -> Self
                where
                    T: IntoIterator<Item = V>,
                    V: Into<$rty>,
                {
                    self.$rfield = v.into_iter().map(|i| i.into()).collect();
                    self
                }
            )*)?
        }
    };
}

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident {
        $(#[$fmeta:meta])* $first:ident = $first_value:literal,
        $($(#[$vmeta:meta])* $variant:ident = $value:literal),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $(#[$fmeta])*
            $first,
            $($(#[$vmeta])* $variant,)*
            /// A value not known to this version of the client library.
            UnknownValue(String),
        }

        impl $name {
            /// The name of the value, as used in the JSON representation.
            pub fn name(&self) -> &str {
                match self {
                    Self::$first => $first_value,
                    $(Self::$variant => $value,)*
                    Self::UnknownValue(v) => v.as_str(),
                }
            }
        }

        impl std::default::Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $first_value => Self::$first,
                    $($value => Self::$variant,)*
                    _ => Self::UnknownValue(value.to_string()),
                }
            }
        }

        impl std::convert::From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}

string_enum!(
    /// The current status of a cluster.
    ClusterStatus {
        Unspecified = "STATUS_UNSPECIFIED",
        /// The cluster is being created.
        Provisioning = "PROVISIONING",
        /// The cluster has been created and is fully usable.
        Running = "RUNNING",
        /// Some work is actively being done on the cluster.
        Reconciling = "RECONCILING",
        /// The cluster is being deleted.
        Stopping = "STOPPING",
        /// The cluster may be unusable, see `status_message`.
        Error = "ERROR",
    }
);

string_enum!(
    /// The current status of a node pool.
    NodePoolStatus {
        Unspecified = "STATUS_UNSPECIFIED",
        Provisioning = "PROVISIONING",
        Running = "RUNNING",
        /// Some nodes are unhealthy, see `status_message`.
        RunningWithError = "RUNNING_WITH_ERROR",
        Reconciling = "RECONCILING",
        Stopping = "STOPPING",
        Error = "ERROR",
    }
);

string_enum!(
    /// The current status of an operation.
    OperationStatus {
        Unspecified = "STATUS_UNSPECIFIED",
        /// Not yet started.
        Pending = "PENDING",
        /// In progress.
        Running = "RUNNING",
        /// Finished, successfully or not.
        Done = "DONE",
        /// Getting ready to be aborted.
        Aborting = "ABORTING",
    }
);

string_enum!(
    /// The kind of mutation an operation performs.
    OperationType {
        Unspecified = "TYPE_UNSPECIFIED",
        CreateCluster = "CREATE_CLUSTER",
        DeleteCluster = "DELETE_CLUSTER",
        UpgradeMaster = "UPGRADE_MASTER",
        UpgradeNodes = "UPGRADE_NODES",
        RepairCluster = "REPAIR_CLUSTER",
        UpdateCluster = "UPDATE_CLUSTER",
        CreateNodePool = "CREATE_NODE_POOL",
        DeleteNodePool = "DELETE_NODE_POOL",
        SetNodePoolManagement = "SET_NODE_POOL_MANAGEMENT",
        AutoRepairNodes = "AUTO_REPAIR_NODES",
        AutoUpgradeNodes = "AUTO_UPGRADE_NODES",
        SetLabels = "SET_LABELS",
        SetMasterAuth = "SET_MASTER_AUTH",
        SetNodePoolSize = "SET_NODE_POOL_SIZE",
        SetNetworkPolicy = "SET_NETWORK_POLICY",
        SetMaintenancePolicy = "SET_MAINTENANCE_POLICY",
    }
);

string_enum!(
    /// The change applied by [SetMasterAuthRequest].
    MasterAuthAction {
        Unknown = "UNKNOWN",
        /// Set the password to the given value.
        SetPassword = "SET_PASSWORD",
        /// Generate a new password and set it.
        GeneratePassword = "GENERATE_PASSWORD",
        /// Set the username. An empty username disables basic authentication.
        SetUsername = "SET_USERNAME",
    }
);

string_enum!(
    /// The network policy implementation.
    NetworkPolicyProvider {
        Unspecified = "PROVIDER_UNSPECIFIED",
        Calico = "CALICO",
    }
);

/// A Google Kubernetes Engine cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Cluster {
    /// The name of the cluster, unique within the project and location.
    pub name: String,
    pub description: String,
    /// The number of nodes in the default node pool.
    ///
    /// Mutually exclusive with `node_pools`.
    pub initial_node_count: i32,
    /// The configuration of the default node pool.
    pub node_config: Option<NodeConfig>,
    pub master_auth: Option<MasterAuth>,
    pub logging_service: String,
    pub monitoring_service: String,
    pub network: String,
    pub cluster_ipv4_cidr: String,
    pub addons_config: Option<AddonsConfig>,
    pub subnetwork: String,
    pub node_pools: Vec<NodePool>,
    /// The zones where the cluster nodes are located.
    pub locations: Vec<String>,
    pub enable_kubernetes_alpha: bool,
    pub resource_labels: HashMap<String, String>,
    pub label_fingerprint: String,
    pub legacy_abac: Option<LegacyAbac>,
    pub network_policy: Option<NetworkPolicy>,
    pub maintenance_policy: Option<MaintenancePolicy>,
    /// Output only.
    pub self_link: String,
    /// Output only. Deprecated, use `location`.
    pub zone: String,
    pub endpoint: String,
    pub initial_cluster_version: String,
    pub current_master_version: String,
    pub current_node_version: String,
    pub create_time: String,
    pub status: ClusterStatus,
    pub status_message: String,
    pub node_ipv4_cidr_size: i32,
    pub services_ipv4_cidr: String,
    pub current_node_count: i32,
    pub expire_time: String,
    pub location: String,
}

setters!(Cluster {
    set_name => name: String,
    set_description => description: String,
    set_initial_node_count => initial_node_count: i32,
    set_node_config => node_config: Option<NodeConfig>,
    set_master_auth => master_auth: Option<MasterAuth>,
    set_logging_service => logging_service: String,
    set_monitoring_service => monitoring_service: String,
    set_network => network: String,
    set_cluster_ipv4_cidr => cluster_ipv4_cidr: String,
    set_addons_config => addons_config: Option<AddonsConfig>,
    set_subnetwork => subnetwork: String,
    set_enable_kubernetes_alpha => enable_kubernetes_alpha: bool,
    set_resource_labels => resource_labels: HashMap<String, String>,
    set_legacy_abac => legacy_abac: Option<LegacyAbac>,
    set_network_policy => network_policy: Option<NetworkPolicy>,
    set_maintenance_policy => maintenance_policy: Option<MaintenancePolicy>,
    set_initial_cluster_version => initial_cluster_version: String,
    set_status => status: ClusterStatus,
    set_location => location: String,
} repeated {
    set_node_pools => node_pools: NodePool,
    set_locations => locations: String,
});

/// The parameters that describe the nodes of a cluster or node pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodeConfig {
    /// The Compute Engine machine type, for example `n1-standard-1`.
    pub machine_type: String,
    pub disk_size_gb: i32,
    pub oauth_scopes: Vec<String>,
    pub service_account: String,
    pub metadata: HashMap<String, String>,
    pub image_type: String,
    pub labels: HashMap<String, String>,
    pub local_ssd_count: i32,
    pub tags: Vec<String>,
    pub preemptible: bool,
    pub disk_type: String,
    pub min_cpu_platform: String,
}

setters!(NodeConfig {
    set_machine_type => machine_type: String,
    set_disk_size_gb => disk_size_gb: i32,
    set_service_account => service_account: String,
    set_metadata => metadata: HashMap<String, String>,
    set_image_type => image_type: String,
    set_labels => labels: HashMap<String, String>,
    set_local_ssd_count => local_ssd_count: i32,
    set_preemptible => preemptible: bool,
    set_disk_type => disk_type: String,
    set_min_cpu_platform => min_cpu_platform: String,
} repeated {
    set_oauth_scopes => oauth_scopes: String,
    set_tags => tags: String,
});

/// The authentication information for the Kubernetes master.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MasterAuth {
    pub username: String,
    pub password: String,
    pub client_certificate_config: Option<ClientCertificateConfig>,
    /// Output only.
    pub cluster_ca_certificate: String,
    /// Output only.
    pub client_certificate: String,
    /// Output only.
    pub client_key: String,
}

setters!(MasterAuth {
    set_username => username: String,
    set_password => password: String,
    set_client_certificate_config => client_certificate_config: Option<ClientCertificateConfig>,
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClientCertificateConfig {
    pub issue_client_certificate: bool,
}

setters!(ClientCertificateConfig {
    set_issue_client_certificate => issue_client_certificate: bool,
});

/// The configuration of the optional cluster add-ons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddonsConfig {
    pub http_load_balancing: Option<HttpLoadBalancing>,
    pub horizontal_pod_autoscaling: Option<HorizontalPodAutoscaling>,
    pub kubernetes_dashboard: Option<KubernetesDashboard>,
    pub network_policy_config: Option<NetworkPolicyConfig>,
}

setters!(AddonsConfig {
    set_http_load_balancing => http_load_balancing: Option<HttpLoadBalancing>,
    set_horizontal_pod_autoscaling => horizontal_pod_autoscaling: Option<HorizontalPodAutoscaling>,
    set_kubernetes_dashboard => kubernetes_dashboard: Option<KubernetesDashboard>,
    set_network_policy_config => network_policy_config: Option<NetworkPolicyConfig>,
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HttpLoadBalancing {
    pub disabled: bool,
}

setters!(HttpLoadBalancing { set_disabled => disabled: bool });

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HorizontalPodAutoscaling {
    pub disabled: bool,
}

setters!(HorizontalPodAutoscaling { set_disabled => disabled: bool });

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct KubernetesDashboard {
    pub disabled: bool,
}

setters!(KubernetesDashboard { set_disabled => disabled: bool });

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkPolicyConfig {
    pub disabled: bool,
}

setters!(NetworkPolicyConfig { set_disabled => disabled: bool });

/// Attribute-based access control, the legacy authorization mode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LegacyAbac {
    pub enabled: bool,
}

setters!(LegacyAbac { set_enabled => enabled: bool });

/// The network policy of a cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkPolicy {
    pub provider: NetworkPolicyProvider,
    pub enabled: bool,
}

setters!(NetworkPolicy {
    set_provider => provider: NetworkPolicyProvider,
    set_enabled => enabled: bool,
});

/// The maintenance policy of a cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MaintenancePolicy {
    pub window: Option<MaintenanceWindow>,
}

setters!(MaintenancePolicy {
    set_window => window: Option<MaintenanceWindow>,
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MaintenanceWindow {
    pub daily_maintenance_window: Option<DailyMaintenanceWindow>,
}

setters!(MaintenanceWindow {
    set_daily_maintenance_window => daily_maintenance_window: Option<DailyMaintenanceWindow>,
});

/// A daily maintenance window.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DailyMaintenanceWindow {
    /// The start time, in `HH:MM` format (GMT).
    pub start_time: String,
    /// Output only. The duration chosen by the service, in RFC3339 format.
    pub duration: String,
}

setters!(DailyMaintenanceWindow {
    set_start_time => start_time: String,
});

/// A group of nodes with the same configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodePool {
    pub name: String,
    pub config: Option<NodeConfig>,
    pub initial_node_count: i32,
    /// Output only.
    pub self_link: String,
    pub version: String,
    /// Output only.
    pub instance_group_urls: Vec<String>,
    pub status: NodePoolStatus,
    pub status_message: String,
    pub autoscaling: Option<NodePoolAutoscaling>,
    pub management: Option<NodeManagement>,
}

setters!(NodePool {
    set_name => name: String,
    set_config => config: Option<NodeConfig>,
    set_initial_node_count => initial_node_count: i32,
    set_version => version: String,
    set_status => status: NodePoolStatus,
    set_autoscaling => autoscaling: Option<NodePoolAutoscaling>,
    set_management => management: Option<NodeManagement>,
});

/// The autoscaler configuration of a node pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodePoolAutoscaling {
    pub enabled: bool,
    pub min_node_count: i32,
    pub max_node_count: i32,
}

setters!(NodePoolAutoscaling {
    set_enabled => enabled: bool,
    set_min_node_count => min_node_count: i32,
    set_max_node_count => max_node_count: i32,
});

/// The automatic repair and upgrade settings of a node pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodeManagement {
    pub auto_upgrade: bool,
    pub auto_repair: bool,
    pub upgrade_options: Option<AutoUpgradeOptions>,
}

setters!(NodeManagement {
    set_auto_upgrade => auto_upgrade: bool,
    set_auto_repair => auto_repair: bool,
    set_upgrade_options => upgrade_options: Option<AutoUpgradeOptions>,
});

/// Output only. Information about the next automatic upgrade.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AutoUpgradeOptions {
    pub auto_upgrade_start_time: String,
    pub description: String,
}

/// The changes applied by [UpdateClusterRequest].
///
/// Exactly one field should be set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClusterUpdate {
    pub desired_node_version: String,
    pub desired_monitoring_service: String,
    pub desired_addons_config: Option<AddonsConfig>,
    pub desired_node_pool_id: String,
    pub desired_image_type: String,
    pub desired_node_pool_autoscaling: Option<NodePoolAutoscaling>,
    pub desired_locations: Vec<String>,
    pub desired_master_version: String,
}

setters!(ClusterUpdate {
    set_desired_node_version => desired_node_version: String,
    set_desired_monitoring_service => desired_monitoring_service: String,
    set_desired_addons_config => desired_addons_config: Option<AddonsConfig>,
    set_desired_node_pool_id => desired_node_pool_id: String,
    set_desired_image_type => desired_image_type: String,
    set_desired_node_pool_autoscaling => desired_node_pool_autoscaling: Option<NodePoolAutoscaling>,
    set_desired_master_version => desired_master_version: String,
} repeated {
    set_desired_locations => desired_locations: String,
});

/// The handle of a long-running operation.
///
/// Most mutations return an operation. Use
/// [Poller][crate::lro::Poller] to wait until it is done.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned id of the operation.
    pub name: String,
    /// Deprecated, use `location`.
    pub zone: String,
    pub operation_type: OperationType,
    pub status: OperationStatus,
    pub detail: String,
    /// If an error has occurred, a textual description of the error.
    pub status_message: String,
    pub self_link: String,
    pub target_link: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
}

setters!(Operation {
    set_name => name: String,
    set_zone => zone: String,
    set_operation_type => operation_type: OperationType,
    set_status => status: OperationStatus,
    set_detail => detail: String,
    set_status_message => status_message: String,
    set_self_link => self_link: String,
    set_target_link => target_link: String,
    set_location => location: String,
});

/// The Kubernetes Engine configuration of a location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServerConfig {
    pub default_cluster_version: String,
    pub valid_node_versions: Vec<String>,
    pub default_image_type: String,
    pub valid_image_types: Vec<String>,
    pub valid_master_versions: Vec<String>,
}

setters!(ServerConfig {
    set_default_cluster_version => default_cluster_version: String,
    set_default_image_type => default_image_type: String,
} repeated {
    set_valid_node_versions => valid_node_versions: String,
    set_valid_image_types => valid_image_types: String,
    set_valid_master_versions => valid_master_versions: String,
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListClustersResponse {
    pub clusters: Vec<Cluster>,
    /// The zones that could not be reached while listing.
    pub missing_zones: Vec<String>,
}

setters!(ListClustersResponse {} repeated {
    set_clusters => clusters: Cluster,
    set_missing_zones => missing_zones: String,
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsResponse {
    pub operations: Vec<Operation>,
    pub missing_zones: Vec<String>,
}

setters!(ListOperationsResponse {} repeated {
    set_operations => operations: Operation,
    set_missing_zones => missing_zones: String,
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNodePoolsResponse {
    pub node_pools: Vec<NodePool>,
}

setters!(ListNodePoolsResponse {} repeated {
    set_node_pools => node_pools: NodePool,
});

// Every request carries either the hierarchical `name` (or `parent`), or the
// deprecated legacy identifier fields. The legacy fields are only serialized
// when set.

macro_rules! request {
    ($(#[$meta:meta])* $type:ident {
        $($(#[$fmeta:meta])* $field:ident: $ty:ty),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct $type {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }
    };
}

request!(
    /// Lists the clusters in a project and location.
    ListClustersRequest {
        /// Deprecated, use `parent`.
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        /// Deprecated, use `parent`. Use `-` to list clusters in all zones.
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        /// `projects/*/locations/*`, use `-` as the location to list all locations.
        #[serde(skip_serializing_if = "String::is_empty")]
        parent: String,
    }
);

request!(
    GetClusterRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        /// `projects/*/locations/*/clusters/*`.
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    CreateClusterRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        cluster: Option<Cluster>,
        /// `projects/*/locations/*`.
        #[serde(skip_serializing_if = "String::is_empty")]
        parent: String,
    }
);

request!(
    UpdateClusterRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        update: Option<ClusterUpdate>,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    UpdateNodePoolRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        node_pool_id: String,
        /// The Kubernetes version, or `-` for the master version.
        node_version: String,
        image_type: String,
        /// `projects/*/locations/*/clusters/*/nodePools/*`.
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetNodePoolAutoscalingRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        node_pool_id: String,
        autoscaling: Option<NodePoolAutoscaling>,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetLoggingServiceRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        /// `logging.googleapis.com`, or `none`.
        logging_service: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetMonitoringServiceRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        /// `monitoring.googleapis.com`, or `none`.
        monitoring_service: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetAddonsConfigRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        addons_config: Option<AddonsConfig>,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetLocationsRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        /// Must include the primary zone of the cluster.
        locations: Vec<String>,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    UpdateMasterRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        /// The Kubernetes version, or `-` for the default version.
        master_version: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetMasterAuthRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        action: MasterAuthAction,
        update: Option<MasterAuth>,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    DeleteClusterRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    ListOperationsRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        parent: String,
    }
);

request!(
    GetOperationRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        operation_id: String,
        /// `projects/*/locations/*/operations/*`.
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    CancelOperationRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        operation_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    GetServerConfigRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        /// `projects/*/locations/*`.
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    ListNodePoolsRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        /// `projects/*/locations/*/clusters/*`.
        #[serde(skip_serializing_if = "String::is_empty")]
        parent: String,
    }
);

request!(
    GetNodePoolRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        node_pool_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    CreateNodePoolRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        node_pool: Option<NodePool>,
        #[serde(skip_serializing_if = "String::is_empty")]
        parent: String,
    }
);

request!(
    DeleteNodePoolRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        node_pool_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    RollbackNodePoolUpgradeRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        node_pool_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetNodePoolManagementRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        node_pool_id: String,
        management: Option<NodeManagement>,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetLabelsRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        resource_labels: HashMap<String, String>,
        /// The fingerprint of the current labels, from a previous `get_cluster()`.
        label_fingerprint: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetLegacyAbacRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        enabled: bool,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    StartIpRotationRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
        /// Also rotate the credentials.
        rotate_credentials: bool,
    }
);

request!(
    CompleteIpRotationRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetNodePoolSizeRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        node_pool_id: String,
        node_count: i32,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetNetworkPolicyRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        network_policy: Option<NetworkPolicy>,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

request!(
    SetMaintenancePolicyRequest {
        #[serde(skip_serializing_if = "String::is_empty")]
        project_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        zone: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        cluster_id: String,
        maintenance_policy: Option<MaintenancePolicy>,
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enum_names() {
        assert_eq!(OperationStatus::Done.name(), "DONE");
        assert_eq!(OperationStatus::from("ABORTING"), OperationStatus::Aborting);
        assert_eq!(OperationStatus::default(), OperationStatus::Unspecified);
        assert_eq!(
            MasterAuthAction::from("SET_USERNAME"),
            MasterAuthAction::SetUsername
        );
        assert_eq!(ClusterStatus::Running.to_string(), "RUNNING");
    }

    #[test]
    fn enum_unknown_value() -> anyhow::Result<()> {
        let got = serde_json::from_value::<OperationStatus>(json!("PAUSED"))?;
        assert_eq!(got, OperationStatus::UnknownValue("PAUSED".to_string()));
        assert_eq!(serde_json::to_value(&got)?, json!("PAUSED"));
        Ok(())
    }

    #[test]
    fn operation_json() -> anyhow::Result<()> {
        let input = json!({
            "name": "operation-123",
            "zone": "us-central1-a",
            "operationType": "CREATE_CLUSTER",
            "status": "RUNNING",
            "selfLink": "https://container.googleapis.com/v1/projects/123/zones/us-central1-a/operations/operation-123",
            "targetLink": "https://container.googleapis.com/v1/projects/123/zones/us-central1-a/clusters/c1",
            "unknownField": 42,
        });
        let got = serde_json::from_value::<Operation>(input)?;
        let want = Operation::new()
            .set_name("operation-123")
            .set_zone("us-central1-a")
            .set_operation_type(OperationType::CreateCluster)
            .set_status(OperationStatus::Running)
            .set_self_link("https://container.googleapis.com/v1/projects/123/zones/us-central1-a/operations/operation-123")
            .set_target_link("https://container.googleapis.com/v1/projects/123/zones/us-central1-a/clusters/c1");
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn cluster_json() -> anyhow::Result<()> {
        let cluster = Cluster::new()
            .set_name("c1")
            .set_initial_node_count(3)
            .set_locations(["us-central1-a", "us-central1-b"])
            .set_node_config(NodeConfig::new().set_machine_type("n1-standard-1"));
        let got = serde_json::to_value(&cluster)?;
        assert_eq!(got["name"], json!("c1"));
        assert_eq!(got["initialNodeCount"], json!(3));
        assert_eq!(got["locations"], json!(["us-central1-a", "us-central1-b"]));
        assert_eq!(got["nodeConfig"]["machineType"], json!("n1-standard-1"));
        assert_eq!(got["status"], json!("STATUS_UNSPECIFIED"));
        Ok(())
    }

    #[test]
    fn request_omits_unset_identifiers() -> anyhow::Result<()> {
        let request = GetClusterRequest {
            name: "projects/p/locations/l/clusters/c".to_string(),
            ..Default::default()
        };
        let got = serde_json::to_value(&request)?;
        assert_eq!(got, json!({"name": "projects/p/locations/l/clusters/c"}));

        let request = SetNodePoolSizeRequest {
            project_id: "p".to_string(),
            zone: "z".to_string(),
            cluster_id: "c".to_string(),
            node_pool_id: "np".to_string(),
            node_count: 5,
            ..Default::default()
        };
        let got = serde_json::to_value(&request)?;
        assert_eq!(
            got,
            json!({
                "projectId": "p",
                "zone": "z",
                "clusterId": "c",
                "nodePoolId": "np",
                "nodeCount": 5,
            })
        );
        Ok(())
    }
}
