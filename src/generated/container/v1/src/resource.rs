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

//! Identify the resource targeted by a request.
//!
//! The service accepts two equivalent ways to name a resource. The
//! hierarchical name, for example `projects/p/locations/l/clusters/c`, and
//! the deprecated legacy identifiers: a project id, a zone, and the id of the
//! cluster (or operation) and node pool. [ResourceId] makes the caller pick
//! one of them.
//!
//! When a request carries both, the service uses the hierarchical name. The
//! client does not reconcile the two.

use crate::model;
use gax::api_header::request_params;

/// The resource targeted by a request.
///
/// # Example
/// ```
/// # use google_cloud_container_v1::resource::ResourceId;
/// let id = ResourceId::from_hierarchical_name("projects/p/locations/us-central1/clusters/c");
/// let legacy = ResourceId::from_legacy_triple("p", "us-central1-a", "c");
/// assert_ne!(id, legacy);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResourceId {
    /// A hierarchical resource name, or a parent for list and create requests.
    Name(String),
    /// The deprecated project, zone, and resource id fields.
    Legacy(LegacyId),
}

impl ResourceId {
    /// Identifies the resource by its hierarchical name.
    pub fn from_hierarchical_name<V: Into<String>>(name: V) -> Self {
        Self::Name(name.into())
    }

    /// Identifies a cluster (or operation) by its legacy identifiers.
    pub fn from_legacy_triple<P, Z, I>(project_id: P, zone: Z, id: I) -> Self
    where
        P: Into<String>,
        Z: Into<String>,
        I: Into<String>,
    {
        Self::Legacy(LegacyId {
            project_id: project_id.into(),
            zone: zone.into(),
            id: Some(id.into()),
            node_pool_id: None,
        })
    }

    /// Identifies a zone, as the parent of clusters and operations.
    ///
    /// Use `-` as the zone to target all zones.
    pub fn from_legacy_zone<P, Z>(project_id: P, zone: Z) -> Self
    where
        P: Into<String>,
        Z: Into<String>,
    {
        Self::Legacy(LegacyId {
            project_id: project_id.into(),
            zone: zone.into(),
            id: None,
            node_pool_id: None,
        })
    }

    /// Identifies a node pool by its legacy identifiers.
    pub fn from_legacy_node_pool<P, Z, C, N>(
        project_id: P,
        zone: Z,
        cluster_id: C,
        node_pool_id: N,
    ) -> Self
    where
        P: Into<String>,
        Z: Into<String>,
        C: Into<String>,
        N: Into<String>,
    {
        Self::Legacy(LegacyId {
            project_id: project_id.into(),
            zone: zone.into(),
            id: Some(cluster_id.into()),
            node_pool_id: Some(node_pool_id.into()),
        })
    }
}

impl std::convert::From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::from_hierarchical_name(value)
    }
}

impl std::convert::From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self::from_hierarchical_name(value)
    }
}

impl std::convert::From<LegacyId> for ResourceId {
    fn from(value: LegacyId) -> Self {
        Self::Legacy(value)
    }
}

/// The deprecated identifier fields of a request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyId {
    project_id: String,
    zone: String,
    id: Option<String>,
    node_pool_id: Option<String>,
}

impl LegacyId {
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// The cluster id, or the operation id for operation requests.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn node_pool_id(&self) -> Option<&str> {
        self.node_pool_id.as_deref()
    }

    fn into_parts(self) -> impl Iterator<Item = String> {
        [Some(self.project_id), Some(self.zone), self.id, self.node_pool_id]
            .into_iter()
            .flatten()
    }
}

/// A legacy identifier that does not match the fields of a request.
///
/// For example, a node pool id sent to a cluster-level method, or a zone-only
/// id sent to a method that needs a cluster id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct IdMismatch {
    request: &'static str,
    fields: &'static [&'static str],
    got: usize,
}

impl std::fmt::Display for IdMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} needs {} legacy identifiers ({}), got {}",
            self.request,
            self.fields.len(),
            self.fields.join(", "),
            self.got
        )
    }
}

impl std::error::Error for IdMismatch {}

/// Requests that target a resource.
pub(crate) trait Target {
    /// Stores the identifier in the request fields.
    ///
    /// A legacy identifier must provide exactly the legacy fields of the
    /// request. Otherwise the request is left unchanged.
    fn apply(&mut self, id: ResourceId) -> Result<(), IdMismatch>;

    /// The value of the `x-goog-request-params` header.
    fn routing(&self) -> Option<String>;
}

macro_rules! target {
    ($type:ident, $field:ident, [$($legacy:ident),+]) => {
        impl Target for model::$type {
            fn apply(&mut self, id: ResourceId) -> Result<(), IdMismatch> {
                const FIELDS: &[&str] = &[$(stringify!($legacy)),+];
                match id {
                    ResourceId::Name(v) => self.$field = v,
                    ResourceId::Legacy(v) => {
                        let parts = v.into_parts().collect::<Vec<_>>();
                        if parts.len() != FIELDS.len() {
                            return Err(IdMismatch {
                                request: stringify!($type),
                                fields: FIELDS,
                                got: parts.len(),
                            });
                        }
                        let mut parts = parts.into_iter();
                        $(
                            self.$legacy = parts.next().unwrap_or_default();
                        )+
                    }
                }
                Ok(())
            }

            fn routing(&self) -> Option<String> {
                if !self.$field.is_empty() {
                    return request_params(&[(stringify!($field), self.$field.as_str())]);
                }
                request_params(&[$((stringify!($legacy), self.$legacy.as_str())),+])
            }
        }
    };
}

target!(ListClustersRequest, parent, [project_id, zone]);
target!(GetClusterRequest, name, [project_id, zone, cluster_id]);
target!(CreateClusterRequest, parent, [project_id, zone]);
target!(UpdateClusterRequest, name, [project_id, zone, cluster_id]);
target!(UpdateNodePoolRequest, name, [project_id, zone, cluster_id, node_pool_id]);
target!(SetNodePoolAutoscalingRequest, name, [project_id, zone, cluster_id, node_pool_id]);
target!(SetLoggingServiceRequest, name, [project_id, zone, cluster_id]);
target!(SetMonitoringServiceRequest, name, [project_id, zone, cluster_id]);
target!(SetAddonsConfigRequest, name, [project_id, zone, cluster_id]);
target!(SetLocationsRequest, name, [project_id, zone, cluster_id]);
target!(UpdateMasterRequest, name, [project_id, zone, cluster_id]);
target!(SetMasterAuthRequest, name, [project_id, zone, cluster_id]);
target!(DeleteClusterRequest, name, [project_id, zone, cluster_id]);
target!(ListOperationsRequest, parent, [project_id, zone]);
target!(GetOperationRequest, name, [project_id, zone, operation_id]);
target!(CancelOperationRequest, name, [project_id, zone, operation_id]);
target!(GetServerConfigRequest, name, [project_id, zone]);
target!(ListNodePoolsRequest, parent, [project_id, zone, cluster_id]);
target!(GetNodePoolRequest, name, [project_id, zone, cluster_id, node_pool_id]);
target!(CreateNodePoolRequest, parent, [project_id, zone, cluster_id]);
target!(DeleteNodePoolRequest, name, [project_id, zone, cluster_id, node_pool_id]);
target!(RollbackNodePoolUpgradeRequest, name, [project_id, zone, cluster_id, node_pool_id]);
target!(SetNodePoolManagementRequest, name, [project_id, zone, cluster_id, node_pool_id]);
target!(SetLabelsRequest, name, [project_id, zone, cluster_id]);
target!(SetLegacyAbacRequest, name, [project_id, zone, cluster_id]);
target!(StartIpRotationRequest, name, [project_id, zone, cluster_id]);
target!(CompleteIpRotationRequest, name, [project_id, zone, cluster_id]);
target!(SetNodePoolSizeRequest, name, [project_id, zone, cluster_id, node_pool_id]);
target!(SetNetworkPolicyRequest, name, [project_id, zone, cluster_id]);
target!(SetMaintenancePolicyRequest, name, [project_id, zone, cluster_id]);

#[cfg(test)]
mod tests {
    use super::*;
    use model::*;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn hierarchical() -> TestResult {
        let mut request = GetClusterRequest::default();
        request.apply("projects/p/locations/l/clusters/c".into())?;
        assert_eq!(request.name, "projects/p/locations/l/clusters/c");
        assert!(request.project_id.is_empty(), "{request:?}");
        assert_eq!(
            request.routing().as_deref(),
            Some("name=projects%2Fp%2Flocations%2Fl%2Fclusters%2Fc")
        );
        Ok(())
    }

    #[test]
    fn legacy_triple() -> TestResult {
        let mut request = DeleteClusterRequest::default();
        request.apply(ResourceId::from_legacy_triple("p", "us-central1-a", "c"))?;
        assert!(request.name.is_empty(), "{request:?}");
        assert_eq!(request.project_id, "p");
        assert_eq!(request.zone, "us-central1-a");
        assert_eq!(request.cluster_id, "c");
        assert_eq!(
            request.routing().as_deref(),
            Some("project_id=p&zone=us-central1-a&cluster_id=c")
        );
        Ok(())
    }

    #[test]
    fn legacy_operation() -> TestResult {
        let mut request = GetOperationRequest::default();
        request.apply(ResourceId::from_legacy_triple("p", "z", "operation-1"))?;
        assert_eq!(request.operation_id, "operation-1");
        Ok(())
    }

    #[test]
    fn legacy_node_pool() -> TestResult {
        let mut request = SetNodePoolSizeRequest::default();
        request.apply(ResourceId::from_legacy_node_pool("p", "z", "c", "np"))?;
        assert_eq!(
            (
                request.project_id.as_str(),
                request.zone.as_str(),
                request.cluster_id.as_str(),
                request.node_pool_id.as_str()
            ),
            ("p", "z", "c", "np")
        );
        Ok(())
    }

    #[test]
    fn legacy_zone() -> TestResult {
        let mut request = ListClustersRequest::default();
        request.apply(ResourceId::from_legacy_zone("p", "-"))?;
        assert_eq!(request.project_id, "p");
        assert_eq!(request.zone, "-");
        assert!(request.parent.is_empty(), "{request:?}");
        Ok(())
    }

    #[test]
    fn legacy_too_many_parts() {
        let mut request = ListOperationsRequest::default();
        let err = request
            .apply(ResourceId::from_legacy_triple("p", "z", "unused"))
            .unwrap_err();
        assert_eq!(
            err,
            IdMismatch {
                request: "ListOperationsRequest",
                fields: &["project_id", "zone"],
                got: 3
            }
        );
        assert!(request.project_id.is_empty(), "{request:?}");
        assert!(request.zone.is_empty(), "{request:?}");
    }

    #[test]
    fn legacy_node_pool_on_cluster_request() {
        let mut request = GetClusterRequest::default();
        let err = request
            .apply(ResourceId::from_legacy_node_pool("p", "z", "c", "np"))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("GetClusterRequest"), "{msg}");
        assert!(msg.contains("project_id, zone, cluster_id"), "{msg}");
        assert!(request.cluster_id.is_empty(), "{request:?}");
    }

    #[test]
    fn legacy_too_few_parts() {
        let mut request = GetClusterRequest::default();
        let err = request
            .apply(ResourceId::from_legacy_zone("p", "z"))
            .unwrap_err();
        assert_eq!(err.got, 2);
        assert!(request.project_id.is_empty(), "{request:?}");

        let mut request = SetNodePoolSizeRequest::default();
        let err = request
            .apply(ResourceId::from_legacy_triple("p", "z", "c"))
            .unwrap_err();
        assert_eq!(err.got, 3);
        assert_eq!(err.fields.len(), 4);
    }

    #[test]
    fn name_wins_for_routing() -> TestResult {
        let mut request = GetClusterRequest::default();
        request.apply(ResourceId::from_legacy_triple("p", "z", "c"))?;
        request.name = "projects/p/locations/l/clusters/c".to_string();
        let got = request.routing().unwrap_or_default();
        assert!(got.starts_with("name="), "{got}");
        Ok(())
    }

    #[test]
    fn empty_routing() {
        let request = GetServerConfigRequest::default();
        assert_eq!(request.routing(), None);
    }

    #[test]
    fn accessors() {
        let ResourceId::Legacy(id) = ResourceId::from_legacy_node_pool("p", "z", "c", "np") else {
            unreachable!("legacy constructor must produce a legacy id");
        };
        assert_eq!(id.project_id(), "p");
        assert_eq!(id.zone(), "z");
        assert_eq!(id.id(), Some("c"));
        assert_eq!(id.node_pool_id(), Some("np"));
    }
}
