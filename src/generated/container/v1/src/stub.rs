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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

use crate::Result;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::transport::AttemptContext;

/// Defines the trait used to implement [crate::client::ClusterManager].
///
/// Application developers may need to implement this trait to mock
/// `client::ClusterManager`. In other use-cases, application developers only
/// use `client::ClusterManager` and need not be concerned with this trait or
/// its implementations.
///
/// Each method performs a single attempt. The client applies the retry
/// policy, the timeouts, and the metadata before calling the trait, and
/// passes them in the [AttemptContext].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations return an
/// `UNIMPLEMENTED` error.
#[async_trait::async_trait]
pub trait ClusterManager: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::ClusterManager::list_clusters].
    async fn list_clusters(
        &self,
        _req: crate::model::ListClustersRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::ListClustersResponse> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::get_cluster].
    async fn get_cluster(
        &self,
        _req: crate::model::GetClusterRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Cluster> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::create_cluster].
    async fn create_cluster(
        &self,
        _req: crate::model::CreateClusterRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::update_cluster].
    async fn update_cluster(
        &self,
        _req: crate::model::UpdateClusterRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::update_node_pool].
    async fn update_node_pool(
        &self,
        _req: crate::model::UpdateNodePoolRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_node_pool_autoscaling].
    async fn set_node_pool_autoscaling(
        &self,
        _req: crate::model::SetNodePoolAutoscalingRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_logging_service].
    async fn set_logging_service(
        &self,
        _req: crate::model::SetLoggingServiceRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_monitoring_service].
    async fn set_monitoring_service(
        &self,
        _req: crate::model::SetMonitoringServiceRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_addons_config].
    async fn set_addons_config(
        &self,
        _req: crate::model::SetAddonsConfigRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_locations].
    async fn set_locations(
        &self,
        _req: crate::model::SetLocationsRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::update_master].
    async fn update_master(
        &self,
        _req: crate::model::UpdateMasterRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_master_auth].
    async fn set_master_auth(
        &self,
        _req: crate::model::SetMasterAuthRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::delete_cluster].
    async fn delete_cluster(
        &self,
        _req: crate::model::DeleteClusterRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::list_operations].
    async fn list_operations(
        &self,
        _req: crate::model::ListOperationsRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::ListOperationsResponse> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::get_operation].
    async fn get_operation(
        &self,
        _req: crate::model::GetOperationRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::cancel_operation].
    async fn cancel_operation(
        &self,
        _req: crate::model::CancelOperationRequest,
        _context: AttemptContext,
    ) -> Result<()> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::get_server_config].
    async fn get_server_config(
        &self,
        _req: crate::model::GetServerConfigRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::ServerConfig> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::list_node_pools].
    async fn list_node_pools(
        &self,
        _req: crate::model::ListNodePoolsRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::ListNodePoolsResponse> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::get_node_pool].
    async fn get_node_pool(
        &self,
        _req: crate::model::GetNodePoolRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::NodePool> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::create_node_pool].
    async fn create_node_pool(
        &self,
        _req: crate::model::CreateNodePoolRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::delete_node_pool].
    async fn delete_node_pool(
        &self,
        _req: crate::model::DeleteNodePoolRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::rollback_node_pool_upgrade].
    async fn rollback_node_pool_upgrade(
        &self,
        _req: crate::model::RollbackNodePoolUpgradeRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_node_pool_management].
    async fn set_node_pool_management(
        &self,
        _req: crate::model::SetNodePoolManagementRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_labels].
    async fn set_labels(
        &self,
        _req: crate::model::SetLabelsRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_legacy_abac].
    async fn set_legacy_abac(
        &self,
        _req: crate::model::SetLegacyAbacRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::start_ip_rotation].
    async fn start_ip_rotation(
        &self,
        _req: crate::model::StartIpRotationRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::complete_ip_rotation].
    async fn complete_ip_rotation(
        &self,
        _req: crate::model::CompleteIpRotationRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_node_pool_size].
    async fn set_node_pool_size(
        &self,
        _req: crate::model::SetNodePoolSizeRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_network_policy].
    async fn set_network_policy(
        &self,
        _req: crate::model::SetNetworkPolicyRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }

    /// Implements [crate::client::ClusterManager::set_maintenance_policy].
    async fn set_maintenance_policy(
        &self,
        _req: crate::model::SetMaintenancePolicyRequest,
        _context: AttemptContext,
    ) -> Result<crate::model::Operation> {
        unimplemented_stub()
    }
}

fn unimplemented_stub<T>() -> Result<T> {
    let status = Status::default()
        .set_code(Code::Unimplemented)
        .set_message("this method is not implemented by the stub");
    Err(Error::service(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Empty;
    #[async_trait::async_trait]
    impl ClusterManager for Empty {}

    #[tokio::test]
    async fn default_methods() {
        let stub = Empty;
        let err = stub
            .get_cluster(crate::model::GetClusterRequest::default(), AttemptContext::new())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Unimplemented), "{err:?}");

        let err = stub
            .cancel_operation(crate::model::CancelOperationRequest::default(), AttemptContext::new())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Unimplemented), "{err:?}");
    }
}
