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

use crate::Result;
use crate::model;
use gax::transport::AttemptContext;
use std::sync::Arc;
use tracing::{Instrument, Span, field};

const SERVICE: &str = "google.container.v1.ClusterManager";

/// Implements a [ClusterManager](super::stub::ClusterManager) decorator for
/// logging and tracing.
#[derive(Clone, Debug)]
pub struct ClusterManager {
    inner: Arc<dyn super::stub::ClusterManager>,
}

impl ClusterManager {
    pub fn new(inner: Arc<dyn super::stub::ClusterManager>) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl super::stub::ClusterManager for ClusterManager {
    async fn list_clusters(
        &self,
        req: model::ListClustersRequest,
        context: AttemptContext,
    ) -> Result<model::ListClustersResponse> {
        let span = client_request_span("ListClusters", &context);
        let result = self
            .inner
            .list_clusters(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn get_cluster(
        &self,
        req: model::GetClusterRequest,
        context: AttemptContext,
    ) -> Result<model::Cluster> {
        let span = client_request_span("GetCluster", &context);
        let result = self
            .inner
            .get_cluster(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn create_cluster(
        &self,
        req: model::CreateClusterRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("CreateCluster", &context);
        let result = self
            .inner
            .create_cluster(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn update_cluster(
        &self,
        req: model::UpdateClusterRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("UpdateCluster", &context);
        let result = self
            .inner
            .update_cluster(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn update_node_pool(
        &self,
        req: model::UpdateNodePoolRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("UpdateNodePool", &context);
        let result = self
            .inner
            .update_node_pool(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_node_pool_autoscaling(
        &self,
        req: model::SetNodePoolAutoscalingRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetNodePoolAutoscaling", &context);
        let result = self
            .inner
            .set_node_pool_autoscaling(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_logging_service(
        &self,
        req: model::SetLoggingServiceRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetLoggingService", &context);
        let result = self
            .inner
            .set_logging_service(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_monitoring_service(
        &self,
        req: model::SetMonitoringServiceRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetMonitoringService", &context);
        let result = self
            .inner
            .set_monitoring_service(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_addons_config(
        &self,
        req: model::SetAddonsConfigRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetAddonsConfig", &context);
        let result = self
            .inner
            .set_addons_config(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_locations(
        &self,
        req: model::SetLocationsRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetLocations", &context);
        let result = self
            .inner
            .set_locations(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn update_master(
        &self,
        req: model::UpdateMasterRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("UpdateMaster", &context);
        let result = self
            .inner
            .update_master(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_master_auth(
        &self,
        req: model::SetMasterAuthRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetMasterAuth", &context);
        let result = self
            .inner
            .set_master_auth(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn delete_cluster(
        &self,
        req: model::DeleteClusterRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("DeleteCluster", &context);
        let result = self
            .inner
            .delete_cluster(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn list_operations(
        &self,
        req: model::ListOperationsRequest,
        context: AttemptContext,
    ) -> Result<model::ListOperationsResponse> {
        let span = client_request_span("ListOperations", &context);
        let result = self
            .inner
            .list_operations(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn get_operation(
        &self,
        req: model::GetOperationRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("GetOperation", &context);
        let result = self
            .inner
            .get_operation(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn cancel_operation(
        &self,
        req: model::CancelOperationRequest,
        context: AttemptContext,
    ) -> Result<()> {
        let span = client_request_span("CancelOperation", &context);
        let result = self
            .inner
            .cancel_operation(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn get_server_config(
        &self,
        req: model::GetServerConfigRequest,
        context: AttemptContext,
    ) -> Result<model::ServerConfig> {
        let span = client_request_span("GetServerConfig", &context);
        let result = self
            .inner
            .get_server_config(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn list_node_pools(
        &self,
        req: model::ListNodePoolsRequest,
        context: AttemptContext,
    ) -> Result<model::ListNodePoolsResponse> {
        let span = client_request_span("ListNodePools", &context);
        let result = self
            .inner
            .list_node_pools(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn get_node_pool(
        &self,
        req: model::GetNodePoolRequest,
        context: AttemptContext,
    ) -> Result<model::NodePool> {
        let span = client_request_span("GetNodePool", &context);
        let result = self
            .inner
            .get_node_pool(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn create_node_pool(
        &self,
        req: model::CreateNodePoolRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("CreateNodePool", &context);
        let result = self
            .inner
            .create_node_pool(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn delete_node_pool(
        &self,
        req: model::DeleteNodePoolRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("DeleteNodePool", &context);
        let result = self
            .inner
            .delete_node_pool(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn rollback_node_pool_upgrade(
        &self,
        req: model::RollbackNodePoolUpgradeRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("RollbackNodePoolUpgrade", &context);
        let result = self
            .inner
            .rollback_node_pool_upgrade(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_node_pool_management(
        &self,
        req: model::SetNodePoolManagementRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetNodePoolManagement", &context);
        let result = self
            .inner
            .set_node_pool_management(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_labels(
        &self,
        req: model::SetLabelsRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetLabels", &context);
        let result = self
            .inner
            .set_labels(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_legacy_abac(
        &self,
        req: model::SetLegacyAbacRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetLegacyAbac", &context);
        let result = self
            .inner
            .set_legacy_abac(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn start_ip_rotation(
        &self,
        req: model::StartIpRotationRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("StartIPRotation", &context);
        let result = self
            .inner
            .start_ip_rotation(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn complete_ip_rotation(
        &self,
        req: model::CompleteIpRotationRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("CompleteIPRotation", &context);
        let result = self
            .inner
            .complete_ip_rotation(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_node_pool_size(
        &self,
        req: model::SetNodePoolSizeRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetNodePoolSize", &context);
        let result = self
            .inner
            .set_node_pool_size(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_network_policy(
        &self,
        req: model::SetNetworkPolicyRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetNetworkPolicy", &context);
        let result = self
            .inner
            .set_network_policy(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    async fn set_maintenance_policy(
        &self,
        req: model::SetMaintenancePolicyRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let span = client_request_span("SetMaintenancePolicy", &context);
        let result = self
            .inner
            .set_maintenance_policy(req, context)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }
}

/// Creates the span for one attempt of an RPC.
fn client_request_span(method: &'static str, context: &AttemptContext) -> Span {
    tracing::info_span!(
        "client_request",
        "rpc.system" = "http",
        "rpc.service" = SERVICE,
        "rpc.method" = method,
        "gcp.client.attempt" = context.attempt_count,
        "otel.status_code" = "UNSET",
        "otel.status_description" = field::Empty,
        "error.type" = field::Empty,
    )
}

fn record_client_request_span<T>(result: &Result<T>, span: &Span) {
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            let error_type = err.code().map(|c| c.name().to_string());
            span.record(
                "error.type",
                error_type.as_deref().unwrap_or("CLIENT_ERROR"),
            );
            span.record("otel.status_description", field::display(err));
            tracing::debug!(parent: span, error = %err, "attempt failed");
        }
    }
}
