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

//! The default transport: JSON over HTTP.

use crate::Result;
use crate::model;
use gax::client_builder::Error as BuilderError;
use gax::credentials::Credentials;
use gax::error::Error;
use gax::error::rpc::Status;
use gax::path_template::expand;
use gax::transport::AttemptContext;
use reqwest::Method;

const NO_BODY: Option<&()> = None;

/// Implements [super::stub::ClusterManager] using the REST bindings of the
/// service.
///
/// All the calls share one `reqwest::Client`, and thus its connection pool.
#[derive(Clone, Debug)]
pub struct ClusterManager {
    inner: reqwest::Client,
    endpoint: String,
    cred: Credentials,
}

impl ClusterManager {
    pub fn new(endpoint: &str, cred: Option<Credentials>) -> gax::client_builder::Result<Self> {
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let cred = cred.unwrap_or_else(|| {
            tracing::debug!("no credentials configured, sending unauthenticated requests");
            Credentials::anonymous()
        });
        Ok(Self {
            inner,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            cred,
        })
    }

    async fn execute<I, O>(
        &self,
        method: Method,
        path: String,
        body: Option<&I>,
        context: AttemptContext,
    ) -> Result<O>
    where
        I: serde::Serialize + ?Sized + Sync,
        O: serde::de::DeserializeOwned + Default,
    {
        let mut builder = self
            .inner
            .request(method, format!("{}{path}", &self.endpoint))
            .headers(context.headers);
        if let Some(timeout) = context.timeout {
            builder = builder.timeout(timeout);
        }
        builder = builder.headers(self.cred.headers().await?);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(map_send_error)?;
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }
}

#[async_trait::async_trait]
impl super::stub::ClusterManager for ClusterManager {
    async fn list_clusters(
        &self,
        req: model::ListClustersRequest,
        context: AttemptContext,
    ) -> Result<model::ListClustersResponse> {
        let path = if req.parent.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                ],
            )?
        } else {
            expand("/v1/{parent}/clusters", &[("parent", req.parent.as_str())])?
        };
        self.execute(Method::GET, path, NO_BODY, context).await
    }

    async fn get_cluster(
        &self,
        req: model::GetClusterRequest,
        context: AttemptContext,
    ) -> Result<model::Cluster> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}", &[("name", req.name.as_str())])?
        };
        self.execute(Method::GET, path, NO_BODY, context).await
    }

    async fn create_cluster(
        &self,
        req: model::CreateClusterRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.parent.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                ],
            )?
        } else {
            expand("/v1/{parent}/clusters", &[("parent", req.parent.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn update_cluster(
        &self,
        req: model::UpdateClusterRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}", &[("name", req.name.as_str())])?
        };
        self.execute(Method::PUT, path, Some(&req), context).await
    }

    async fn update_node_pool(
        &self,
        req: model::UpdateNodePoolRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/nodePools/{node_pool_id}/update",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                    ("node_pool_id", req.node_pool_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}", &[("name", req.name.as_str())])?
        };
        self.execute(Method::PUT, path, Some(&req), context).await
    }

    async fn set_node_pool_autoscaling(
        &self,
        req: model::SetNodePoolAutoscalingRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/nodePools/{node_pool_id}/autoscaling",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                    ("node_pool_id", req.node_pool_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setAutoscaling", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_logging_service(
        &self,
        req: model::SetLoggingServiceRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/logging",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setLogging", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_monitoring_service(
        &self,
        req: model::SetMonitoringServiceRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/monitoring",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setMonitoring", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_addons_config(
        &self,
        req: model::SetAddonsConfigRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/addons",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setAddons", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_locations(
        &self,
        req: model::SetLocationsRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/locations",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setLocations", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn update_master(
        &self,
        req: model::UpdateMasterRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/master",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:updateMaster", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_master_auth(
        &self,
        req: model::SetMasterAuthRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}:setMasterAuth",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setMasterAuth", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn delete_cluster(
        &self,
        req: model::DeleteClusterRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}", &[("name", req.name.as_str())])?
        };
        self.execute(Method::DELETE, path, NO_BODY, context).await
    }

    async fn list_operations(
        &self,
        req: model::ListOperationsRequest,
        context: AttemptContext,
    ) -> Result<model::ListOperationsResponse> {
        let path = if req.parent.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/operations",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                ],
            )?
        } else {
            expand("/v1/{parent}/operations", &[("parent", req.parent.as_str())])?
        };
        self.execute(Method::GET, path, NO_BODY, context).await
    }

    async fn get_operation(
        &self,
        req: model::GetOperationRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/operations/{operation_id}",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("operation_id", req.operation_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}", &[("name", req.name.as_str())])?
        };
        self.execute(Method::GET, path, NO_BODY, context).await
    }

    async fn cancel_operation(
        &self,
        req: model::CancelOperationRequest,
        context: AttemptContext,
    ) -> Result<()> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/operations/{operation_id}:cancel",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("operation_id", req.operation_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:cancel", &[("name", req.name.as_str())])?
        };
        self.execute::<_, serde_json::Value>(Method::POST, path, Some(&req), context)
            .await
            .map(|_| ())
    }

    async fn get_server_config(
        &self,
        req: model::GetServerConfigRequest,
        context: AttemptContext,
    ) -> Result<model::ServerConfig> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/serverconfig",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}/serverConfig", &[("name", req.name.as_str())])?
        };
        self.execute(Method::GET, path, NO_BODY, context).await
    }

    async fn list_node_pools(
        &self,
        req: model::ListNodePoolsRequest,
        context: AttemptContext,
    ) -> Result<model::ListNodePoolsResponse> {
        let path = if req.parent.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/nodePools",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{parent}/nodePools", &[("parent", req.parent.as_str())])?
        };
        self.execute(Method::GET, path, NO_BODY, context).await
    }

    async fn get_node_pool(
        &self,
        req: model::GetNodePoolRequest,
        context: AttemptContext,
    ) -> Result<model::NodePool> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/nodePools/{node_pool_id}",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                    ("node_pool_id", req.node_pool_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}", &[("name", req.name.as_str())])?
        };
        self.execute(Method::GET, path, NO_BODY, context).await
    }

    async fn create_node_pool(
        &self,
        req: model::CreateNodePoolRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.parent.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/nodePools",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{parent}/nodePools", &[("parent", req.parent.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn delete_node_pool(
        &self,
        req: model::DeleteNodePoolRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/nodePools/{node_pool_id}",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                    ("node_pool_id", req.node_pool_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}", &[("name", req.name.as_str())])?
        };
        self.execute(Method::DELETE, path, NO_BODY, context).await
    }

    async fn rollback_node_pool_upgrade(
        &self,
        req: model::RollbackNodePoolUpgradeRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/nodePools/{node_pool_id}:rollback",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                    ("node_pool_id", req.node_pool_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:rollback", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_node_pool_management(
        &self,
        req: model::SetNodePoolManagementRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/nodePools/{node_pool_id}/setManagement",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                    ("node_pool_id", req.node_pool_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setManagement", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_labels(
        &self,
        req: model::SetLabelsRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/resourceLabels",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setResourceLabels", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_legacy_abac(
        &self,
        req: model::SetLegacyAbacRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/legacyAbac",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setLegacyAbac", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn start_ip_rotation(
        &self,
        req: model::StartIpRotationRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}:startIpRotation",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:startIpRotation", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn complete_ip_rotation(
        &self,
        req: model::CompleteIpRotationRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}:completeIpRotation",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:completeIpRotation", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_node_pool_size(
        &self,
        req: model::SetNodePoolSizeRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}/nodePools/{node_pool_id}/setSize",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                    ("node_pool_id", req.node_pool_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setSize", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_network_policy(
        &self,
        req: model::SetNetworkPolicyRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}:setNetworkPolicy",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setNetworkPolicy", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }

    async fn set_maintenance_policy(
        &self,
        req: model::SetMaintenancePolicyRequest,
        context: AttemptContext,
    ) -> Result<model::Operation> {
        let path = if req.name.is_empty() {
            expand_legacy(
                "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}:setMaintenancePolicy",
                &[
                    ("project_id", req.project_id.as_str()),
                    ("zone", req.zone.as_str()),
                    ("cluster_id", req.cluster_id.as_str()),
                ],
            )?
        } else {
            expand("/v1/{name}:setMaintenancePolicy", &[("name", req.name.as_str())])?
        };
        self.execute(Method::POST, path, Some(&req), context).await
    }
}

/// Characters escaped in legacy identifiers before they become path segments.
///
/// The hierarchical `name` and `parent` fields are sent verbatim, their `/`
/// separators are part of the path.
const SEGMENT: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Expands a legacy `projects/{project_id}/zones/{zone}/...` template, each
/// binding percent encoded as a single path segment.
fn expand_legacy(template: &str, bindings: &[(&str, &str)]) -> Result<String> {
    let encoded = bindings
        .iter()
        .map(|(k, v)| {
            (
                *k,
                percent_encoding::utf8_percent_encode(v, &SEGMENT).to_string(),
            )
        })
        .collect::<Vec<_>>();
    let encoded = encoded
        .iter()
        .map(|(k, v)| (*k, v.as_str()))
        .collect::<Vec<_>>();
    expand(template, &encoded)
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    let error = match Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // Some RPCs return an empty body, with or without 204 No Content.
    let body = response.bytes().await.map_err(Error::io)?;
    if body.is_empty() {
        return Ok(O::default());
    }
    serde_json::from_slice::<O>(&body).map_err(Error::deser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn response(code: u16, body: &str) -> anyhow::Result<reqwest::Response> {
        let response = http::Response::builder()
            .status(code)
            .header("content-type", "application/json")
            .body(body.to_string())?;
        Ok(response.into())
    }

    #[test_case("c", "c"; "plain")]
    #[test_case("c/x", "c%2Fx"; "slash")]
    #[test_case("c?fields=name", "c%3Ffields=name"; "query")]
    #[test_case("c#frag", "c%23frag"; "fragment")]
    #[test_case("100%", "100%25"; "percent")]
    fn legacy_segment(cluster_id: &str, want: &str) -> TestResult {
        let got = expand_legacy(
            "/v1/projects/{project_id}/zones/{zone}/clusters/{cluster_id}",
            &[("project_id", "p"), ("zone", "z"), ("cluster_id", cluster_id)],
        )?;
        assert_eq!(got, format!("/v1/projects/p/zones/z/clusters/{want}"));
        Ok(())
    }

    #[test]
    fn legacy_segment_missing() {
        let got = expand_legacy(
            "/v1/projects/{project_id}/zones/{zone}/clusters",
            &[("project_id", "p"), ("zone", "")],
        );
        assert!(got.is_err(), "{got:?}");
    }

    #[tokio::test]
    async fn error_with_status() -> TestResult {
        let body = json!({"error": {
            "code": 404,
            "message": "cluster not found",
            "status": "NOT_FOUND",
        }});
        let err = to_http_error::<()>(response(404, &body.to_string())?)
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(
            err.status().map(|s| s.message.as_str()),
            Some("cluster not found")
        );
        Ok(())
    }

    #[tokio::test]
    async fn error_without_status() -> TestResult {
        let err = to_http_error::<()>(response(503, "upstream connect error")?)
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503));
        assert_eq!(err.code(), Some(Code::Unavailable));
        Ok(())
    }

    #[test_case(200, ""; "200 empty")]
    #[test_case(204, ""; "204 empty")]
    #[test_case(200, "{}"; "200 empty object")]
    #[tokio::test]
    async fn empty_response(code: u16, body: &str) -> TestResult {
        let got = to_http_response::<model::Operation>(response(code, body)?).await?;
        assert_eq!(got, model::Operation::default());
        Ok(())
    }

    #[tokio::test]
    async fn bad_response() -> TestResult {
        let err = to_http_response::<model::Operation>(response(200, "not json")?)
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_path_field() -> TestResult {
        use crate::stub::ClusterManager as _;
        let transport = ClusterManager::new("http://127.0.0.1:1", None)?;
        let req = model::GetClusterRequest {
            project_id: "p".to_string(),
            zone: "z".to_string(),
            ..Default::default()
        };
        let err = transport
            .get_cluster(req, AttemptContext::new())
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        Ok(())
    }
}
