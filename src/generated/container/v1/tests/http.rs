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

//! These tests run the default HTTP transport against a local server. They
//! verify the URL templates, the request bodies, and how HTTP errors map to
//! the error taxonomy.

#[cfg(test)]
mod tests {
    use gax::credentials::Credentials;
    use gax::error::rpc::Code;
    use gax::options::RequestOptionsBuilder;
    use google_cloud_container_v1::client::ClusterManager;
    use google_cloud_container_v1::model;
    use google_cloud_container_v1::resource::ResourceId;
    use httptest::matchers::request::{body, headers, method, path};
    use httptest::matchers::{contains, eq, json_decoded};
    use httptest::{Expectation, Server, all_of, responders::*};
    use serde_json::json;

    async fn client(server: &Server) -> anyhow::Result<ClusterManager> {
        let client = ClusterManager::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(Credentials::anonymous())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_cluster_hierarchical() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                method("GET"),
                path("/v1/projects/p/locations/us-central1/clusters/c"),
                headers(contains((
                    "x-goog-request-params",
                    "name=projects%2Fp%2Flocations%2Fus-central1%2Fclusters%2Fc"
                ))),
            ])
            .respond_with(json_encoded(json!({
                "name": "c",
                "status": "RUNNING",
                "currentNodeCount": 3,
                "resourceLabels": {"env": "test"}
            }))),
        );
        let client = client(&server).await?;
        let got = client
            .get_cluster("projects/p/locations/us-central1/clusters/c")
            .send()
            .await?;
        assert_eq!(got.name, "c");
        assert_eq!(got.status, model::ClusterStatus::Running);
        assert_eq!(got.current_node_count, 3);
        assert_eq!(got.resource_labels.get("env").map(String::as_str), Some("test"));
        Ok(())
    }

    #[tokio::test]
    async fn list_clusters_legacy() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                method("GET"),
                path("/v1/projects/p/zones/-/clusters"),
            ])
            .respond_with(json_encoded(json!({
                "clusters": [{"name": "a"}, {"name": "b"}],
                "missingZones": ["us-east1-b"]
            }))),
        );
        let client = client(&server).await?;
        let got = client
            .list_clusters(ResourceId::from_legacy_zone("p", "-"))
            .send()
            .await?;
        let names = got.clusters.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(got.missing_zones, vec!["us-east1-b"]);
        Ok(())
    }

    #[tokio::test]
    async fn legacy_id_reserved_characters() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                method("GET"),
                path("/v1/projects/p/zones/z/clusters/c%2Fx%3Fview%23top"),
            ])
            .respond_with(json_encoded(json!({"name": "c/x?view#top"}))),
        );
        let client = client(&server).await?;
        let got = client
            .get_cluster(ResourceId::from_legacy_triple("p", "z", "c/x?view#top"))
            .send()
            .await?;
        assert_eq!(got.name, "c/x?view#top");
        Ok(())
    }

    #[tokio::test]
    async fn set_node_pool_size_legacy() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                method("POST"),
                path("/v1/projects/p/zones/z/clusters/c/nodePools/np/setSize"),
                body(json_decoded(eq(json!({
                    "projectId": "p",
                    "zone": "z",
                    "clusterId": "c",
                    "nodePoolId": "np",
                    "nodeCount": 5
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "operation-1",
                "zone": "z",
                "operationType": "SET_NODE_POOL_SIZE",
                "status": "RUNNING"
            }))),
        );
        let client = client(&server).await?;
        let got = client
            .set_node_pool_size(ResourceId::from_legacy_node_pool("p", "z", "c", "np"), 5)
            .send()
            .await?;
        assert_eq!(got.name, "operation-1");
        assert_eq!(got.operation_type, model::OperationType::SetNodePoolSize);
        assert_eq!(got.status, model::OperationStatus::Running);
        Ok(())
    }

    #[tokio::test]
    async fn cancel_operation() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                method("POST"),
                path("/v1/projects/p/locations/l/operations/op-1:cancel"),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        let client = client(&server).await?;
        client
            .cancel_operation("projects/p/locations/l/operations/op-1")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn access_token() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                method("GET"),
                path("/v1/projects/p/locations/l/serverConfig"),
                headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(json!({
                "defaultClusterVersion": "1.30.1",
                "validMasterVersions": ["1.30.1", "1.29.4"]
            }))),
        );
        let client = ClusterManager::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(Credentials::access_token("test-token")?)
            .build()
            .await?;
        let got = client
            .get_server_config("projects/p/locations/l")
            .send()
            .await?;
        assert_eq!(got.default_cluster_version, "1.30.1");
        assert_eq!(got.valid_master_versions.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                method("GET"),
                path("/v1/projects/p/locations/l/clusters/missing"),
            ])
            .respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({
                            "error": {
                                "code": 404,
                                "message": "cluster not found",
                                "status": "NOT_FOUND"
                            }
                        })
                        .to_string(),
                    ),
            ),
        );
        let client = client(&server).await?;
        let err = client
            .get_cluster("projects/p/locations/l/clusters/missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(
            err.status().map(|s| s.message.as_str()),
            Some("cluster not found")
        );
        Ok(())
    }

    #[tokio::test]
    async fn http_error_without_status() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                method("DELETE"),
                path("/v1/projects/p/locations/l/clusters/c"),
            ])
            .respond_with(status_code(503).body("try again later")),
        );
        let client = client(&server).await?;
        let err = client
            .delete_cluster("projects/p/locations/l/clusters/c")
            .without_retry()
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Unavailable), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_legacy_field() -> anyhow::Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let mut request = model::GetClusterRequest::default();
        request.project_id = "p".to_string();
        request.zone = "z".to_string();
        let err = client
            .get_cluster(ResourceId::from_legacy_triple("p", "z", "c"))
            .with_request(request)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(err.to_string().contains("cluster_id"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn connection_error() -> anyhow::Result<()> {
        let client = ClusterManager::builder()
            .with_endpoint("http://127.0.0.1:1")
            .build()
            .await?;
        let err = client
            .get_cluster("projects/p/locations/l/clusters/c")
            .without_retry()
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Unavailable), "{err:?}");
        Ok(())
    }
}
