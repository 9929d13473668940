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

//! Verify the long-running operation poller against a mock stub.

#[cfg(test)]
mod tests {
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::transport::AttemptContext;
    use google_cloud_container_v1::client::ClusterManager;
    use google_cloud_container_v1::lro::PollingResult;
    use google_cloud_container_v1::model::{self, OperationStatus};
    use google_cloud_container_v1::stub;
    use std::time::Duration;

    type Result<T> = gax::Result<T>;

    const LINK: &str = "https://container.googleapis.com/v1/projects/123/locations/us-central1/operations/op-1";
    const NAME: &str = "projects/123/locations/us-central1/operations/op-1";

    mockall::mock! {
        #[derive(Debug)]
        ClusterManager {}

        #[async_trait::async_trait]
        impl stub::ClusterManager for ClusterManager {
            async fn get_operation(&self, req: model::GetOperationRequest, context: AttemptContext) -> Result<model::Operation>;
        }
    }

    fn operation(status: OperationStatus) -> model::Operation {
        model::Operation::new()
            .set_name("op-1")
            .set_self_link(LINK)
            .set_status(status)
    }

    #[tokio::test(start_paused = true)]
    async fn until_done() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockClusterManager::new();
        mock.expect_get_operation()
            .times(2)
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == NAME)
            .returning(|_, _| Ok(operation(OperationStatus::Running)));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(operation(OperationStatus::Done).set_target_link("c")));
        let client = ClusterManager::from_stub(mock);

        let start = tokio::time::Instant::now();
        let got = client
            .poller(operation(OperationStatus::Pending))
            .until_done()
            .await?;
        assert_eq!(got.status, OperationStatus::Done);
        assert_eq!(got.target_link, "c");
        // The default policy waits 1s, then 2s.
        assert!(start.elapsed() >= Duration::from_secs(3), "{:?}", start.elapsed());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn custom_backoff() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockClusterManager::new();
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(operation(OperationStatus::Running)));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(operation(OperationStatus::Done)));
        let client = ClusterManager::from_stub(mock);

        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(30))
            .with_maximum_delay(Duration::from_secs(60))
            .build()?;
        let start = tokio::time::Instant::now();
        client
            .poller(operation(OperationStatus::Running))
            .with_polling_backoff_policy(backoff)
            .until_done()
            .await?;
        assert!(start.elapsed() >= Duration::from_secs(30), "{:?}", start.elapsed());
        Ok(())
    }

    #[tokio::test]
    async fn already_done() -> anyhow::Result<()> {
        let client = ClusterManager::from_stub(MockClusterManager::new());
        let mut poller = client.poller(operation(OperationStatus::Done));
        assert!(matches!(
            poller.poll().await,
            Some(PollingResult::Completed(Ok(_)))
        ));
        assert!(poller.poll().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn aborting() -> anyhow::Result<()> {
        let mut mock = MockClusterManager::new();
        mock.expect_get_operation().return_once(|_, _| {
            Ok(operation(OperationStatus::Aborting).set_status_message("insufficient quota"))
        });
        let client = ClusterManager::from_stub(mock);
        let err = client
            .poller(operation(OperationStatus::Running))
            .until_done()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Aborted), "{err:?}");
        assert_eq!(
            err.status().map(|s| s.message.as_str()),
            Some("insufficient quota")
        );
        Ok(())
    }

    #[tokio::test]
    async fn polling_error_keeps_operation() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockClusterManager::new();
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(Error::service(
                    Status::default()
                        .set_code(Code::PermissionDenied)
                        .set_message("denied"),
                ))
            });
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(operation(OperationStatus::Running)));
        let client = ClusterManager::from_stub(mock);

        let mut poller = client.poller(operation(OperationStatus::Running));
        let got = poller.poll().await;
        assert!(
            matches!(&got, Some(PollingResult::PollingError(e)) if e.code() == Some(Code::PermissionDenied)),
            "{got:?}"
        );
        let got = poller.poll().await;
        assert!(
            matches!(&got, Some(PollingResult::InProgress(op)) if op.name == "op-1"),
            "{got:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn legacy_self_link() -> anyhow::Result<()> {
        let mut mock = MockClusterManager::new();
        mock.expect_get_operation()
            .withf(|r, _| {
                r.name.is_empty()
                    && r.project_id == "123"
                    && r.zone == "us-central1-a"
                    && r.operation_id == "op-1"
            })
            .return_once(|_, _| Ok(operation(OperationStatus::Done)));
        let client = ClusterManager::from_stub(mock);
        let start = model::Operation::new()
            .set_name("op-1")
            .set_self_link("https://container.googleapis.com/v1/projects/123/zones/us-central1-a/operations/op-1")
            .set_status(OperationStatus::Running);
        let got = client.poller(start).until_done().await?;
        assert_eq!(got.status, OperationStatus::Done);
        Ok(())
    }

    #[tokio::test]
    async fn missing_self_link() -> anyhow::Result<()> {
        let client = ClusterManager::from_stub(MockClusterManager::new());
        let start = model::Operation::new()
            .set_name("op-1")
            .set_status(OperationStatus::Running);
        let err = client.poller(start).until_done().await.unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        Ok(())
    }
}
