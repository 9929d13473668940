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

//! Wait for long-running operations.
//!
//! Most mutations in the service return an [Operation][model::Operation]. The
//! change happens in the background, the operation reports its progress. A
//! [Poller] queries the operation until it is done.

use crate::Result;
use crate::client::ClusterManager;
use crate::model;
use crate::model::OperationStatus;
use crate::resource::ResourceId;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::exponential_backoff::ExponentialBackoff;
use gax::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use gax::retry_state::RetryState;
use std::sync::Arc;

/// The result of polling an operation.
#[derive(Debug)]
pub enum PollingResult {
    /// The operation is still in progress.
    InProgress(model::Operation),
    /// The operation completed.
    ///
    /// Operations in the `ABORTING` state complete with an `ABORTED` error
    /// carrying the operation's `status_message`.
    Completed(Result<model::Operation>),
    /// Querying the operation failed.
    ///
    /// The operation may still be running, calling `poll()` again repeats
    /// the query.
    PollingError(Error),
}

/// Polls an operation until it completes.
///
/// # Example
/// ```no_run
/// # use google_cloud_container_v1::client::ClusterManager;
/// # use google_cloud_container_v1::lro::PollingResult;
/// # async fn sample(client: &ClusterManager) -> anyhow::Result<()> {
/// let name = ClusterManager::cluster_path("my-project", "us-central1", "my-cluster")?;
/// let operation = client.delete_cluster(name).send().await?;
/// let mut poller = client.poller(operation);
/// while let Some(result) = poller.poll().await {
///     match result {
///         PollingResult::InProgress(op) => println!("in progress: {}", op.status),
///         PollingResult::Completed(r) => println!("done: {r:?}"),
///         PollingResult::PollingError(e) => println!("error polling: {e}"),
///     }
/// #   break;
/// }
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct Poller {
    client: ClusterManager,
    operation: Option<model::Operation>,
    target: Option<ResourceId>,
    backoff: Arc<dyn PollingBackoffPolicy>,
}

impl Poller {
    pub(crate) fn new(client: ClusterManager, operation: model::Operation) -> Self {
        Self {
            client,
            operation: Some(operation),
            target: None,
            backoff: Arc::new(ExponentialBackoff::default()),
        }
    }

    /// Changes the wait period between polls in [until_done][Poller::until_done].
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.backoff = v.into().into();
        self
    }

    /// Queries the operation once.
    ///
    /// Returns `None` after the operation completed.
    pub async fn poll(&mut self) -> Option<PollingResult> {
        let current = self.operation.take()?;
        if let Some(result) = completion(&current) {
            return Some(PollingResult::Completed(result));
        }
        let target = match self.target.clone() {
            Some(t) => t,
            None => match operation_id(&current) {
                Ok(t) => t,
                Err(e) => return Some(PollingResult::Completed(Err(e))),
            },
        };
        self.target = Some(target.clone());
        match self.client.get_operation(target).send().await {
            Ok(op) => match completion(&op) {
                Some(result) => Some(PollingResult::Completed(result)),
                None => {
                    self.operation = Some(op.clone());
                    Some(PollingResult::InProgress(op))
                }
            },
            Err(e) => {
                self.operation = Some(current);
                Some(PollingResult::PollingError(e))
            }
        }
    }

    /// Polls the operation until it completes, waiting between polls.
    ///
    /// Errors querying the operation stop the loop. The query already retries
    /// transient errors, using the retry policy of `GetOperation`.
    pub async fn until_done(mut self) -> Result<model::Operation> {
        let mut state = RetryState::new();
        loop {
            match self.poll().await {
                None => {
                    return Err(Error::invalid_argument(
                        "the operation was already polled to completion",
                    ));
                }
                Some(PollingResult::Completed(r)) => return r,
                Some(PollingResult::PollingError(e)) => return Err(e),
                Some(PollingResult::InProgress(op)) => {
                    let next = state.attempt_count + 1;
                    state = state.set_attempt_count(next);
                    let wait = self.backoff.wait_period(&state);
                    tracing::debug!(operation = %op.name, ?wait, "operation in progress");
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }
}

fn completion(operation: &model::Operation) -> Option<Result<model::Operation>> {
    match operation.status {
        OperationStatus::Done => Some(Ok(operation.clone())),
        OperationStatus::Aborting => {
            let status = Status::default()
                .set_code(Code::Aborted)
                .set_message(operation.status_message.clone());
            Some(Err(Error::service(status)))
        }
        _ => None,
    }
}

/// Finds the operation resource from its `self_link`.
///
/// The link uses either `.../projects/{p}/locations/{l}/operations/{o}` or
/// the legacy `.../projects/{p}/zones/{z}/operations/{o}` form.
fn operation_id(operation: &model::Operation) -> Result<ResourceId> {
    let path = operation
        .self_link
        .find("projects/")
        .map(|i| &operation.self_link[i..])
        .ok_or_else(|| {
            Error::invalid_argument(format!(
                "cannot find the resource name of operation {} in its self link",
                operation.name
            ))
        })?;
    let segments = path.split('/').collect::<Vec<_>>();
    match segments.as_slice() {
        ["projects", _, "locations", _, "operations", o] if !o.is_empty() => {
            Ok(ResourceId::from_hierarchical_name(path))
        }
        ["projects", p, "zones", z, "operations", o] if !o.is_empty() => {
            Ok(ResourceId::from_legacy_triple(*p, *z, *o))
        }
        _ => Err(Error::invalid_argument(format!(
            "unexpected self link for operation {}: {}",
            operation.name, operation.self_link
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(
        "https://container.googleapis.com/v1/projects/123/locations/us-central1/operations/op-1",
        ResourceId::from_hierarchical_name("projects/123/locations/us-central1/operations/op-1")
    )]
    #[test_case(
        "https://container.googleapis.com/v1/projects/123/zones/us-central1-a/operations/op-1",
        ResourceId::from_legacy_triple("123", "us-central1-a", "op-1")
    )]
    fn id_from_self_link(link: &str, want: ResourceId) -> anyhow::Result<()> {
        let op = model::Operation::new().set_name("op-1").set_self_link(link);
        assert_eq!(operation_id(&op)?, want);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("https://container.googleapis.com/v1/projects/123/zones/us-central1-a/clusters/c1"; "cluster link")]
    #[test_case("https://container.googleapis.com/v1/projects/123/zones/us-central1-a/operations/"; "missing id")]
    fn id_error(link: &str) {
        let op = model::Operation::new().set_name("op-1").set_self_link(link);
        let err = operation_id(&op).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
    }

    #[test]
    fn completion_states() {
        let op = model::Operation::new().set_status(OperationStatus::Running);
        assert!(completion(&op).is_none());

        let op = model::Operation::new().set_status(OperationStatus::Done);
        assert!(matches!(completion(&op), Some(Ok(_))));

        let op = model::Operation::new()
            .set_status(OperationStatus::Aborting)
            .set_status_message("quota exceeded");
        let err = completion(&op).and_then(|r| r.err());
        let err = err.expect("aborting operations complete with an error");
        assert_eq!(err.code(), Some(Code::Aborted));
        assert_eq!(
            err.status().map(|s| s.message.as_str()),
            Some("quota exceeded")
        );

        // Aborting is terminal even without a status message.
        let op = model::Operation::new().set_status(OperationStatus::Aborting);
        let err = completion(&op).and_then(|r| r.err());
        let err = err.expect("aborting operations complete with an error");
        assert_eq!(err.code(), Some(Code::Aborted));
        assert_eq!(err.status().map(|s| s.message.as_str()), Some(""));
    }
}
