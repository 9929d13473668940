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

//! Verify the spans emitted when tracing is enabled. The spans are captured
//! with a layer installed as the thread-local default subscriber.

#[cfg(test)]
mod tests {
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::transport::AttemptContext;
    use google_cloud_container_v1::client::ClusterManager;
    use google_cloud_container_v1::model;
    use google_cloud_container_v1::stub;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tracing::{Subscriber, field, span};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::registry::LookupSpan;

    type Result<T> = gax::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        ClusterManager {}

        #[async_trait::async_trait]
        impl stub::ClusterManager for ClusterManager {
            async fn get_cluster(&self, req: model::GetClusterRequest, context: AttemptContext) -> Result<model::Cluster>;
            async fn create_cluster(&self, req: model::CreateClusterRequest, context: AttemptContext) -> Result<model::Operation>;
        }
    }

    #[derive(Clone, Debug, Default)]
    struct CapturedSpan {
        name: String,
        attributes: HashMap<String, String>,
    }

    struct Visitor<'a>(&'a mut HashMap<String, String>);

    impl field::Visit for Visitor<'_> {
        fn record_str(&mut self, field: &field::Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }

        fn record_u64(&mut self, field: &field::Field, value: u64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_i64(&mut self, field: &field::Field, value: i64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        closed: Arc<Mutex<Vec<CapturedSpan>>>,
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
            let mut captured = CapturedSpan {
                name: attrs.metadata().name().to_string(),
                ..CapturedSpan::default()
            };
            attrs.record(&mut Visitor(&mut captured.attributes));
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(captured);
            }
        }

        fn on_record(&self, id: &span::Id, values: &span::Record<'_>, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(id) {
                if let Some(captured) = span.extensions_mut().get_mut::<CapturedSpan>() {
                    values.record(&mut Visitor(&mut captured.attributes));
                }
            }
        }

        fn on_close(&self, id: span::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                if let Some(captured) = span.extensions().get::<CapturedSpan>() {
                    self.closed.lock().unwrap().push(captured.clone());
                }
            }
        }
    }

    impl CaptureLayer {
        fn spans(&self, name: &str) -> Vec<CapturedSpan> {
            self.closed
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.name == name)
                .cloned()
                .collect()
        }
    }

    fn attribute<'a>(span: &'a CapturedSpan, key: &str) -> Option<&'a str> {
        span.attributes.get(key).map(String::as_str)
    }

    #[tokio::test]
    async fn spans() -> anyhow::Result<()> {
        let layer = CaptureLayer::default();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(layer.clone()));

        let mut mock = MockClusterManager::new();
        mock.expect_get_cluster()
            .return_once(|_, _| Ok(model::Cluster::new().set_name("c")));
        mock.expect_create_cluster().return_once(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::NotFound)
                    .set_message("location not found"),
            ))
        });
        let client = ClusterManager::builder()
            .with_transport(Arc::new(mock))
            .with_tracing()
            .build()
            .await?;

        client
            .get_cluster("projects/p/locations/l/clusters/c")
            .send()
            .await?;
        let err = client
            .create_cluster("projects/p/locations/l", model::Cluster::new())
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::NotFound), "{err:?}");

        let spans = layer.spans("client_request");
        assert_eq!(spans.len(), 2, "{spans:?}");

        let ok = &spans[0];
        assert_eq!(attribute(ok, "rpc.system"), Some("http"));
        assert_eq!(
            attribute(ok, "rpc.service"),
            Some("google.container.v1.ClusterManager")
        );
        assert_eq!(attribute(ok, "rpc.method"), Some("GetCluster"));
        assert_eq!(attribute(ok, "gcp.client.attempt"), Some("1"));
        assert_eq!(attribute(ok, "otel.status_code"), Some("OK"));
        assert_eq!(attribute(ok, "error.type"), None);

        let failed = &spans[1];
        assert_eq!(attribute(failed, "rpc.method"), Some("CreateCluster"));
        assert_eq!(attribute(failed, "otel.status_code"), Some("ERROR"));
        assert_eq!(attribute(failed, "error.type"), Some("NOT_FOUND"));
        assert!(
            attribute(failed, "otel.status_description").is_some_and(|d| d.contains("location not found")),
            "{failed:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn disabled_by_default() -> anyhow::Result<()> {
        let layer = CaptureLayer::default();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(layer.clone()));

        let mut mock = MockClusterManager::new();
        mock.expect_get_cluster()
            .return_once(|_, _| Ok(model::Cluster::new()));
        let client = ClusterManager::builder()
            .with_transport(Arc::new(mock))
            .build()
            .await?;
        client
            .get_cluster("projects/p/locations/l/clusters/c")
            .send()
            .await?;
        if std::env::var("GOOGLE_CLOUD_RUST_LOGGING").is_ok_and(|v| v == "true") {
            return Ok(());
        }
        assert!(layer.spans("client_request").is_empty());
        Ok(())
    }
}
