use super::{prometheus, samples};
use crate::catalog::FieldDescriptor;
use crate::extract::extract;
use crate::source::ReportSource;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, decompression::RequestDecompressionLayer};
use tracing::{debug, info};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

pub struct AppState {
    fields: &'static [FieldDescriptor],
    source: Box<dyn ReportSource>,
}

impl AppState {
    pub fn new(fields: &'static [FieldDescriptor], source: Box<dyn ReportSource>) -> Self {
        Self { fields, source }
    }

    /// Acquires fresh reports and renders them. Nothing is cached between
    /// calls.
    pub async fn render(&self) -> String {
        let start = Instant::now();

        let reports = self.source.fetch().await;
        let snapshot = extract(self.fields, &reports);
        let samples = samples(self.fields, &snapshot);

        debug!(
            "scrape: {} of {} fields in {} us",
            samples.len(),
            self.fields.len(),
            start.elapsed().as_micros()
        );

        prometheus::encode(&samples)
    }
}

pub async fn serve(listen: SocketAddr, path: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = app(path, state);

    let listener = TcpListener::bind(listen).await?;

    info!("listening on http://{listen}{path}");

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn app(path: &str, state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route(path, get(metrics))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new()),
        )
}

async fn root() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("Open vSwitch datapath exporter {version}\n")
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.render().await;

    ([(header::CONTENT_TYPE, prometheus::CONTENT_TYPE)], body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FIELDS;
    use crate::source::StaticSource;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const PMD_STATS: &str = "\
pmd thread numa_id 0 core_id 11:
  miss with success upcall: 33284747
  miss with failed upcall: 10620
  idle cycles: 731072761249336 (99.80%)
  processing cycles: 1492654477083 (0.20%)
";

    const COVERAGE: &str = "\
datapath_drop_meter   0.0/sec     0.000/sec        0.0000/sec   total: 8
doca_pipe_resize  0.0/sec     0.000/sec        0.0000/sec   total: 25
";

    fn state(pmd_stats: &str, coverage: &str) -> Arc<AppState> {
        Arc::new(AppState::new(
            &FIELDS,
            Box::new(StaticSource::new(pmd_stats, coverage)),
        ))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn render_only_present_fields() {
        let body = state(PMD_STATS, COVERAGE).render().await;

        assert!(body.contains("# TYPE ovsdp_miss_with_success_upcall counter\n"));
        assert!(body.contains("ovsdp_miss_with_success_upcall 33284747\n"));
        assert!(body.contains("# TYPE ovsdp_idle_cycles gauge\n"));
        assert!(body.contains("ovsdp_idle_cycles 99.8\n"));
        assert!(body.contains("ovsdp_processing_cycles 0.2\n"));
        assert!(body.contains("ovsdp_datapath_drop_meter 8\n"));
        assert!(body.contains("ovsdp_doca_pipe_resize 25\n"));

        assert!(!body.contains("ovsdp_avg_subtable_lookups_megaflow"));
        assert!(!body.contains("ovsdp_doca_pipe_resize_over_10_ms"));
        assert_eq!(body.lines().filter(|l| !l.starts_with('#')).count(), 6);
    }

    #[tokio::test]
    async fn render_empty_reports() {
        assert_eq!(state("", "").render().await, "");
    }

    #[tokio::test]
    async fn metrics_endpoint() {
        let app = app("/metrics", state(PMD_STATS, COVERAGE));
        let (status, body) = get_body(app, "/metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ovsdp_miss_with_failed_upcall 10620\n"));
    }

    #[tokio::test]
    async fn custom_path() {
        let app = app("/ovs", state(PMD_STATS, COVERAGE));

        let (status, body) = get_body(app.clone(), "/ovs").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ovsdp_datapath_drop_meter 8\n"));

        let (status, _) = get_body(app, "/metrics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn root_banner() {
        let app = app("/metrics", state("", ""));
        let (status, body) = get_body(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("Open vSwitch datapath exporter"));
    }
}
