use crate::{config::Config, routes::api_routes, telemetry::Metrics};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use axum_otel_metrics::HttpMetricsLayerBuilder;
use rekognition_client::FaceSearch;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::broadcast::Receiver, task::JoinHandle};
use tower_http::cors::{Any, CorsLayer};

// One base64 frame in a JSON envelope; larger bodies are rejected at the
// extractor before any decoding happens.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub struct AppState<S: FaceSearch> {
    pub search: Arc<S>,
    pub metrics: Arc<Metrics>,
}

impl<S: FaceSearch> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            search: self.search.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    pub async fn new<S: FaceSearch>(search: Arc<S>, config: &Config) -> anyhow::Result<Self> {
        let addr = config.server.get_address();

        let metrics = Arc::new(Metrics::new());
        let metrics_layer = HttpMetricsLayerBuilder::new().build();

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app_state = AppState { search, metrics };

        let router = Router::new()
            .merge(api_routes())
            .with_state(app_state)
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(cors)
            .layer(metrics_layer);

        let listener = TcpListener::bind(addr).await?;

        Ok(Self { router, listener })
    }

    pub async fn run(
        self,
        shutdown_rx: Receiver<()>,
    ) -> anyhow::Result<JoinHandle<anyhow::Result<()>>> {
        tracing::info!("Starting app on {}", &self.listener.local_addr()?);

        let listener = self.listener;
        let router = self.router;
        let server_handle = tokio::spawn({
            let mut shutdown_rx = shutdown_rx.resubscribe();
            async move {
                let server = axum::serve(listener, router);
                server
                    .with_graceful_shutdown(async move {
                        shutdown_rx.recv().await.ok();
                    })
                    .await?;
                Ok(())
            }
        });

        Ok(server_handle)
    }
}
