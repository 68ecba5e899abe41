use axum::{
    routing::{get, post},
    serve, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::handlers::{create_claim, generate_claim_files, get_claim, health, summarize_claim};
use claims_types::ports::claims_service::ClaimsService;

pub const CLAIMS_BASE_PATH: &str = "/api/v1/claims";
pub const GENERATE_ACCEPTED_MESSAGE: &str = "Files generation initiated successfully";

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

#[derive(Clone)]
pub struct HttpServer<S>
where
    S: ClaimsService,
{
    pub service: Arc<S>,
    pub config: HttpServerConfig,
}

impl<S> HttpServer<S>
where
    S: ClaimsService,
{
    pub async fn new(service: S, config: HttpServerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }

    /// Route table for the claims API, with request tracing attached.
    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        // The base path answers with and without a trailing slash.
        Router::new()
            .route(CLAIMS_BASE_PATH, get(health).post(create_claim::<S>))
            .route("/api/v1/claims/", get(health).post(create_claim::<S>))
            .route("/api/v1/claims/{claim_id}", get(get_claim::<S>))
            .route(
                "/api/v1/claims/{claim_id}/summarize",
                post(summarize_claim::<S>),
            )
            .route(
                "/api/v1/claims/{claim_id}/generate",
                post(generate_claim_files::<S>),
            )
            .layer(trace_layer)
            .with_state(self.service.clone())
    }

    /// Serves on an already bound listener until the server stops.
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let app = self.router();
        tracing::info!("claims api listening on {}", listener.local_addr()?);
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port).parse()?;
        tracing::info!("starting server on {}", addr);
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }
}
