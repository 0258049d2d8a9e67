//! HTTP scan service: `POST /scan` over the rule table

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use cleanse_core::{ScanRequest, ScanResponse};
use cleanse_security::RuleSet;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub struct ScanServer {
    pub rules: Arc<RuleSet>,
}

#[derive(Clone)]
struct AppState {
    server: Arc<ScanServer>,
}

impl ScanServer {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    pub fn router(self: Arc<Self>) -> Router {
        // Scans are requested from arbitrary web pages
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(handle_info))
            .route("/scan", post(handle_scan))
            .layer(cors)
            .with_state(AppState { server: self })
    }

    pub async fn serve(rules: Arc<RuleSet>, host: &str, port: u16) -> anyhow::Result<()> {
        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;
        Self::serve_listener(rules, listener).await
    }

    pub async fn serve_listener(rules: Arc<RuleSet>, listener: TcpListener) -> anyhow::Result<()> {
        let app = Arc::new(Self::new(rules)).router();

        info!("Scan server listening on {}", listener.local_addr()?);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// GET handler for server info/health check
async fn handle_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "cleanse",
        "version": env!("CARGO_PKG_VERSION"),
        "rules": state.server.rules.categories(),
    }))
}

/// POST /scan - Report sensitive data found in a prompt
async fn handle_scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> Json<ScanResponse> {
    let matches = state.server.rules.scan(&req.prompt);

    if !matches.is_empty() {
        let categories: Vec<&str> = matches.iter().map(|m| m.category.as_str()).collect();
        info!(found = matches.len(), ?categories, "sensitive data in scanned prompt");
    }

    Json(ScanResponse::success(matches))
}
