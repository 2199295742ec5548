use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::db;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub static_dir: PathBuf,
}

/// Task server instance
pub struct TaskServer {
    port: u16,
    db_path: PathBuf,
    static_dir: PathBuf,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

impl TaskServer {
    pub fn new(port: u16, db_path: PathBuf, static_dir: PathBuf) -> Self {
        Self {
            port,
            db_path,
            static_dir,
        }
    }

    /// Run the server. Opens the pool and migrates before binding so a
    /// broken database aborts startup instead of failing per request.
    pub async fn run(self) -> Result<()> {
        let db_pool = db::create_pool(&self.db_path)
            .await
            .context("Failed to connect to database")?;

        db::run_migrations(&db_pool)
            .await
            .context("Failed to run migrations")?;

        let state = AppState {
            db_pool,
            static_dir: self.static_dir.clone(),
        };

        let app = create_router(state);

        let addr = format!("127.0.0.1:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;

        tracing::info!("Server running on http://{}", addr);
        tracing::info!("Database: {}", self.db_path.display());

        axum::serve(listener, app).await.context("Server error")?;

        Ok(())
    }
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    use super::routes;

    let static_dir = state.static_dir.clone();

    Router::new()
        // Root route - serve index.html
        .route("/", get(serve_index))
        // Readiness probe
        .route("/health", get(health_handler))
        // Task API at the root, no prefix
        .merge(routes::api_routes())
        // Static files under /static prefix
        .nest_service("/static", ServeDir::new(static_dir))
        // Fallback to 404
        .fallback(not_found_handler)
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serve the main index.html file
async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    match tokio::fs::read_to_string(state.static_dir.join("index.html")).await {
        Ok(content) => Html(content).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Error: index.html not found</h1>".to_string()),
        )
            .into_response(),
    }
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "taskdeck".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// 404 Not Found handler
async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not found",
            "code": "NOT_FOUND"
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            service: "taskdeck".to_string(),
            version: "1.0.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("taskdeck"));
    }

    #[tokio::test]
    async fn test_create_router_smoke() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db_pool = db::create_pool(&db_path).await.unwrap();
        db::run_migrations(&db_pool).await.unwrap();

        let state = AppState {
            db_pool,
            static_dir: temp_dir.path().join("static"),
        };

        let _router = create_router(state);
    }
}
