use axum::{
    routing::{get, patch, put},
    Router,
};

use super::handlers;
use super::server::AppState;

/// Create API router with all task endpoints
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .route("/tasks/:id/toggle", patch(handlers::toggle_task))
}
