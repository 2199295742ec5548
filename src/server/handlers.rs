use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use super::models::{CreateTaskRequest, MessageResponse, UpdateTaskRequest};
use super::server::AppState;
use crate::error::{ErrorResponse, TaskError};
use crate::tasks::TaskManager;

/// Get all tasks, highest priority first, newest first within a priority
pub async fn list_tasks(State(state): State<AppState>) -> impl IntoResponse {
    let task_mgr = TaskManager::new(&state.db_pool);

    match task_mgr.list_tasks().await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(e) => {
            tracing::error!("Error fetching tasks: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch tasks".to_string(),
                    code: "INTERNAL_ERROR".to_string(),
                }),
            )
                .into_response()
        },
    }
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> impl IntoResponse {
    let task_name = match req.task_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return validation_error("Task name is required");
        },
    };

    let priority = req.priority.unwrap_or(2);
    if !(1..=3).contains(&priority) {
        return validation_error("Priority must be between 1 and 3");
    }

    let task_mgr = TaskManager::new(&state.db_pool);

    match task_mgr.add_task(task_name, priority).await {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(e) => {
            tracing::error!("Error creating task: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create task".to_string(),
                    code: "INTERNAL_ERROR".to_string(),
                }),
            )
                .into_response()
        },
    }
}

/// Update the supplied fields of a task.
///
/// A nonexistent id is not a 404 here: the update touches zero rows and
/// the follow-up read serializes as a null body with status 200.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> impl IntoResponse {
    if let Some(status) = req.status {
        if status != 0 && status != 1 {
            return validation_error("Status must be 0 (incomplete) or 1 (complete)");
        }
    }

    if let Some(priority) = req.priority {
        if !(1..=3).contains(&priority) {
            return validation_error("Priority must be between 1 and 3");
        }
    }

    if let Some(name) = req.task_name.as_deref() {
        if name.is_empty() {
            return validation_error("Task name is required");
        }
    }

    let task_mgr = TaskManager::new(&state.db_pool);

    match task_mgr
        .update_task(id, req.task_name.as_deref(), req.status, req.priority)
        .await
    {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => {
            tracing::error!("Error updating task: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update task".to_string(),
                    code: "INTERNAL_ERROR".to_string(),
                }),
            )
                .into_response()
        },
    }
}

/// Flip a task between complete and incomplete.
/// Shares the null-body edge with update for a nonexistent id.
pub async fn toggle_task(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    let task_mgr = TaskManager::new(&state.db_pool);

    match task_mgr.toggle_task(id).await {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => {
            tracing::error!("Error toggling task status: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to toggle task status".to_string(),
                    code: "INTERNAL_ERROR".to_string(),
                }),
            )
                .into_response()
        },
    }
}

/// Delete a task
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    let task_mgr = TaskManager::new(&state.db_pool);

    match task_mgr.delete_task(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Task deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e @ TaskError::TaskNotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(e.to_error_response())).into_response()
        },
        Err(e) => {
            tracing::error!("Error deleting task: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete task".to_string(),
                    code: "INTERNAL_ERROR".to_string(),
                }),
            )
                .into_response()
        },
    }
}

fn validation_error(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
            code: "VALIDATION_ERROR".to_string(),
        }),
    )
        .into_response()
}
