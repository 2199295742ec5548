use serde::{Deserialize, Serialize};

/// Create task request. `task_name` stays optional so a missing field
/// reaches the handler's own validation instead of a deserialize reject.
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub task_name: Option<String>,
    pub priority: Option<i32>,
}

/// Update task request, all fields optional
#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub task_name: Option<String>,
    pub status: Option<i32>,
    pub priority: Option<i32>,
}

/// Confirmation body for delete
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
