use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row in the tasks table. Serialized as-is on every API response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub task_name: String,
    pub status: i32,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.status == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_task(id: i64, name: &str, status: i32, priority: i32) -> Task {
        Task {
            id,
            task_name: name.to_string(),
            status,
            priority,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_task_serialization() {
        let task = create_test_task(1, "Buy milk", 0, 2);

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"task_name\":\"Buy milk\""));
        assert!(json.contains("\"status\":0"));
        assert!(json.contains("\"priority\":2"));
        assert!(json.contains("created_at"));
    }

    #[test]
    fn test_task_deserialization_round_trip() {
        let task = create_test_task(7, "Write report", 1, 1);

        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.task_name, "Write report");
        assert_eq!(parsed.status, 1);
        assert_eq!(parsed.priority, 1);
    }

    #[test]
    fn test_is_complete() {
        assert!(!create_test_task(1, "a", 0, 2).is_complete());
        assert!(create_test_task(2, "b", 1, 2).is_complete());
    }
}
