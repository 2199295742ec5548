use crate::db::models::Task;
use crate::error::{Result, TaskError};
use chrono::Utc;
use sqlx::SqlitePool;

pub struct TaskManager<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TaskManager<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every task, highest priority first, newest first within a priority.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, task_name, status, priority, created_at
            FROM tasks
            ORDER BY priority ASC, created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(tasks)
    }

    /// Add a new task. Status starts at 0 (incomplete).
    pub async fn add_task(&self, task_name: &str, priority: i32) -> Result<Task> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (task_name, status, priority, created_at)
            VALUES (?, 0, ?, ?)
            "#,
        )
        .bind(task_name)
        .bind(priority)
        .bind(now)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        let task = self.get_task(id).await?;

        Ok(task)
    }

    /// Get a task by ID
    pub async fn get_task(&self, id: i64) -> Result<Task> {
        let task = self
            .find_task(id)
            .await?
            .ok_or(TaskError::TaskNotFound(id))?;

        Ok(task)
    }

    /// Look up a task by ID. None when no row matches.
    pub async fn find_task(&self, id: i64) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, task_name, status, priority, created_at
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(task)
    }

    /// Update only the supplied fields, then re-read the row.
    ///
    /// The write and the read are separate statements. A nonexistent id
    /// updates zero rows and the read returns None; callers surface that
    /// as a null body rather than a 404.
    pub async fn update_task(
        &self,
        id: i64,
        task_name: Option<&str>,
        status: Option<i32>,
        priority: Option<i32>,
    ) -> Result<Option<Task>> {
        // Build dynamic update query using QueryBuilder for SQL injection safety
        let mut builder: sqlx::QueryBuilder<sqlx::Sqlite> =
            sqlx::QueryBuilder::new("UPDATE tasks SET ");
        let mut has_updates = false;

        if let Some(n) = task_name {
            builder.push("task_name = ").push_bind(n);
            has_updates = true;
        }

        if let Some(s) = status {
            if has_updates {
                builder.push(", ");
            }
            builder.push("status = ").push_bind(s);
            has_updates = true;
        }

        if let Some(p) = priority {
            if has_updates {
                builder.push(", ");
            }
            builder.push("priority = ").push_bind(p);
            has_updates = true;
        }

        if !has_updates {
            return self.find_task(id).await;
        }

        builder.push(" WHERE id = ").push_bind(id);

        builder.build().execute(self.pool).await?;

        self.find_task(id).await
    }

    /// Flip status between 0 and 1 in place, then re-read the row.
    pub async fn toggle_task(&self, id: i64) -> Result<Option<Task>> {
        sqlx::query("UPDATE tasks SET status = NOT status WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        self.find_task(id).await
    }

    /// Delete a task. TaskNotFound when no row matched.
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TaskError::TaskNotFound(id));
        }

        Ok(())
    }
}
