pub mod models;

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA journal_mode=WAL;")
        .execute(pool)
        .await?;

    // Create tasks table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            task_name TEXT NOT NULL,
            status INTEGER NOT NULL DEFAULT 0,
            priority INTEGER NOT NULL DEFAULT 2,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (status IN (0, 1)),
            CHECK (priority BETWEEN 1 AND 3),
            CHECK (task_name != '')
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index aligned with the list ordering (priority ASC, created_at DESC)
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tasks_priority_created
        ON tasks(priority, created_at DESC)
        "#,
    )
    .execute(pool)
    .await?;

    // Create meta table for schema bookkeeping
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO meta (key, value)
        VALUES ('schema_version', '1')
        ON CONFLICT(key) DO UPDATE SET value = '1'
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
