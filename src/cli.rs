use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_ABOUT: &str = r#"
TaskDeck - a single-user task list served over HTTP

The server persists tasks in a local SQLite database and ships its own
browser client. Point a browser at the root URL to use it; the same
endpoints accept plain JSON for scripting.

Endpoints:
  GET    /tasks              list tasks (priority first, newest first)
  POST   /tasks              create a task
  PUT    /tasks/:id          update name, status, or priority
  PATCH  /tasks/:id/toggle   flip between complete and incomplete
  DELETE /tasks/:id          delete a task

Quick start:
  taskdeck serve
  taskdeck serve --port 8080 --db ~/tasks.db
"#;

#[derive(Parser, Clone)]
#[command(name = "taskdeck")]
#[command(about = "A single-user task list with a web client, backed by SQLite")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output (-q)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output logs in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Start the task server
    ///
    /// Examples:
    ///   taskdeck serve
    ///   taskdeck serve --port 8080
    ///   taskdeck serve --db /tmp/scratch.db --log-file /tmp/taskdeck.log
    Serve {
        /// Port to bind (falls back to PORT env var, then 3000)
        #[arg(long)]
        port: Option<u16>,

        /// SQLite database path (falls back to TASKDECK_DB env var, then taskdeck.db)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Directory of client assets served at / and /static
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// Write logs to this file instead of stdout
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

/// Resolve the listen port: flag, then PORT env var, then 3000.
pub fn resolve_port(flag: Option<u16>) -> u16 {
    flag.or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(3000)
}

/// Resolve the database path: flag, then TASKDECK_DB env var, then taskdeck.db.
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var("TASKDECK_DB").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("taskdeck.db"))
}
