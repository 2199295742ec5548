use clap::Parser;
use taskdeck::cli::{self, Cli, Commands};
use taskdeck::error::Result;
use taskdeck::logging::LoggingConfig;
use taskdeck::server::TaskServer;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut log_config = LoggingConfig::from_args(cli.quiet, cli.verbose > 0, cli.json);

    // File logging drops ANSI color and gains timestamps
    match &cli.command {
        Commands::Serve { log_file, .. } => {
            if let Some(path) = log_file {
                log_config.file_output = Some(path.clone());
                log_config.color = false;
                log_config.show_timestamps = true;
            }
        },
    }

    if let Err(e) = taskdeck::logging::init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        let error_response = e.to_error_response();
        eprintln!("{}", serde_json::to_string_pretty(&error_response).unwrap());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            port,
            db,
            static_dir,
            log_file: _,
        } => {
            let port = cli::resolve_port(port);
            let db_path = cli::resolve_db_path(db);

            let server = TaskServer::new(port, db_path, static_dir);
            server.run().await?;
        },
    }

    Ok(())
}
