//! MuchToDo API health service.
//!
//! This is the application entry point. It parses the command line, loads the
//! optional logging configuration, initializes tracing, and serves the health
//! endpoint on the fixed listen address. Any bind or serve failure is fatal.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use muchtodo_api::config::{
    AppConfig, LogFormat, LoggingConfig, DEFAULT_LOG_FILTER, LISTEN_ADDR, STARTUP_MESSAGE,
};
use muchtodo_api::{create_router, http::start_server};

/// MuchToDo API health service
#[derive(Parser, Debug)]
#[command(name = "muchtodo-api", version, about)]
struct Args {
    /// Path to an optional configuration file (logging settings only)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "muchtodo_api=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<String>, logging: &LoggingConfig) {
    // Priority: CLI > env > config file > default
    let log_filter = log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .or_else(|| logging.filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));

    match logging.format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match AppConfig::load_optional(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(args.log_level, &config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = LISTEN_ADDR,
        "Loaded configuration"
    );

    let app = create_router();

    println!("{STARTUP_MESSAGE}");

    match start_server(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, kind = ?e.io_kind(), "Server failed");
            // Reaches stderr even when the log filter is "off".
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
