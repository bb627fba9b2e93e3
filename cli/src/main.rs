//! Server entrypoint for bfhl-service
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use bfhl_application::{ComputeUseCase, HealthCheckUseCase};
use bfhl_domain::LogFormat;
use bfhl_infrastructure::{ConfigLoader, FileConfig, FileLoggingConfig, GeminiAnswerGateway};
use bfhl_presentation::{AppState, Cli, HttpConfig, build_router};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// File name prefix for rolling log files.
const LOG_FILE_PREFIX: &str = "bfhl-server.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {e}"))?;
    apply_cli_overrides(&cli, &mut config);

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(&cli, &config.logging);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting bfhl-server");

    let issues = config.validate();
    for issue in &issues {
        if issue.is_fatal() {
            error!(code = ?issue.code, "{}", issue.message);
        } else {
            warn!(code = ?issue.code, "{}", issue.message);
        }
    }
    if issues.iter().any(|issue| issue.is_fatal()) {
        bail!("Invalid configuration; see the errors above");
    }

    // === Dependency Injection ===
    let service_config = Arc::new(config.to_service_config());

    let mut compute = ComputeUseCase::new(service_config.clone());
    if let Some(gemini) = config.ai.to_gemini_config() {
        info!(model = %gemini.model, "AI operation enabled");
        let gateway = GeminiAnswerGateway::new(gemini).context("Failed to create answer gateway")?;
        compute = compute.with_answer_gateway(Arc::new(gateway));
    }

    let state = AppState::new(compute, HealthCheckUseCase::new(service_config));
    let http = HttpConfig::default()
        .with_body_limit(config.server.body_limit_bytes)
        .with_cors(config.server.cors);
    let router = build_router(state, &http);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// CLI flags take precedence over every config source.
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = &cli.log_dir {
        config.logging.directory = Some(dir.clone());
    }
    config.logging.format = cli.log_format(config.logging.format);
}

/// Install the global subscriber: stderr, plus a daily-rolling file when
/// a log directory is configured.
///
/// `RUST_LOG` wins over the `-v` level.
fn init_logging(cli: &Cli, logging: &FileLoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let json = logging.format == LogFormat::Json;

    let stderr_layer = if json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match &logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = if json {
                fmt::layer().json().with_writer(writer).boxed()
            } else {
                fmt::layer().with_ansi(false).with_writer(writer).boxed()
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "bfhl-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--log-json",
            "--log-dir",
            "/tmp/bfhl-logs",
        ]);
        let mut config = FileConfig::default();
        apply_cli_overrides(&cli, &mut config);

        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.directory, Some(PathBuf::from("/tmp/bfhl-logs")));
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["bfhl-server"]);
        let mut config = FileConfig::default();
        config.server.port = 4000;
        config.logging.format = LogFormat::Json;
        apply_cli_overrides(&cli, &mut config);

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.logging.directory.is_none());
    }
}
