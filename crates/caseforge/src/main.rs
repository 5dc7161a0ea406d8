mod app;
mod config;
mod handlers;
mod inference;
mod objects;
mod pagination;
mod state;
mod storage;
mod sync;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{app::create_app, config::Config, state::AppState, sync::sync_bucket};

/// Caseforge - mirror a bucket of case images and front hosted image models
#[derive(Parser, Debug)]
#[command(name = "caseforge")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the image API and the inference gateway
    Serve {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "8000", env = "PORT")]
        port: u16,
    },
    /// Mirror the configured bucket prefix into the image table, then exit
    Sync,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = Config::from_env();
    let state = AppState::new(&config).await?;

    match cli.command {
        Command::Serve { host, port } => serve(state, &config, &host, port).await,
        Command::Sync => {
            let report = sync_bucket(
                state.objects.as_ref(),
                state.image_repo.as_ref(),
                &config.s3_prefix,
                &config.s3_public_host,
            )
            .await?;

            tracing::info!(
                listed = report.listed,
                skipped = report.skipped,
                upserted = report.upserted,
                "Sync finished"
            );
            Ok(())
        }
    }
}

/// Initialize the tracing subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "caseforge=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn serve(state: AppState, config: &Config, host: &str, port: u16) -> Result<()> {
    let app = create_app(state, config.request_timeout(), config.inference_timeout());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => TcpListener::bind(format!("{host}:{port}")).await?,
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
