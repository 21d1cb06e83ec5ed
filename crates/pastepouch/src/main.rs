mod app;
mod cli;
mod config;
mod handlers;
mod startup;
mod state;
mod storage;

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    cli::Menu,
    config::{load_env_file, Config, EnvFile, Mode, StorageTarget},
    state::AppState,
    storage::SqliteStore,
};

const ENV_FILE: &str = ".env";

/// PastePouch - Store users and their pastes behind HTTP or an interactive menu
#[derive(Parser, Debug)]
#[command(name = "pastepouch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "127.0.0.1", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8080", env = "PORT")]
    port: u16,

    /// Database to use (prompted when omitted)
    #[arg(long, value_enum)]
    target: Option<StorageTarget>,

    /// Front end to run (prompted when omitted)
    #[arg(long, value_enum)]
    mode: Option<Mode>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Loaded first so HOST/PORT from the file reach the flag defaults
    let env_file = load_env_file(Path::new(ENV_FILE))?;
    let cli = Cli::parse();

    // Logs go to stderr so the menu's stdout stays plain JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pastepouch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if env_file == EnvFile::Missing {
        tracing::warn!(path = ENV_FILE, "No environment file, using process environment only");
    }

    let config = Config::from_env();
    let target = startup::resolve_target(cli.target);
    let mode = startup::resolve_mode(cli.mode);

    let location = config.database_location(target)?;
    let store = SqliteStore::open(&location).await.with_context(|| {
        format!(
            "failed to open {:?} database at {}",
            target,
            config.display_location(target)
        )
    })?;
    tracing::info!(
        ?target,
        location = config.display_location(target),
        "Database ready"
    );

    let state = AppState::new(Arc::new(store));

    match mode {
        Mode::Http => serve(cli, &config, state).await,
        Mode::Cli => {
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout();
            Menu::new(state, stdin, stdout).run().await?;
            Ok(())
        }
    }
}

async fn serve(cli: Cli, config: &Config, state: AppState) -> Result<()> {
    let app = create_app(state, config.cors_origin()?);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
///
/// A signal handler that cannot be installed is logged and never fires.
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
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
