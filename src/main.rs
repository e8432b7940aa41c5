//! Pokedex - An interactive PokeAPI client
//!
//! Reads commands from stdin, prints results to stdout, logs to stderr.

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::repl::spawn_stdin_reader;
use pokedex::{Config, PokeApiClient, Repl, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cached API client (starts the cache reaper)
/// 4. Run the REPL until `exit`, end of input, Ctrl+C or SIGTERM
/// 5. Stop the cache reaper
///
/// Stdin is read on a detached OS thread, so a pending read never keeps
/// the process alive once the REPL has stopped.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so the prompt stays readable; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}ms, reap_period={}ms, base_url={}",
        config.cache_interval().as_millis(),
        config.reap_period().as_millis(),
        config.base_url
    );

    let client = PokeApiClient::from_config(&config).context("Failed to create PokeAPI client")?;
    let mut repl = Repl::new(client, Session::new(config.start_location.clone()));

    let mut lines = spawn_stdin_reader();
    let mut stdout = std::io::stdout();
    tokio::select! {
        result = repl.run_channel(&mut lines, &mut stdout) => {
            result.context("REPL terminated with an error")?;
        }
        _ = shutdown_signal() => {
            println!();
        }
    }

    repl.client().shutdown().await;
    info!("Pokedex closed");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
