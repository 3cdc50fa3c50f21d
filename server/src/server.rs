//! Server setup and lifecycle.

use std::sync::Arc;

use anyhow::Context;
use config::{BrainConfig, load_from_env, load_from_file, merge_configs};
use tokio::net::TcpListener;
use tokio::signal;

use crate::cli::Cli;
use crate::routes::create_router;
use crate::state::AppState;
use crate::telemetry::{Telemetry, init_tracing};

/// The second-brain HTTP server.
pub struct BrainServer {
    state: Arc<AppState>,
    bind_address: String,
}

impl BrainServer {
    /// Builds the store and application state from a ready configuration.
    pub fn new(config: &BrainConfig) -> anyhow::Result<Self> {
        let secret = config
            .capture
            .api_secret
            .as_deref()
            .context("capture secret is not configured")?;

        let store = storage::build_store(&config.store).context("failed to build item store")?;
        let state = AppState::new(store, secret)
            .with_telemetry(Telemetry::new(config.observability.metrics_enabled));

        Ok(Self::with_state(Arc::new(state), config.server.bind_address()))
    }

    /// Creates a server around an existing `AppState`.
    pub fn with_state(state: Arc<AppState>, bind_address: String) -> Self {
        Self {
            state,
            bind_address,
        }
    }

    /// Runs the HTTP server until Ctrl+C or SIGTERM.
    pub async fn run(self) -> anyhow::Result<()> {
        let router = create_router(self.state.clone());

        let listener = TcpListener::bind(&self.bind_address)
            .await
            .with_context(|| format!("failed to bind to {}", self.bind_address))?;
        let addr = listener.local_addr()?;

        tracing::info!(%addr, "Second brain server starting");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        tracing::info!("Second brain server stopped");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

/// Signal handler for graceful shutdown.
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
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        () = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        },
    }
}

/// Resolves the configuration: defaults, then file, then environment, then
/// flags. Fails when the result cannot serve traffic.
pub fn load_config(cli: &Cli) -> anyhow::Result<BrainConfig> {
    let from_file = cli
        .config
        .as_deref()
        .map(load_from_file)
        .transpose()
        .context("failed to load configuration file")?;
    let from_env = load_from_env().map_err(|e| anyhow::anyhow!("invalid environment: {e}"))?;

    let config = merge_configs(
        BrainConfig::default(),
        from_file,
        from_env,
        Some(cli.overrides()),
    );
    config.check_ready().context("configuration is not usable")?;
    Ok(config)
}

/// Entry point: configure logging, build the server, serve.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    init_tracing(&config.observability);

    tracing::info!(
        backend = %config.store.backend,
        table = %config.store.table,
        metrics = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    BrainServer::new(&config)?.run().await
}
