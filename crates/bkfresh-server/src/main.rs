mod api;
mod middleware;
mod state;

use bkfresh_sources::{DealResolver, Resolution};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    state::SessionState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = bkfresh_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(
        env = %config.env,
        remote_enabled = config.remote_enabled(),
        local_deals = %config.local_deals,
        "starting bkfresh-server"
    );

    let session = SessionState::default();
    let resolver = DealResolver::from_config(&config)?;
    tokio::spawn(refresh_deals(resolver, session.clone()));

    let app = build_app(AppState { session });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolve the deal sources once and publish the result.
async fn refresh_deals(resolver: DealResolver, session: SessionState) {
    let Resolution { board, attempts } = resolver.resolve().await;
    tracing::debug!(?attempts, "deal resolution finished");
    session.commit(board).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
