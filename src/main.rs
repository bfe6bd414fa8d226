use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beacon::app::client::{ClientShell, TracingNotifier};
use beacon::app::hub::Hub;
use beacon::config::{AppConfig, AppMode};
use beacon::infra::{db::Db, listener::ChannelListener};
use beacon::jobs::{relay, synthetic::SyntheticFeed};
use beacon::{http, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let result = match config.app_mode {
        AppMode::Relay => run_relay(config).await,
        AppMode::Client => run_client(config).await,
    };
    if let Err(err) = &result {
        tracing::error!(error = ?err, "fatal error");
    }
    result
}

async fn run_relay(config: AppConfig) -> anyhow::Result<()> {
    let db = Db::connect(&config)
        .await
        .context("failed to connect to database")?;
    let listener = ChannelListener::connect(&db, &config.notify_channel)
        .await
        .context("failed to subscribe to notification channel")?;

    let hub = Hub::new(config.broadcast_capacity);
    let state = AppState::new(db, hub.clone());

    let _synthetic = config.synthetic_interval().map(|period| {
        SyntheticFeed::start(
            state.notifications.clone(),
            period,
            config.synthetic_probability,
        )
    });

    let app: Router = http::router(state)
        .layer(http::cors_layer(&config.cors_origin)?)
        .layer(TraceLayer::new_for_http());
    let tcp = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!("relay listening on {}", config.http_addr);

    tokio::select! {
        result = axum::serve(tcp, app).with_graceful_shutdown(shutdown_signal()) => {
            result?;
        }
        result = relay::run(listener.into_payloads(), hub) => {
            result.context("notification relay failed")?;
        }
    }

    Ok(())
}

async fn run_client(config: AppConfig) -> anyhow::Result<()> {
    let mut shell = ClientShell::mount(&config.relay_url, Arc::new(TracingNotifier)).await?;

    let connection_lost = tokio::select! {
        _ = shell.closed() => true,
        _ = shutdown_signal() => false,
    };
    if connection_lost {
        tracing::warn!("relay connection lost");
    }
    shell.teardown();

    tracing::info!(updates = shell.updates().len(), "client session ended");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
