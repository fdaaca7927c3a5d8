//! # energyhubd — energyhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars) and initialise logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Run the periodic overload check in the background
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use energyhub_adapter_http_axum::state::AppState;
use energyhub_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteDeviceRepository, SqlitePlanRepository,
};
use energyhub_app::notifier::InProcessNotifier;
use energyhub_app::ports::{DeviceRepository, Notifier, PlanRepository};
use energyhub_app::services::device_service::DeviceService;
use energyhub_app::services::energy_monitor_service::EnergyMonitorService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let notifier = Arc::new(InProcessNotifier::new(64));
    let device_service = Arc::new(DeviceService::new(SqliteDeviceRepository::new(
        pool.clone(),
    )));
    let energy_service = Arc::new(EnergyMonitorService::new(
        SqliteDeviceRepository::new(pool.clone()),
        SqlitePlanRepository::new(pool),
        notifier,
    ));

    if let Some(limit) = config.monitor.daily_limit_kwh {
        energy_service.update_energy_limit(limit).await?;
    }

    if let Some(period) = config.check_interval() {
        tokio::spawn(watch_overload(Arc::clone(&energy_service), period));
    }

    // HTTP
    let state = AppState::from_arcs(device_service, energy_service);
    let app = energyhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "energyhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("energyhubd stopped");
    Ok(())
}

/// Run `check_for_overload` every `period` until the process exits.
///
/// Failures are logged and the next tick tries again.
async fn watch_overload<D, P, N>(service: Arc<EnergyMonitorService<D, P, N>>, period: Duration)
where
    D: DeviceRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if let Err(err) = service.check_for_overload().await {
            tracing::error!(error = ?err, "overload check failed");
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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

    tracing::info!("shutdown signal received");
}
