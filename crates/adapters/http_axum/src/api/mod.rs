//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod energy;

use axum::Router;
use axum::routing::{get, post, put};

use energyhub_app::ports::{DeviceRepository, Notifier, PlanRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<DR, ED, PR, N>() -> Router<AppState<DR, ED, PR, N>>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    Router::new()
        // Devices
        .route(
            "/devices",
            get(devices::list::<DR, ED, PR, N>).post(devices::create::<DR, ED, PR, N>),
        )
        .route("/devices/active", get(devices::list_active::<DR, ED, PR, N>))
        .route("/devices/{id}", get(devices::get::<DR, ED, PR, N>))
        .route(
            "/devices/{id}/power",
            put(devices::set_power::<DR, ED, PR, N>),
        )
        // Energy
        .route("/energy/usage", get(energy::usage::<DR, ED, PR, N>))
        .route(
            "/energy/plan",
            get(energy::get_plan::<DR, ED, PR, N>).put(energy::update_plan::<DR, ED, PR, N>),
        )
        .route("/energy/check", post(energy::check::<DR, ED, PR, N>))
}
