//! JSON REST handlers for usage, the plan, and overload checks.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use energyhub_app::ports::{DeviceRepository, Notifier, PlanRepository};
use energyhub_domain::energy_plan::EnergyPlan;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for the usage endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct UsageBody {
    pub usage_kwh: f64,
}

/// Request body for changing the daily limit.
#[derive(Deserialize)]
pub struct UpdateLimitRequest {
    pub daily_limit_kwh: f64,
}

/// Possible responses from the usage endpoint.
pub enum UsageResponse {
    Ok(Json<UsageBody>),
}

impl IntoResponse for UsageResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the plan endpoints.
pub enum PlanResponse {
    Ok(Json<EnergyPlan>),
}

impl IntoResponse for PlanResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the check endpoint.
pub enum CheckResponse {
    NoContent,
}

impl IntoResponse for CheckResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/energy/usage`
pub async fn usage<DR, ED, PR, N>(
    State(state): State<AppState<DR, ED, PR, N>>,
) -> Result<UsageResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let usage_kwh = state.energy_service.calculate_current_usage_kwh().await?;
    Ok(UsageResponse::Ok(Json(UsageBody { usage_kwh })))
}

/// `GET /api/energy/plan`
pub async fn get_plan<DR, ED, PR, N>(
    State(state): State<AppState<DR, ED, PR, N>>,
) -> Result<PlanResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let plan = state.energy_service.current_plan().await?;
    Ok(PlanResponse::Ok(Json(plan)))
}

/// `PUT /api/energy/plan`
pub async fn update_plan<DR, ED, PR, N>(
    State(state): State<AppState<DR, ED, PR, N>>,
    Json(req): Json<UpdateLimitRequest>,
) -> Result<PlanResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let plan = state
        .energy_service
        .update_energy_limit(req.daily_limit_kwh)
        .await?;
    Ok(PlanResponse::Ok(Json(plan)))
}

/// `POST /api/energy/check`
pub async fn check<DR, ED, PR, N>(
    State(state): State<AppState<DR, ED, PR, N>>,
) -> Result<CheckResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    state.energy_service.check_for_overload().await?;
    Ok(CheckResponse::NoContent)
}
