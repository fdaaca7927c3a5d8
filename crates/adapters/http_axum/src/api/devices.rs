//! JSON REST handlers for devices.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use energyhub_app::ports::{DeviceRepository, Notifier, PlanRepository};
use energyhub_domain::device::Device;
use energyhub_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a device.
#[derive(Deserialize)]
pub struct CreateDeviceRequest {
    pub id: i64,
    pub name: String,
    pub power_watts: f64,
    #[serde(default)]
    pub is_on: bool,
}

/// Request and response body for switching a device.
#[derive(Debug, Deserialize, Serialize)]
pub struct PowerState {
    pub on: bool,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Device>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the power endpoint.
pub enum PowerResponse {
    Ok(Json<PowerState>),
}

impl IntoResponse for PowerResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<DeviceId, ApiError> {
    DeviceId::from_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// `GET /api/devices`
pub async fn list<DR, ED, PR, N>(
    State(state): State<AppState<DR, ED, PR, N>>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/active`
pub async fn list_active<DR, ED, PR, N>(
    State(state): State<AppState<DR, ED, PR, N>>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let devices = state.device_service.get_active_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/{id}`
pub async fn get<DR, ED, PR, N>(
    State(state): State<AppState<DR, ED, PR, N>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let device = state.device_service.get_device(parse_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /api/devices`
pub async fn create<DR, ED, PR, N>(
    State(state): State<AppState<DR, ED, PR, N>>,
    Json(req): Json<CreateDeviceRequest>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let device = Device::builder(req.id)
        .name(req.name)
        .power_watts(req.power_watts)
        .is_on(req.is_on)
        .build()?;
    let created = state.device_service.create_device(device).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/devices/{id}/power`
pub async fn set_power<DR, ED, PR, N>(
    State(state): State<AppState<DR, ED, PR, N>>,
    Path(id): Path<String>,
    Json(req): Json<PowerState>,
) -> Result<PowerResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let on = state
        .device_service
        .toggle_device(parse_id(&id)?, req.on)
        .await?;
    Ok(PowerResponse::Ok(Json(PowerState { on })))
}
