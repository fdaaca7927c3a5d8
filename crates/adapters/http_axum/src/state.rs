//! Shared application state for axum handlers.

use std::sync::Arc;

use energyhub_app::ports::{DeviceRepository, Notifier, PlanRepository};
use energyhub_app::services::device_service::DeviceService;
use energyhub_app::services::energy_monitor_service::EnergyMonitorService;

/// Application state shared across all axum handlers.
///
/// Generic over the device repository backing [`DeviceService`] (`DR`) and the
/// collaborators of [`EnergyMonitorService`] (`ED` devices, `PR` plan, `N`
/// notifier) to avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone`.
pub struct AppState<DR, ED, PR, N> {
    /// Device query and control service.
    pub device_service: Arc<DeviceService<DR>>,
    /// Usage, overload, and limit service.
    pub energy_service: Arc<EnergyMonitorService<ED, PR, N>>,
}

impl<DR, ED, PR, N> Clone for AppState<DR, ED, PR, N> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            energy_service: Arc::clone(&self.energy_service),
        }
    }
}

impl<DR, ED, PR, N> AppState<DR, ED, PR, N>
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        device_service: DeviceService<DR>,
        energy_service: EnergyMonitorService<ED, PR, N>,
    ) -> Self {
        Self::from_arcs(Arc::new(device_service), Arc::new(energy_service))
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when the energy service is also driven by a background task.
    pub fn from_arcs(
        device_service: Arc<DeviceService<DR>>,
        energy_service: Arc<EnergyMonitorService<ED, PR, N>>,
    ) -> Self {
        Self {
            device_service,
            energy_service,
        }
    }
}
