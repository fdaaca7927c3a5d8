//! Storage ports — repository traits for persistence.

use std::future::Future;

use energyhub_domain::device::Device;
use energyhub_domain::energy_plan::EnergyPlan;
use energyhub_domain::error::EnergyHubError;
use energyhub_domain::id::DeviceId;

/// Repository for persisting and querying [`Device`]s.
pub trait DeviceRepository {
    /// Create a new device in storage.
    fn create(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Device, EnergyHubError>> + Send;

    /// Get a device by its identifier.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, EnergyHubError>> + Send;

    /// Get all devices, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, EnergyHubError>> + Send;

    /// Overwrite an existing device, matched by id.
    fn update(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Device, EnergyHubError>> + Send;
}

/// Repository holding the single current [`EnergyPlan`].
pub trait PlanRepository {
    /// Get the current plan.
    fn get_current_plan(
        &self,
    ) -> impl Future<Output = Result<EnergyPlan, EnergyHubError>> + Send;

    /// Overwrite the current plan.
    fn update_plan(
        &self,
        plan: EnergyPlan,
    ) -> impl Future<Output = Result<EnergyPlan, EnergyHubError>> + Send;
}
