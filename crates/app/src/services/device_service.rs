//! Device service — use-cases for querying and switching devices.

use energyhub_domain::device::Device;
use energyhub_domain::error::{EnergyHubError, NotFoundError};
use energyhub_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Application service for device queries and on/off control.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new device after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(
        skip(self, device),
        fields(device_id = %device.id, device_name = %device.name)
    )]
    pub async fn create_device(&self, device: Device) -> Result<Device, EnergyHubError> {
        device.validate()?;
        self.repo.create(device).await
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyHubError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, EnergyHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, EnergyHubError> {
        self.repo.get_all().await
    }

    /// Switch a device on or off and persist it.
    ///
    /// The device is written back exactly once per call, even when it was
    /// already in the requested state. Returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyHubError::NotFound`] when no device with `id` exists
    /// (nothing is written in that case), or a storage error from the
    /// repository.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_device(
        &self,
        id: DeviceId,
        turn_on: bool,
    ) -> Result<bool, EnergyHubError> {
        let mut device = self.get_device(id).await?;
        device.is_on = turn_on;
        self.repo.update(device).await?;
        tracing::debug!(on = turn_on, "device switched");
        Ok(turn_on)
    }

    /// List the devices that are currently on, in repository order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_active_devices(&self) -> Result<Vec<Device>, EnergyHubError> {
        let devices = self.repo.get_all().await?;
        Ok(devices.into_iter().filter(|d| d.is_on).collect())
    }
}
