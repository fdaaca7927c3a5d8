//! Recording test doubles for the port traits.
//!
//! Each double is `Clone` and shares its state, so a test can hand one copy to
//! a service and keep another to inspect the calls afterwards.

use std::sync::{Arc, Mutex};

use energyhub_domain::device::Device;
use energyhub_domain::energy_plan::EnergyPlan;
use energyhub_domain::error::EnergyHubError;
use energyhub_domain::id::DeviceId;

use crate::ports::{DeviceRepository, Notifier, PlanRepository};

pub fn device(id: i64, is_on: bool, power_watts: f64) -> Device {
    Device {
        id: DeviceId::new(id),
        name: format!("device-{id}"),
        is_on,
        power_watts,
    }
}

#[derive(Clone, Default)]
pub struct RecordingDeviceRepo {
    devices: Arc<Mutex<Vec<Device>>>,
    updates: Arc<Mutex<Vec<Device>>>,
}

impl RecordingDeviceRepo {
    pub fn with(devices: Vec<Device>) -> Self {
        Self {
            devices: Arc::new(Mutex::new(devices)),
            updates: Arc::default(),
        }
    }

    /// Every device passed to `update`, in call order.
    pub fn updates(&self) -> Vec<Device> {
        self.updates.lock().unwrap().clone()
    }

    pub fn stored(&self, id: i64) -> Option<Device> {
        let devices = self.devices.lock().unwrap();
        devices.iter().find(|d| d.id == DeviceId::new(id)).cloned()
    }
}

impl DeviceRepository for RecordingDeviceRepo {
    async fn create(&self, device: Device) -> Result<Device, EnergyHubError> {
        self.devices.lock().unwrap().push(device.clone());
        Ok(device)
    }

    async fn get_by_id(&self, id: DeviceId) -> Result<Option<Device>, EnergyHubError> {
        let devices = self.devices.lock().unwrap();
        Ok(devices.iter().find(|d| d.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Device>, EnergyHubError> {
        Ok(self.devices.lock().unwrap().clone())
    }

    async fn update(&self, device: Device) -> Result<Device, EnergyHubError> {
        self.updates.lock().unwrap().push(device.clone());
        let mut devices = self.devices.lock().unwrap();
        if let Some(slot) = devices.iter_mut().find(|d| d.id == device.id) {
            *slot = device.clone();
        }
        Ok(device)
    }
}

#[derive(Clone)]
pub struct RecordingPlanRepo {
    plan: Arc<Mutex<EnergyPlan>>,
    updates: Arc<Mutex<Vec<EnergyPlan>>>,
}

impl RecordingPlanRepo {
    pub fn with_limit(daily_limit_kwh: f64) -> Self {
        Self {
            plan: Arc::new(Mutex::new(EnergyPlan::new(daily_limit_kwh).unwrap())),
            updates: Arc::default(),
        }
    }

    /// Every plan passed to `update_plan`, in call order.
    pub fn updates(&self) -> Vec<EnergyPlan> {
        self.updates.lock().unwrap().clone()
    }
}

impl PlanRepository for RecordingPlanRepo {
    async fn get_current_plan(&self) -> Result<EnergyPlan, EnergyHubError> {
        Ok(self.plan.lock().unwrap().clone())
    }

    async fn update_plan(&self, plan: EnergyPlan) -> Result<EnergyPlan, EnergyHubError> {
        self.updates.lock().unwrap().push(plan.clone());
        *self.plan.lock().unwrap() = plan.clone();
        Ok(plan)
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    async fn send_alert(&self, message: String) -> Result<(), EnergyHubError> {
        self.alerts.lock().unwrap().push(message);
        Ok(())
    }
}

/// Rejects every alert with a notification error.
pub struct UnreachableNotifier;

impl Notifier for UnreachableNotifier {
    async fn send_alert(&self, _message: String) -> Result<(), EnergyHubError> {
        Err(EnergyHubError::Notification(Box::new(std::io::Error::other(
            "notifier unreachable",
        ))))
    }
}

/// Fails every call with a storage error.
pub struct BrokenStore;

fn broken() -> EnergyHubError {
    EnergyHubError::Storage(Box::new(std::io::Error::other("store unavailable")))
}

impl DeviceRepository for BrokenStore {
    async fn create(&self, _device: Device) -> Result<Device, EnergyHubError> {
        Err(broken())
    }

    async fn get_by_id(&self, _id: DeviceId) -> Result<Option<Device>, EnergyHubError> {
        Err(broken())
    }

    async fn get_all(&self) -> Result<Vec<Device>, EnergyHubError> {
        Err(broken())
    }

    async fn update(&self, _device: Device) -> Result<Device, EnergyHubError> {
        Err(broken())
    }
}

impl PlanRepository for BrokenStore {
    async fn get_current_plan(&self) -> Result<EnergyPlan, EnergyHubError> {
        Err(broken())
    }

    async fn update_plan(&self, _plan: EnergyPlan) -> Result<EnergyPlan, EnergyHubError> {
        Err(broken())
    }
}
