//! Device — a controllable thing with an on/off state and a power draw.

use serde::{Deserialize, Serialize};

use crate::error::{EnergyHubError, ValidationError};
use crate::id::DeviceId;

/// A controllable device tracked by energyhub.
///
/// `power_watts` is the draw while the device is on, always in watts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub is_on: bool,
    pub power_watts: f64,
}

impl Device {
    /// Create a builder for a [`Device`] with the given id.
    #[must_use]
    pub fn builder(id: impl Into<DeviceId>) -> DeviceBuilder {
        DeviceBuilder {
            id: id.into(),
            name: None,
            is_on: false,
            power_watts: 0.0,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyHubError::Validation`] when `name` is empty or
    /// `power_watts` is negative or not finite.
    pub fn validate(&self) -> Result<(), EnergyHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.power_watts.is_finite() || self.power_watts < 0.0 {
            return Err(ValidationError::InvalidPowerDraw(self.power_watts).into());
        }
        Ok(())
    }

    /// Power this device contributes to current usage, in watts.
    #[must_use]
    pub fn active_watts(&self) -> f64 {
        if self.is_on { self.power_watts } else { 0.0 }
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug)]
pub struct DeviceBuilder {
    id: DeviceId,
    name: Option<String>,
    is_on: bool,
    power_watts: f64,
}

impl DeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn is_on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    #[must_use]
    pub fn power_watts(mut self, power_watts: f64) -> Self {
        self.power_watts = power_watts;
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`EnergyHubError::Validation`] if `name` is missing or the
    /// power draw is invalid.
    pub fn build(self) -> Result<Device, EnergyHubError> {
        let device = Device {
            id: self.id,
            name: self.name.unwrap_or_default(),
            is_on: self.is_on,
            power_watts: self.power_watts,
        };
        device.validate()?;
        Ok(device)
    }
}
