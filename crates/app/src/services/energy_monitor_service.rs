//! Energy monitor service — usage aggregation, overload alerts, and the
//! daily limit.
//!
//! Usage is always recomputed from the device repository; nothing is cached
//! between calls.

use chrono::Utc;
use energyhub_domain::energy_plan::EnergyPlan;
use energyhub_domain::error::EnergyHubError;
use energyhub_domain::usage::current_usage_kwh;

use crate::ports::{DeviceRepository, Notifier, PlanRepository};

/// Application service watching consumption against the current plan.
pub struct EnergyMonitorService<D, P, N> {
    devices: D,
    plans: P,
    notifier: N,
}

impl<D, P, N> EnergyMonitorService<D, P, N>
where
    D: DeviceRepository,
    P: PlanRepository,
    N: Notifier,
{
    /// Create a new service from its collaborators.
    pub fn new(devices: D, plans: P, notifier: N) -> Self {
        Self {
            devices,
            plans,
            notifier,
        }
    }

    /// Current consumption of every device that is on, in kWh.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the device repository.
    pub async fn calculate_current_usage_kwh(&self) -> Result<f64, EnergyHubError> {
        let devices = self.devices.get_all().await?;
        Ok(current_usage_kwh(&devices))
    }

    /// Compare current usage to the plan and alert on overload.
    ///
    /// Sends exactly one alert when usage is strictly above the daily limit
    /// and none otherwise.
    ///
    /// # Errors
    ///
    /// Returns storage errors from either repository, or a notification
    /// error from the notifier.
    #[tracing::instrument(skip(self))]
    pub async fn check_for_overload(&self) -> Result<(), EnergyHubError> {
        let usage_kwh = self.calculate_current_usage_kwh().await?;
        let plan = self.plans.get_current_plan().await?;

        if !plan.is_exceeded_by(usage_kwh) {
            tracing::debug!(
                usage_kwh,
                limit_kwh = plan.daily_limit_kwh,
                "usage within limit"
            );
            return Ok(());
        }

        let message = format!(
            "Energy usage of {usage_kwh:.3} kWh exceeds the daily limit of {:.3} kWh",
            plan.daily_limit_kwh
        );
        self.notifier.send_alert(message).await
    }

    /// Read the current plan.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the plan repository.
    pub async fn current_plan(&self) -> Result<EnergyPlan, EnergyHubError> {
        self.plans.get_current_plan().await
    }

    /// Replace the daily limit of the current plan and persist it.
    ///
    /// Zero is accepted. Negative and non-finite limits are rejected before
    /// the repository is written.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyHubError::Validation`] for an invalid limit, or a
    /// storage error from the plan repository.
    #[tracing::instrument(skip(self))]
    pub async fn update_energy_limit(&self, new_limit: f64) -> Result<EnergyPlan, EnergyHubError> {
        let mut plan = self.plans.get_current_plan().await?;
        let previous = plan.daily_limit_kwh;
        plan.set_limit(new_limit, Utc::now())?;
        let saved = self.plans.update_plan(plan).await?;
        tracing::info!(
            previous,
            limit_kwh = saved.daily_limit_kwh,
            "daily limit updated"
        );
        Ok(saved)
    }
}
