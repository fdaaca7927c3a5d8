//! Energy plan — the single active daily consumption limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EnergyHubError, ValidationError};

/// UTC timestamp carried by plans and alerts.
pub type Timestamp = DateTime<Utc>;

/// The current energy plan.
///
/// There is exactly one plan per installation; it carries no identity of its
/// own and is overwritten in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPlan {
    /// Daily usage limit in kilowatt-hours.
    pub daily_limit_kwh: f64,
    /// When the limit was last changed.
    pub updated_at: Timestamp,
}

impl EnergyPlan {
    /// Create a plan with the given limit, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLimit`] for negative or non-finite limits.
    pub fn new(daily_limit_kwh: f64) -> Result<Self, EnergyHubError> {
        validate_limit(daily_limit_kwh)?;
        Ok(Self {
            daily_limit_kwh,
            updated_at: Utc::now(),
        })
    }

    /// Replace the daily limit and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLimit`] for negative or non-finite
    /// limits; the plan is left untouched in that case.
    pub fn set_limit(
        &mut self,
        daily_limit_kwh: f64,
        at: Timestamp,
    ) -> Result<(), EnergyHubError> {
        validate_limit(daily_limit_kwh)?;
        self.daily_limit_kwh = daily_limit_kwh;
        self.updated_at = at;
        Ok(())
    }

    /// Whether `usage_kwh` overloads this plan.
    ///
    /// Strictly greater-than: usage equal to the limit is not an overload.
    #[must_use]
    pub fn is_exceeded_by(&self, usage_kwh: f64) -> bool {
        usage_kwh > self.daily_limit_kwh
    }
}

/// Zero is a valid limit; negatives, NaN, and infinities are not.
fn validate_limit(daily_limit_kwh: f64) -> Result<(), ValidationError> {
    if daily_limit_kwh.is_finite() && daily_limit_kwh >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidLimit(daily_limit_kwh))
    }
}
