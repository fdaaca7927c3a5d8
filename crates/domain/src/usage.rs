//! Usage math — aggregate draw of active devices in kilowatt-hours.

use crate::device::Device;

const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Sum the draw of every device that is on and convert it to kWh.
///
/// Devices that are off are ignored entirely. Returns `0.0` for an empty
/// slice.
#[must_use]
pub fn current_usage_kwh(devices: &[Device]) -> f64 {
    let watts: f64 = devices.iter().map(Device::active_watts).sum();
    watts / WATTS_PER_KILOWATT
}
