//! # energyhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — device lookup, listing, and overwrite
//!   - `PlanRepository` — read and overwrite the single current plan
//!   - `Notifier` — deliver overload alerts
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — toggle devices, list the active ones
//!   - `EnergyMonitorService` — compute usage, detect overloads, update the limit
//! - Provide **in-process infrastructure** (alert broadcast) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `energyhub-domain` only (plus `tokio::sync` for channels and `chrono`
//! for alert timestamps).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod notifier;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
