//! # energyhub-domain
//!
//! Pure domain model for the energyhub energy management core.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Devices** (controllable things with an on/off state and a power draw)
//! - Define the **Energy Plan** (the single active daily limit)
//! - Define **Usage** math (watts of active devices → kilowatt-hours)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod energy_plan;
pub mod usage;
