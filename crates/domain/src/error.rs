//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`EnergyHubError`] via `From`.

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A device was given an empty display name.
    #[error("name must not be empty")]
    EmptyName,

    /// A device power draw was negative, NaN, or infinite.
    #[error("power draw must be a non-negative number of watts, got {0}")]
    InvalidPowerDraw(f64),

    /// A daily limit was negative, NaN, or infinite.
    #[error("daily limit must be a non-negative number of kWh, got {0}")]
    InvalidLimit(f64),
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of thing that was looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}

/// Top-level error for every energyhub operation.
#[derive(Debug, thiserror::Error)]
pub enum EnergyHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Opaque failure from a persistence adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Opaque failure from a notification adapter.
    #[error("notification error")]
    Notification(#[source] Box<dyn std::error::Error + Send + Sync>),
}
