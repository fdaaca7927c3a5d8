//! # energyhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `energyhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `energyhub-app` (for port traits) and `energyhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_repo;
mod error;
mod plan_repo;
mod pool;

pub use device_repo::SqliteDeviceRepository;
pub use error::StorageError;
pub use plan_repo::SqlitePlanRepository;
pub use pool::{Config, Database};
