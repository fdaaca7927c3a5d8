//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use energyhub_app::ports::DeviceRepository;
use energyhub_domain::device::Device;
use energyhub_domain::error::EnergyHubError;
use energyhub_domain::id::DeviceId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Device {
            id: DeviceId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            is_on: row.try_get("is_on")?,
            power_watts: row.try_get("power_watts")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO devices (id, name, is_on, power_watts) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM devices WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM devices ORDER BY id";
const UPDATE: &str = "UPDATE devices SET name = ?, is_on = ?, power_watts = ? WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn create(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Device, EnergyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(device.id.get())
                .bind(&device.name)
                .bind(device.is_on)
                .bind(device.power_watts)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device)
        }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, EnergyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, EnergyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Device, EnergyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&device.name)
                .bind(device.is_on)
                .bind(device.power_watts)
                .bind(device.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteDeviceRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteDeviceRepository::new(db.pool().clone())
    }

    fn lamp() -> Device {
        Device::builder(1)
            .name("Lamp")
            .power_watts(60.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_device_when_valid() {
        let repo = setup().await;

        repo.create(lamp()).await.unwrap();

        let fetched = repo.get_by_id(DeviceId::new(1)).await.unwrap().unwrap();
        assert_eq!(fetched, lamp());
    }

    #[tokio::test]
    async fn should_return_none_when_device_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(DeviceId::new(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_devices_ordered_by_id() {
        let repo = setup().await;
        repo.create(
            Device::builder(3)
                .name("PC")
                .power_watts(250.0)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
        repo.create(lamp()).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|d| d.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn should_persist_on_state_when_updated() {
        let repo = setup().await;
        let mut device = lamp();
        repo.create(device.clone()).await.unwrap();

        device.is_on = true;
        repo.update(device).await.unwrap();

        let fetched = repo.get_by_id(DeviceId::new(1)).await.unwrap().unwrap();
        assert!(fetched.is_on);
        assert!((fetched.power_watts - 60.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_on_create() {
        let repo = setup().await;
        repo.create(lamp()).await.unwrap();

        let result = repo.create(lamp()).await;
        assert!(matches!(result, Err(EnergyHubError::Storage(_))));
    }
}
