//! `SQLite` implementation of [`PlanRepository`].
//!
//! The plan lives in a single row (`id = 1`) seeded by the initial migration.

use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use energyhub_app::ports::PlanRepository;
use energyhub_domain::energy_plan::EnergyPlan;
use energyhub_domain::error::{EnergyHubError, NotFoundError};

use crate::error::StorageError;

const PLAN_ROW_ID: i64 = 1;

struct Wrapper(EnergyPlan);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let daily_limit_kwh: f64 = row.try_get("daily_limit_kwh")?;
        let updated_at: String = row.try_get("updated_at")?;

        let updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .with_timezone(&Utc);

        Ok(Self(EnergyPlan {
            daily_limit_kwh,
            updated_at,
        }))
    }
}

const SELECT_CURRENT: &str = "SELECT daily_limit_kwh, updated_at FROM energy_plan WHERE id = ?";
const UPDATE: &str = "UPDATE energy_plan SET daily_limit_kwh = ?, updated_at = ? WHERE id = ?";

/// `SQLite`-backed plan repository.
pub struct SqlitePlanRepository {
    pool: SqlitePool,
}

impl SqlitePlanRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn missing_plan() -> EnergyHubError {
    NotFoundError {
        entity: "EnergyPlan",
        id: PLAN_ROW_ID.to_string(),
    }
    .into()
}

impl PlanRepository for SqlitePlanRepository {
    fn get_current_plan(
        &self,
    ) -> impl Future<Output = Result<EnergyPlan, EnergyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_CURRENT)
                .bind(PLAN_ROW_ID)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|w| w.0).ok_or_else(missing_plan)
        }
    }

    fn update_plan(
        &self,
        plan: EnergyPlan,
    ) -> impl Future<Output = Result<EnergyPlan, EnergyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(plan.daily_limit_kwh)
                .bind(plan.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true))
                .bind(PLAN_ROW_ID)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(missing_plan());
            }
            Ok(plan)
        }
    }
}
