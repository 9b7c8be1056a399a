//! SQLite repository implementation.
//!
//! Implements `ParameterRepository` from `sysparam_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use sysparam_core::parameter::{RecordStatus, SystemParameter};
use sysparam_core::storage::{ParameterRepository, RepositoryError, Result};

use super::conversions::{row_to_parameter, ParameterRow};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ParameterRepository for SqliteRepository {
    async fn get_parameter(&self, id: Uuid) -> Result<Option<SystemParameter>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PARAMETER_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_parameter) {
                    Ok(parameter) => Ok(Some(parameter)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn list_parameters_by_status(
        &self,
        status: RecordStatus,
    ) -> Result<Vec<SystemParameter>> {
        let status_str = status.as_str();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PARAMETERS_BY_STATUS)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([status_str], row_to_parameter)
                    .map_err(wrap_err)?;

                let mut parameters = Vec::new();
                for row_result in rows {
                    parameters.push(row_result.map_err(wrap_err)?);
                }
                Ok(parameters)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ""))
    }

    async fn create_parameter(&self, parameter: &SystemParameter) -> Result<()> {
        let row = ParameterRow::from_parameter(parameter)?;
        let parameter_id = row.id.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PARAMETER,
                    rusqlite::params![
                        row.id,
                        row.product_type,
                        row.allowed_sweep_category,
                        row.allowed_currencies,
                        row.structure_type,
                        row.allowed_sweep_type,
                        row.operating_currency_mode,
                        row.balance_type,
                        row.allowed_sweep_frequency,
                        row.allowed_sweep_execution_mode,
                        row.sweep_reversal,
                        row.max_tt_duration_from,
                        row.max_tt_duration_to,
                        row.holiday_treatment,
                        row.holiday_treatment_currency_holiday,
                        row.sweep_post_currency_cut_off,
                        row.status,
                        row.action,
                        row.maker,
                        row.maker_date_time,
                        row.checker,
                        row.checker_date_time,
                        row.rejection_reason,
                        row.updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, parameter_id))
    }

    async fn update_parameter(&self, parameter: &SystemParameter) -> Result<()> {
        let row = ParameterRow::from_parameter(parameter)?;
        let parameter_id = row.id.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PARAMETER,
                        rusqlite::params![
                            row.id,
                            row.product_type,
                            row.allowed_sweep_category,
                            row.allowed_currencies,
                            row.structure_type,
                            row.allowed_sweep_type,
                            row.operating_currency_mode,
                            row.balance_type,
                            row.allowed_sweep_frequency,
                            row.allowed_sweep_execution_mode,
                            row.sweep_reversal,
                            row.max_tt_duration_from,
                            row.max_tt_duration_to,
                            row.holiday_treatment,
                            row.holiday_treatment_currency_holiday,
                            row.sweep_post_currency_cut_off,
                            row.status,
                            row.action,
                            row.maker,
                            row.maker_date_time,
                            row.checker,
                            row.checker_date_time,
                            row.rejection_reason,
                            row.updated_at
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, parameter_id))
    }

    async fn count_parameters(&self) -> Result<usize> {
        self.conn
            .call(|conn| {
                let count: i64 = conn
                    .query_row(schema::COUNT_PARAMETERS, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(count as usize)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sysparam_core::parameter::{
        authorize, generate_seed_parameters, new_parameter, ParameterDetails,
        SubmitParameterRequest,
    };

    fn pending(product_type: &str, minutes_ago: i64) -> SystemParameter {
        new_parameter(
            SubmitParameterRequest::new(ParameterDetails::new(product_type)),
            "USER001",
            Utc::now() - Duration::minutes(minutes_ago),
        )
    }

    #[tokio::test]
    async fn test_round_trips_every_field() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let mut parameter = generate_seed_parameters(Utc::now()).remove(1);
        parameter.rejection_reason = Some("kept for history".to_string());

        repo.create_parameter(&parameter).await.unwrap();
        let loaded = repo.get_parameter(parameter.id).await.unwrap();

        assert_eq!(loaded, Some(parameter));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let loaded = repo.get_parameter(Uuid::new_v4()).await.unwrap();

        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let parameter = pending("Pool", 0);

        repo.create_parameter(&parameter).await.unwrap();
        let result = repo.create_parameter(&parameter).await;

        assert_eq!(
            result,
            Err(RepositoryError::parameter_exists(parameter.id))
        );
    }

    #[tokio::test]
    async fn test_list_by_status_newest_first() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let older = pending("Older", 10);
        let newer = pending("Newer", 1);
        let other = authorize(&pending("Other", 0), "CHECKER001", Utc::now()).unwrap();

        repo.create_parameter(&older).await.unwrap();
        repo.create_parameter(&newer).await.unwrap();
        repo.create_parameter(&other).await.unwrap();

        let listed = repo
            .list_parameters_by_status(RecordStatus::PendingAuthorization)
            .await
            .unwrap();

        let ids: Vec<Uuid> = listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
        assert_eq!(repo.count_parameters().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_persists_transition() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let parameter = pending("Sweep", 0);
        repo.create_parameter(&parameter).await.unwrap();

        let authorized = authorize(&parameter, "CHECKER001", Utc::now()).unwrap();
        repo.update_parameter(&authorized).await.unwrap();

        let loaded = repo.get_parameter(parameter.id).await.unwrap().unwrap();
        assert_eq!(loaded.status, RecordStatus::Authorized);
        assert_eq!(loaded.checker.as_deref(), Some("CHECKER001"));
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let parameter = pending("Pool", 0);

        let result = repo.update_parameter(&parameter).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }
}
