//! Application state with repository-based storage.
//!
//! Shared state passed to all request handlers. The storage backend is a
//! repository trait object chosen at compile time via feature flags.

use std::sync::Arc;

use sysparam_core::storage::ParameterRepository;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

/// Name of the compiled-in storage backend, reported by `/healthz`.
#[cfg(feature = "inmemory")]
pub const STORAGE_BACKEND: &str = "inmemory";
#[cfg(feature = "sqlite")]
pub const STORAGE_BACKEND: &str = "sqlite";

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub parameter_repo: Arc<dyn ParameterRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    fn build(parameter_repo: Arc<dyn ParameterRepository>, config: &Config) -> Self {
        Self {
            parameter_repo,
            config: Arc::new(config.clone()),
        }
    }

    /// Loads the demo records when `SEED_DEMO_DATA` is set.
    async fn seed(self, config: &Config) -> Result<Self, anyhow::Error> {
        if !config.seed_demo_data {
            return Ok(self);
        }

        let seeds = sysparam_core::parameter::generate_seed_parameters(chrono::Utc::now());
        for seed in &seeds {
            if self.parameter_repo.get_parameter(seed.id).await?.is_none() {
                self.parameter_repo.create_parameter(seed).await?;
            }
        }
        tracing::info!(count = seeds.len(), "Seeded demo system parameters");

        Ok(self)
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            Self::build(repo, config).seed(config).await
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage at `config.sqlite_path`.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            tracing::info!(path = %config.sqlite_path, "Opened SQLite database");
            Self::build(repo, config).seed(config).await
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;

    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    use sysparam_core::parameter::{select_by_status, RecordStatus, SystemParameter};
    use sysparam_core::storage::{RepositoryError, Result};

    /// Minimal repository for handler tests.
    #[derive(Debug, Default)]
    struct TestRepository {
        parameters: RwLock<HashMap<Uuid, SystemParameter>>,
    }

    #[async_trait]
    impl ParameterRepository for TestRepository {
        async fn get_parameter(&self, id: Uuid) -> Result<Option<SystemParameter>> {
            Ok(self.parameters.read().await.get(&id).cloned())
        }

        async fn list_parameters_by_status(
            &self,
            status: RecordStatus,
        ) -> Result<Vec<SystemParameter>> {
            let parameters = self.parameters.read().await;
            let all: Vec<SystemParameter> = parameters.values().cloned().collect();
            Ok(select_by_status(&all, status))
        }

        async fn create_parameter(&self, parameter: &SystemParameter) -> Result<()> {
            self.parameters
                .write()
                .await
                .insert(parameter.id, parameter.clone());
            Ok(())
        }

        async fn update_parameter(&self, parameter: &SystemParameter) -> Result<()> {
            let mut parameters = self.parameters.write().await;
            if !parameters.contains_key(&parameter.id) {
                return Err(RepositoryError::parameter_not_found(parameter.id));
            }
            parameters.insert(parameter.id, parameter.clone());
            Ok(())
        }

        async fn count_parameters(&self) -> Result<usize> {
            Ok(self.parameters.read().await.len())
        }
    }

    /// Repository whose every call fails with the same error.
    #[derive(Debug)]
    pub struct FailingRepository {
        error: RepositoryError,
    }

    impl FailingRepository {
        pub fn query_failed() -> Arc<Self> {
            Arc::new(Self {
                error: RepositoryError::QueryFailed("no such table".to_string()),
            })
        }

        pub fn connection_failed() -> Arc<Self> {
            Arc::new(Self {
                error: RepositoryError::ConnectionFailed("unable to open database".to_string()),
            })
        }

        /// Every call reports a duplicate id.
        pub fn duplicate() -> Arc<Self> {
            Arc::new(Self {
                error: RepositoryError::parameter_exists(Uuid::nil()),
            })
        }

        fn fail<T>(&self) -> Result<T> {
            Err(self.error.clone())
        }
    }

    #[async_trait]
    impl ParameterRepository for FailingRepository {
        async fn get_parameter(&self, _id: Uuid) -> Result<Option<SystemParameter>> {
            self.fail()
        }

        async fn list_parameters_by_status(
            &self,
            _status: RecordStatus,
        ) -> Result<Vec<SystemParameter>> {
            self.fail()
        }

        async fn create_parameter(&self, _parameter: &SystemParameter) -> Result<()> {
            self.fail()
        }

        async fn update_parameter(&self, _parameter: &SystemParameter) -> Result<()> {
            self.fail()
        }

        async fn count_parameters(&self) -> Result<usize> {
            self.fail()
        }
    }

    impl AppState {
        /// AppState backed by `repo` with default configuration.
        pub fn with_repository(repo: Arc<dyn ParameterRepository>) -> Self {
            let config = Config {
                default_maker: "USER001".to_string(),
                default_checker: "CHECKER001".to_string(),
                mock_token: "mock-jwt-token".to_string(),
                ..Config::from_env()
            };
            Self::build(repo, &config)
        }
    }

    impl Default for AppState {
        /// Creates an AppState with in-memory storage for testing.
        fn default() -> Self {
            Self::with_repository(Arc::new(TestRepository::default()))
        }
    }
}

#[cfg(test)]
pub use test_support::FailingRepository;
