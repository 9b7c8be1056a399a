//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use sysparam_core::parameter::{sort_newest_first, RecordStatus, SystemParameter};
use sysparam_core::storage::{ParameterRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    parameters: Arc<RwLock<HashMap<Uuid, SystemParameter>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `parameters`.
    #[cfg(test)]
    pub fn with_parameters(parameters: Vec<SystemParameter>) -> Self {
        let map = parameters.into_iter().map(|p| (p.id, p)).collect();
        Self {
            parameters: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ParameterRepository for InMemoryRepository {
    async fn get_parameter(&self, id: Uuid) -> Result<Option<SystemParameter>> {
        let parameters = self.parameters.read().await;
        Ok(parameters.get(&id).cloned())
    }

    async fn list_parameters_by_status(
        &self,
        status: RecordStatus,
    ) -> Result<Vec<SystemParameter>> {
        let parameters = self.parameters.read().await;
        let mut selected: Vec<SystemParameter> = parameters
            .values()
            .filter(|p| p.status == status)
            .cloned()
            .collect();
        drop(parameters);

        sort_newest_first(&mut selected);
        Ok(selected)
    }

    async fn create_parameter(&self, parameter: &SystemParameter) -> Result<()> {
        let mut parameters = self.parameters.write().await;
        if parameters.contains_key(&parameter.id) {
            return Err(RepositoryError::parameter_exists(parameter.id));
        }
        parameters.insert(parameter.id, parameter.clone());
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sysparam_core::parameter::{
        generate_seed_parameters, new_parameter, reject, ParameterDetails, SubmitParameterRequest,
    };

    fn pending(product_type: &str, minutes_ago: i64) -> SystemParameter {
        new_parameter(
            SubmitParameterRequest::new(ParameterDetails::new(product_type)),
            "USER001",
            Utc::now() - Duration::minutes(minutes_ago),
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryRepository::new();
        let parameter = pending("Pool", 0);

        repo.create_parameter(&parameter).await.unwrap();

        let loaded = repo.get_parameter(parameter.id).await.unwrap();
        assert_eq!(loaded, Some(parameter));
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let repo = InMemoryRepository::new();
        let parameter = pending("Pool", 0);
        repo.create_parameter(&parameter).await.unwrap();

        let result = repo.create_parameter(&parameter).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let repo = InMemoryRepository::new();

        let result = repo.update_parameter(&pending("ICL", 0)).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let repo = InMemoryRepository::new();
        let oldest = pending("A", 30);
        let newest = pending("B", 1);
        let middle = pending("C", 10);
        let rejected = reject(&pending("D", 0), "CHECKER001", "No", Utc::now()).unwrap();
        for p in [&oldest, &newest, &middle, &rejected] {
            repo.create_parameter(p).await.unwrap();
        }

        let listed = repo
            .list_parameters_by_status(RecordStatus::PendingAuthorization)
            .await
            .unwrap();

        let ids: Vec<Uuid> = listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

        let rejected_list = repo
            .list_parameters_by_status(RecordStatus::Rejected)
            .await
            .unwrap();
        assert_eq!(rejected_list.len(), 1);
    }

    #[tokio::test]
    async fn test_with_parameters_seeds_store() {
        let repo = InMemoryRepository::with_parameters(generate_seed_parameters(Utc::now()));

        assert_eq!(repo.count_parameters().await.unwrap(), 2);
        let authorized = repo
            .list_parameters_by_status(RecordStatus::Authorized)
            .await
            .unwrap();
        assert_eq!(authorized.len(), 2);
    }
}
