use async_trait::async_trait;
use uuid::Uuid;

use crate::parameter::{RecordStatus, SystemParameter};

use super::Result;

/// Repository for system parameter records.
#[async_trait]
pub trait ParameterRepository: Send + Sync {
    /// Gets a record by its ID.
    async fn get_parameter(&self, id: Uuid) -> Result<Option<SystemParameter>>;

    /// Gets every record in `status`, newest `makerDateTime` first.
    async fn list_parameters_by_status(&self, status: RecordStatus)
        -> Result<Vec<SystemParameter>>;

    /// Creates a new record. Fails with `AlreadyExists` on a duplicate ID.
    async fn create_parameter(&self, parameter: &SystemParameter) -> Result<()>;

    /// Replaces an existing record. Fails with `NotFound` when absent.
    async fn update_parameter(&self, parameter: &SystemParameter) -> Result<()>;

    /// Counts all records. Used by the health probe.
    async fn count_parameters(&self) -> Result<usize>;
}
