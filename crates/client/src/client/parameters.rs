//! System parameter maker-checker operations.
//!
//! Submit and reject are validated locally with the same rules the server
//! applies, so an invalid call fails without touching the network.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sysparam_core::parameter::{
    validate_parameter, validate_rejection_reason, AuthorizeRequest, ListParametersQuery,
    RecordStatus, RejectRequest, SubmitParameterRequest, SystemParameter,
};

use super::SysparamClient;
use crate::error::{ClientError, Result};

/// Envelope returned by a successful submit.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub record_id: Uuid,
}

/// Envelope carrying records under `data`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl SysparamClient {
    /// Submit a new record for authorization.
    pub async fn submit_parameter(&self, request: &SubmitParameterRequest) -> Result<SubmitResponse> {
        validate_parameter(&request.details)
            .into_result()
            .map_err(ClientError::Validation)?;

        let response = self
            .post_json("/api/system-parameter/submit", request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List records in `status`, or the pending queue when `None`.
    pub async fn list_parameters(
        &self,
        status: Option<RecordStatus>,
    ) -> Result<Vec<SystemParameter>> {
        let query = status.map(ListParametersQuery::for_status).unwrap_or_default();
        let response = self
            .client
            .get(self.url("/api/system-parameter/list"))
            .query(&query)
            .send()
            .await?;
        let envelope: DataResponse<Vec<SystemParameter>> = self.handle_response(response).await?;
        Ok(envelope.data)
    }

    /// Get a single record.
    pub async fn get_parameter(&self, id: Uuid) -> Result<SystemParameter> {
        let response = self
            .client
            .get(self.url(&format!("/api/system-parameter/{}", id)))
            .send()
            .await?;
        let envelope: DataResponse<SystemParameter> = self.handle_response(response).await?;
        Ok(envelope.data)
    }

    /// Authorize a pending record.
    pub async fn authorize_parameter(&self, id: Uuid) -> Result<DataResponse<SystemParameter>> {
        let request = AuthorizeRequest {
            record_id: id.to_string(),
        };
        let response = self
            .post_json("/api/system-parameter/authorize", &request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Reject a pending record. A blank reason fails before sending.
    pub async fn reject_parameter(
        &self,
        id: Uuid,
        reason: &str,
    ) -> Result<DataResponse<SystemParameter>> {
        let reason =
            validate_rejection_reason(reason).map_err(|e| ClientError::InvalidInput(e.to_string()))?;

        let request = RejectRequest {
            record_id: id.to_string(),
            rejection_reason: reason.to_string(),
        };
        let response = self
            .post_json("/api/system-parameter/reject", &request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
