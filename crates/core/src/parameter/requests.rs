//! API request types for the system parameter endpoints.
//!
//! Shared between the server and the client. Pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::types::{ParameterDetails, RecordAction, RecordStatus};

/// Body of `POST /api/system-parameter/submit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitParameterRequest {
    #[serde(flatten)]
    pub details: ParameterDetails,
    #[serde(default)]
    pub action: RecordAction,
}

impl SubmitParameterRequest {
    pub fn new(details: ParameterDetails) -> Self {
        Self {
            details,
            action: RecordAction::Create,
        }
    }

    pub fn with_action(mut self, action: RecordAction) -> Self {
        self.action = action;
        self
    }
}

/// Query string of `GET /api/system-parameter/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParametersQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ListParametersQuery {
    pub fn for_status(status: RecordStatus) -> Self {
        Self {
            status: Some(status.as_str().to_string()),
        }
    }
}

/// Body of `POST /api/system-parameter/authorize`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    #[serde(default)]
    pub record_id: String,
}

/// Body of `POST /api/system-parameter/reject`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    #[serde(default)]
    pub record_id: String,
    #[serde(default)]
    pub rejection_reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_defaults_action_to_create() {
        let request: SubmitParameterRequest =
            serde_json::from_str(r#"{"productType": "Pool"}"#).unwrap();

        assert_eq!(request.details.product_type, "Pool");
        assert_eq!(request.action, RecordAction::Create);
    }

    #[test]
    fn test_submit_request_reads_action() {
        let request: SubmitParameterRequest =
            serde_json::from_str(r#"{"productType": "ICL", "action": "Update"}"#).unwrap();

        assert_eq!(request.action, RecordAction::Update);
    }

    #[test]
    fn test_reject_request_camel_case() {
        let request: RejectRequest =
            serde_json::from_str(r#"{"recordId": "abc", "rejectionReason": "Duplicate"}"#)
                .unwrap();

        assert_eq!(request.record_id, "abc");
        assert_eq!(request.rejection_reason, "Duplicate");
    }

    #[test]
    fn test_reject_request_missing_reason_is_empty() {
        let request: RejectRequest = serde_json::from_str(r#"{"recordId": "abc"}"#).unwrap();
        assert!(request.rejection_reason.is_empty());
    }

    #[test]
    fn test_list_query_for_status() {
        let query = ListParametersQuery::for_status(RecordStatus::Rejected);
        assert_eq!(query.status.as_deref(), Some("REJECTED"));
    }
}
