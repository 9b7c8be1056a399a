//! Health check operations.

use serde::{Deserialize, Serialize};

use super::SysparamClient;
use crate::error::{ClientError, Result};

/// Body of `GET /healthz`, returned with both 200 and 503.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub backend: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl SysparamClient {
    /// Liveness probe.
    pub async fn livez(&self) -> Result<bool> {
        let response = self.client.get(self.url("/livez")).send().await?;
        Ok(response.status().is_success())
    }

    /// Readiness probe including a storage round-trip.
    pub async fn healthz(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        let status = response.status();
        if status.is_success() || status.as_u16() == 503 {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| ClientError::InvalidResponse(format!("{e}: {body}")))
        } else {
            self.handle_response(response).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_body_parses() {
        let body = r#"{"status":"unavailable","backend":"sqlite","error":"disk I/O error"}"#;

        let health: HealthStatus = serde_json::from_str(body).unwrap();

        assert!(!health.is_ok());
        assert_eq!(health.records, None);
        assert_eq!(health.error.as_deref(), Some("disk I/O error"));
    }
}
