//! Mock authentication operations.

use serde::{Deserialize, Serialize};
use sysparam_core::auth::{LoginRequest, UserProfile, VerifyRequest};

use super::SysparamClient;
use crate::error::{ClientError, Result};

/// Successful login envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserProfile,
}

/// Successful verification envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

impl SysparamClient {
    /// Log in with username and password.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        if username.is_empty() || password.is_empty() {
            return Err(ClientError::InvalidInput(
                "username and password are required".to_string(),
            ));
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.post_json("/api/auth/login", &request).send().await?;
        self.handle_response(response).await
    }

    /// Submit a one-time code.
    pub async fn verify(&self, code: &str, mode: &str) -> Result<VerifyResponse> {
        let request = VerifyRequest {
            code: code.to_string(),
            mode: mode.to_string(),
        };
        let response = self.post_json("/api/auth/verify", &request).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_requires_both_fields_before_sending() {
        // Port 9 (discard) is never contacted when the input is rejected.
        let client = SysparamClient::new("http://127.0.0.1:9");

        let result = client.login("maker", "").await;

        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
    }

    #[test]
    fn test_login_response_parses_envelope() {
        let body = r#"{
            "success": true,
            "message": "Login successful",
            "user": {"id": "1", "username": "maker", "name": "James Bond", "role": "Admin"}
        }"#;

        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.user.name, "James Bond");
    }
}
