//! HTTP client for the sysparam API.

pub mod auth;
pub mod health;
pub mod parameters;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Header carrying the acting maker or checker.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Failure envelope returned by every API route.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    errors: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ErrorBody {
    /// Message with any field errors appended, e.g. `Validation failed (balanceType: Required)`.
    fn describe(self) -> String {
        match self.errors {
            Some(errors) if !errors.is_empty() => {
                let fields: Vec<String> = errors
                    .iter()
                    .map(|(field, message)| match message.as_str() {
                        Some(m) => format!("{field}: {m}"),
                        None => field.clone(),
                    })
                    .collect();
                format!("{} ({})", self.message, fields.join(", "))
            }
            _ => self.message,
        }
    }
}

/// Parses a failed response body into a readable message.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.describe(),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}

/// HTTP client for the sysparam API.
#[derive(Debug, Clone)]
pub struct SysparamClient {
    client: reqwest::Client,
    base_url: String,
    user: Option<String>,
}

impl SysparamClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user: None,
        }
    }

    /// Act as `user` on submit, authorize and reject.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` as JSON, attaching the acting user when set.
    fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> reqwest::RequestBuilder {
        let request = self.client.post(self.url(path)).json(body);
        match &self.user {
            Some(user) => request.header(USER_ID_HEADER, user),
            None => request,
        }
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body)
                .map_err(|e| ClientError::InvalidResponse(format!("{e}: {body}")));
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        if status.as_u16() == 404 {
            Err(ClientError::NotFound { message })
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
