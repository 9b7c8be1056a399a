//! Pure types for request-scoped context.

use uuid::Uuid;

/// Unique identifier for a request, used for tracing and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped context available to all handlers.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Caller identity from `x-user-id` (None if absent or blank).
    pub actor: Option<String>,
    /// Unique request identifier for tracing.
    pub request_id: RequestId,
}

impl RequestContext {
    /// Caller identity, or `fallback` when the request named none.
    pub fn actor_or(&self, fallback: &str) -> String {
        self.actor
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}
