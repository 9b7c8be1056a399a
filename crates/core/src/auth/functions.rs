//! Mock credential checks.
//!
//! Any non-empty pair is accepted. Emptiness is literal: a value made of
//! spaces is accepted.

use super::{AuthError, LoginRequest, UserProfile, VerifyRequest};

pub const MOCK_USER_ID: &str = "1";
pub const MOCK_USER_NAME: &str = "James Bond";
pub const MOCK_USER_ROLE: &str = "Admin";

/// Accept any non-empty username/password and return the fixed demo profile.
pub fn authenticate(request: &LoginRequest) -> Result<UserProfile, AuthError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(UserProfile {
        id: MOCK_USER_ID.to_string(),
        username: request.username.clone(),
        name: MOCK_USER_NAME.to_string(),
        role: MOCK_USER_ROLE.to_string(),
    })
}

/// Accept any non-empty code/mode pair.
pub fn verify_code(request: &VerifyRequest) -> Result<(), AuthError> {
    if request.code.is_empty() || request.mode.is_empty() {
        return Err(AuthError::InvalidVerificationCode);
    }
    Ok(())
}
