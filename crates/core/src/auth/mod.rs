mod error;
mod functions;
mod types;

pub use error::AuthError;
pub use functions::{authenticate, verify_code, MOCK_USER_ID, MOCK_USER_NAME, MOCK_USER_ROLE};
pub use types::{LoginRequest, UserProfile, VerifyRequest};
