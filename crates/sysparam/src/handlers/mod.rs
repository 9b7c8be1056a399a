pub mod auth;
pub mod error;
pub mod health;
pub mod system_parameter;

pub use error::ApiError;
