//! Functional core for the system parameter maintenance service.
//!
//! Record types, the conditional-required validator, maker-checker
//! transitions, mock credential rules and the storage trait. No I/O.

pub mod auth;
pub mod parameter;
pub mod serde;
pub mod storage;
