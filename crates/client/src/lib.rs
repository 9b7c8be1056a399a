//! sysparam_client - CLI client for the sysparam maker-checker API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::SysparamClient;
pub use error::{ClientError, Result};
