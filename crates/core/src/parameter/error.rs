use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::types::RecordStatus;

/// Errors raised by lifecycle transitions and their caller-side checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Cannot move record from {from} to {to}")]
    InvalidTransition { from: RecordStatus, to: RecordStatus },
    #[error("Rejection reason is required")]
    MissingRejectionReason,
}

/// Unknown status filter value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown record status: {0}")]
pub struct StatusParseError(pub String);

/// Field name to message map produced by the record validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// `Ok(())` when no field failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "Validation failed: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
