use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::{
    deserialize_optional_enum, deserialize_optional_string, deserialize_optional_time,
    serialize_optional_time,
};

use super::error::StatusParseError;

/// Product type value that activates the sweep rule set.
pub const SWEEP_PRODUCT_TYPE: &str = "Sweep";

/// Returns true when the discriminator selects the sweep rule set.
pub fn is_sweep(product_type: &str) -> bool {
    product_type == SWEEP_PRODUCT_TYPE
}

/// Lifecycle status of a system parameter record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    /// Submitted by a maker, waiting for a checker.
    #[default]
    #[serde(alias = "pending")]
    PendingAuthorization,
    #[serde(alias = "authorized")]
    Authorized,
    #[serde(alias = "rejected")]
    Rejected,
    /// Listed by the console but never reached by a transition.
    #[serde(alias = "disabled")]
    Disabled,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 4] = [
        RecordStatus::PendingAuthorization,
        RecordStatus::Authorized,
        RecordStatus::Rejected,
        RecordStatus::Disabled,
    ];

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::PendingAuthorization => "PENDING_AUTHORIZATION",
            RecordStatus::Authorized => "AUTHORIZED",
            RecordStatus::Rejected => "REJECTED",
            RecordStatus::Disabled => "DISABLED",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RecordStatus::PendingAuthorization)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = StatusParseError;

    /// Accepts the canonical names and the listing tab names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending_authorization" | "pending" => Ok(RecordStatus::PendingAuthorization),
            "authorized" => Ok(RecordStatus::Authorized),
            "rejected" => Ok(RecordStatus::Rejected),
            "disabled" => Ok(RecordStatus::Disabled),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// What the maker asked for when submitting the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordAction {
    #[default]
    Create,
    Update,
    Delete,
}

impl RecordAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordAction::Create => "Create",
            RecordAction::Update => "Update",
            RecordAction::Delete => "Delete",
        }
    }
}

impl FromStr for RecordAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Create" => Ok(RecordAction::Create),
            "Update" => Ok(RecordAction::Update),
            "Delete" => Ok(RecordAction::Delete),
            other => Err(format!("Unknown record action: {other}")),
        }
    }
}

/// How a sweep scheduled on a holiday is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolidayTreatment {
    #[serde(rename = "Next Working Day")]
    NextWorkingDay,
    #[serde(rename = "Previous Working Day")]
    PreviousWorkingDay,
    #[serde(rename = "Skip Execution")]
    SkipExecution,
}

impl HolidayTreatment {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayTreatment::NextWorkingDay => "Next Working Day",
            HolidayTreatment::PreviousWorkingDay => "Previous Working Day",
            HolidayTreatment::SkipExecution => "Skip Execution",
        }
    }
}

impl FromStr for HolidayTreatment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Next Working Day" => Ok(HolidayTreatment::NextWorkingDay),
            "Previous Working Day" => Ok(HolidayTreatment::PreviousWorkingDay),
            "Skip Execution" => Ok(HolidayTreatment::SkipExecution),
            other => Err(format!("Unknown holiday treatment: {other}")),
        }
    }
}

/// The maker-editable fields of a system parameter.
///
/// Tag sets default to empty and selects to `None`, so a partially filled
/// form deserializes and is judged by the validator rather than by serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDetails {
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub allowed_sweep_category: Vec<String>,
    #[serde(default)]
    pub allowed_currencies: Vec<String>,
    #[serde(default)]
    pub structure_type: Vec<String>,
    #[serde(default)]
    pub allowed_sweep_type: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub operating_currency_mode: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub balance_type: Option<String>,
    #[serde(default)]
    pub allowed_sweep_frequency: Vec<String>,
    #[serde(default)]
    pub allowed_sweep_execution_mode: Vec<String>,
    #[serde(default)]
    pub sweep_reversal: bool,
    #[serde(
        rename = "maxTTDurationFrom",
        default,
        serialize_with = "serialize_optional_time",
        deserialize_with = "deserialize_optional_time"
    )]
    pub max_tt_duration_from: Option<NaiveTime>,
    #[serde(
        rename = "maxTTDurationTo",
        default,
        serialize_with = "serialize_optional_time",
        deserialize_with = "deserialize_optional_time"
    )]
    pub max_tt_duration_to: Option<NaiveTime>,
    #[serde(default, deserialize_with = "deserialize_optional_enum")]
    pub holiday_treatment: Option<HolidayTreatment>,
    #[serde(default, deserialize_with = "deserialize_optional_enum")]
    pub holiday_treatment_currency_holiday: Option<HolidayTreatment>,
    #[serde(default)]
    pub sweep_post_currency_cut_off: bool,
}

impl ParameterDetails {
    /// Creates details for the given product type with every other field empty.
    pub fn new(product_type: impl Into<String>) -> Self {
        Self {
            product_type: product_type.into(),
            ..Self::default()
        }
    }
}

/// A configuration record moving through the maker-checker lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemParameter {
    pub id: Uuid,
    #[serde(flatten)]
    pub details: ParameterDetails,
    pub status: RecordStatus,
    pub action: RecordAction,
    pub maker: String,
    pub maker_date_time: DateTime<Utc>,
    #[serde(default)]
    pub checker: Option<String>,
    #[serde(default)]
    pub checker_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub updated_at: DateTime<Utc>,
}
