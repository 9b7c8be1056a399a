//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use std::str::FromStr;

use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};
use rusqlite::Row;
use uuid::Uuid;

use sysparam_core::parameter::{
    HolidayTreatment, ParameterDetails, RecordAction, RecordStatus, SystemParameter,
};
use sysparam_core::serde::{parse_time, TIME_FORMAT};
use sysparam_core::storage::RepositoryError;

/// Column values for a record, in `schema::parameter_columns!` order.
pub struct ParameterRow {
    pub id: String,
    pub product_type: String,
    pub allowed_sweep_category: String,
    pub allowed_currencies: String,
    pub structure_type: String,
    pub allowed_sweep_type: String,
    pub operating_currency_mode: Option<String>,
    pub balance_type: Option<String>,
    pub allowed_sweep_frequency: String,
    pub allowed_sweep_execution_mode: String,
    pub sweep_reversal: bool,
    pub max_tt_duration_from: Option<String>,
    pub max_tt_duration_to: Option<String>,
    pub holiday_treatment: Option<String>,
    pub holiday_treatment_currency_holiday: Option<String>,
    pub sweep_post_currency_cut_off: bool,
    pub status: String,
    pub action: String,
    pub maker: String,
    pub maker_date_time: String,
    pub checker: Option<String>,
    pub checker_date_time: Option<String>,
    pub rejection_reason: Option<String>,
    pub updated_at: String,
}

impl ParameterRow {
    pub fn from_parameter(parameter: &SystemParameter) -> Result<Self, RepositoryError> {
        let details = &parameter.details;

        Ok(Self {
            id: parameter.id.to_string(),
            product_type: details.product_type.clone(),
            allowed_sweep_category: tags_to_json(&details.allowed_sweep_category)?,
            allowed_currencies: tags_to_json(&details.allowed_currencies)?,
            structure_type: tags_to_json(&details.structure_type)?,
            allowed_sweep_type: tags_to_json(&details.allowed_sweep_type)?,
            operating_currency_mode: details.operating_currency_mode.clone(),
            balance_type: details.balance_type.clone(),
            allowed_sweep_frequency: tags_to_json(&details.allowed_sweep_frequency)?,
            allowed_sweep_execution_mode: tags_to_json(&details.allowed_sweep_execution_mode)?,
            sweep_reversal: details.sweep_reversal,
            max_tt_duration_from: details.max_tt_duration_from.as_ref().map(format_time),
            max_tt_duration_to: details.max_tt_duration_to.as_ref().map(format_time),
            holiday_treatment: details.holiday_treatment.map(|h| h.as_str().to_string()),
            holiday_treatment_currency_holiday: details
                .holiday_treatment_currency_holiday
                .map(|h| h.as_str().to_string()),
            sweep_post_currency_cut_off: details.sweep_post_currency_cut_off,
            status: parameter.status.as_str().to_string(),
            action: parameter.action.as_str().to_string(),
            maker: parameter.maker.clone(),
            maker_date_time: format_datetime(&parameter.maker_date_time),
            checker: parameter.checker.clone(),
            checker_date_time: parameter.checker_date_time.as_ref().map(format_datetime),
            rejection_reason: parameter.rejection_reason.clone(),
            updated_at: format_datetime(&parameter.updated_at),
        })
    }
}

/// Convert a SQLite row to a SystemParameter.
///
/// Expected columns: see `schema::parameter_columns!`.
pub fn row_to_parameter(row: &Row) -> rusqlite::Result<SystemParameter> {
    let id: String = row.get(0)?;
    let allowed_sweep_category: String = row.get(2)?;
    let allowed_currencies: String = row.get(3)?;
    let structure_type: String = row.get(4)?;
    let allowed_sweep_type: String = row.get(5)?;
    let allowed_sweep_frequency: String = row.get(8)?;
    let allowed_sweep_execution_mode: String = row.get(9)?;
    let max_tt_duration_from: Option<String> = row.get(11)?;
    let max_tt_duration_to: Option<String> = row.get(12)?;
    let holiday_treatment: Option<String> = row.get(13)?;
    let holiday_treatment_currency_holiday: Option<String> = row.get(14)?;
    let status: String = row.get(16)?;
    let action: String = row.get(17)?;
    let maker_date_time: String = row.get(19)?;
    let checker_date_time: Option<String> = row.get(21)?;
    let updated_at: String = row.get(23)?;

    let details = ParameterDetails {
        product_type: row.get(1)?,
        allowed_sweep_category: json_to_tags(2, &allowed_sweep_category)?,
        allowed_currencies: json_to_tags(3, &allowed_currencies)?,
        structure_type: json_to_tags(4, &structure_type)?,
        allowed_sweep_type: json_to_tags(5, &allowed_sweep_type)?,
        operating_currency_mode: row.get(6)?,
        balance_type: row.get(7)?,
        allowed_sweep_frequency: json_to_tags(8, &allowed_sweep_frequency)?,
        allowed_sweep_execution_mode: json_to_tags(9, &allowed_sweep_execution_mode)?,
        sweep_reversal: row.get(10)?,
        max_tt_duration_from: max_tt_duration_from
            .as_deref()
            .map(|s| parse_stored_time(11, s))
            .transpose()?,
        max_tt_duration_to: max_tt_duration_to
            .as_deref()
            .map(|s| parse_stored_time(12, s))
            .transpose()?,
        holiday_treatment: holiday_treatment
            .as_deref()
            .map(|s| parse_text::<HolidayTreatment>(13, s))
            .transpose()?,
        holiday_treatment_currency_holiday: holiday_treatment_currency_holiday
            .as_deref()
            .map(|s| parse_text::<HolidayTreatment>(14, s))
            .transpose()?,
        sweep_post_currency_cut_off: row.get(15)?,
    };

    Ok(SystemParameter {
        id: parse_uuid(&id)?,
        details,
        status: parse_status(&status)?,
        action: parse_text::<RecordAction>(17, &action)?,
        maker: row.get(18)?,
        maker_date_time: parse_datetime(19, &maker_date_time)?,
        checker: row.get(20)?,
        checker_date_time: checker_date_time
            .as_deref()
            .map(|s| parse_datetime(21, s))
            .transpose()?,
        rejection_reason: row.get(22)?,
        updated_at: parse_datetime(23, &updated_at)?,
    })
}

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}

fn invalid_text(column: usize, message: String) -> rusqlite::Error {
    conversion_error(
        column,
        std::io::Error::new(std::io::ErrorKind::InvalidData, message),
    )
}

/// Serialize a tag set to a JSON array string.
pub fn tags_to_json(tags: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(tags).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn json_to_tags(column: usize, json: &str) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(json).map_err(|e| conversion_error(column, e))
}

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| conversion_error(0, e))
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

fn parse_stored_time(column: usize, s: &str) -> rusqlite::Result<NaiveTime> {
    parse_time(s).map_err(|e| conversion_error(column, e))
}

fn parse_status(s: &str) -> rusqlite::Result<RecordStatus> {
    RecordStatus::from_str(s).map_err(|e| conversion_error(16, e))
}

fn parse_text<T>(column: usize, s: &str) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    s.parse().map_err(|message| invalid_text(column, message))
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Always nine fractional digits so stored values sort chronologically.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Format a NaiveTime for SQLite storage (HH:MM).
pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
