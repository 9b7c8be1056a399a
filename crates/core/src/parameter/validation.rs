//! Conditional-required field rules for system parameter records.
//!
//! Pure functions, no I/O. Used by the HTTP handlers before persisting and
//! by the CLI client before sending.

use super::error::{LifecycleError, ValidationErrors};
use super::types::{is_sweep, ParameterDetails};

/// Message assigned to every missing field.
pub const REQUIRED_MESSAGE: &str = "Required";

/// JSON field names used as validation error keys.
pub mod fields {
    pub const PRODUCT_TYPE: &str = "productType";
    pub const ALLOWED_SWEEP_CATEGORY: &str = "allowedSweepCategory";
    pub const STRUCTURE_TYPE: &str = "structureType";
    pub const ALLOWED_SWEEP_TYPE: &str = "allowedSweepType";
    pub const OPERATING_CURRENCY_MODE: &str = "operatingCurrencyMode";
    pub const BALANCE_TYPE: &str = "balanceType";
    pub const ALLOWED_SWEEP_FREQUENCY: &str = "allowedSweepFrequency";
    pub const ALLOWED_SWEEP_EXECUTION_MODE: &str = "allowedSweepExecutionMode";
    pub const HOLIDAY_TREATMENT: &str = "holidayTreatment";
    pub const HOLIDAY_TREATMENT_CURRENCY_HOLIDAY: &str = "holidayTreatmentCurrencyHoliday";
}

/// Fields that become mandatory when the product type is "Sweep".
pub const SWEEP_REQUIRED_FIELDS: [&str; 9] = [
    fields::ALLOWED_SWEEP_CATEGORY,
    fields::STRUCTURE_TYPE,
    fields::ALLOWED_SWEEP_TYPE,
    fields::OPERATING_CURRENCY_MODE,
    fields::BALANCE_TYPE,
    fields::ALLOWED_SWEEP_FREQUENCY,
    fields::ALLOWED_SWEEP_EXECUTION_MODE,
    fields::HOLIDAY_TREATMENT,
    fields::HOLIDAY_TREATMENT_CURRENCY_HOLIDAY,
];

fn has_tags(tags: &[String]) -> bool {
    tags.iter().any(|tag| !tag.trim().is_empty())
}

fn has_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Presence of each sweep-dependent field, in `SWEEP_REQUIRED_FIELDS` order.
fn sweep_field_presence(details: &ParameterDetails) -> [(&'static str, bool); 9] {
    [
        (
            fields::ALLOWED_SWEEP_CATEGORY,
            has_tags(&details.allowed_sweep_category),
        ),
        (fields::STRUCTURE_TYPE, has_tags(&details.structure_type)),
        (fields::ALLOWED_SWEEP_TYPE, has_tags(&details.allowed_sweep_type)),
        (
            fields::OPERATING_CURRENCY_MODE,
            has_value(details.operating_currency_mode.as_deref()),
        ),
        (
            fields::BALANCE_TYPE,
            has_value(details.balance_type.as_deref()),
        ),
        (
            fields::ALLOWED_SWEEP_FREQUENCY,
            has_tags(&details.allowed_sweep_frequency),
        ),
        (
            fields::ALLOWED_SWEEP_EXECUTION_MODE,
            has_tags(&details.allowed_sweep_execution_mode),
        ),
        (fields::HOLIDAY_TREATMENT, details.holiday_treatment.is_some()),
        (
            fields::HOLIDAY_TREATMENT_CURRENCY_HOLIDAY,
            details.holiday_treatment_currency_holiday.is_some(),
        ),
    ]
}

/// Validates a candidate record.
///
/// An empty product type short-circuits: only `productType` is reported.
/// For "Sweep" every empty dependent field is reported. Any other product
/// type leaves the dependent fields unconstrained. Presence is the only rule;
/// no cross-field consistency is checked.
pub fn validate_parameter(details: &ParameterDetails) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if details.product_type.trim().is_empty() {
        errors.insert(fields::PRODUCT_TYPE, REQUIRED_MESSAGE);
        return errors;
    }

    if !is_sweep(&details.product_type) {
        return errors;
    }

    for (field, present) in sweep_field_presence(details) {
        if !present {
            errors.insert(field, REQUIRED_MESSAGE);
        }
    }

    errors
}

/// Caller-side check run before a reject transition.
pub fn validate_rejection_reason(reason: &str) -> Result<&str, LifecycleError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(LifecycleError::MissingRejectionReason);
    }
    Ok(reason)
}
