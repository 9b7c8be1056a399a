//! Pretty output formatting.

use sysparam_core::auth::UserProfile;
use sysparam_core::parameter::SystemParameter;
use sysparam_core::serde::TIME_FORMAT;

use crate::client::health::HealthStatus;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn push_tags(output: &mut String, label: &str, tags: &[String]) {
    if !tags.is_empty() {
        output.push_str(&format!("\n  {}: {}", label, tags.join(", ")));
    }
}

fn push_value(output: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        output.push_str(&format!("\n  {}: {}", label, value));
    }
}

/// Format a user for display.
pub fn format_user(user: &UserProfile) -> String {
    format!(
        "{} ({})\n  ID: {}\n  Role: {}",
        user.name, user.username, user.id, user.role
    )
}

/// Format a record for display.
pub fn format_parameter(parameter: &SystemParameter) -> String {
    let details = &parameter.details;
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Action: {}\n  Maker: {} at {}",
        details.product_type,
        parameter.status,
        parameter.id,
        parameter.action.as_str(),
        parameter.maker,
        parameter.maker_date_time.format(DATE_TIME_FORMAT),
    );

    if let Some(checker) = &parameter.checker {
        output.push_str(&format!("\n  Checker: {}", checker));
        if let Some(at) = parameter.checker_date_time {
            output.push_str(&format!(" at {}", at.format(DATE_TIME_FORMAT)));
        }
    }
    push_value(
        &mut output,
        "Rejection reason",
        parameter.rejection_reason.as_deref(),
    );

    push_tags(&mut output, "Sweep category", &details.allowed_sweep_category);
    push_tags(&mut output, "Currencies", &details.allowed_currencies);
    push_tags(&mut output, "Structure type", &details.structure_type);
    push_tags(&mut output, "Sweep type", &details.allowed_sweep_type);
    push_value(
        &mut output,
        "Operating currency mode",
        details.operating_currency_mode.as_deref(),
    );
    push_value(&mut output, "Balance type", details.balance_type.as_deref());
    push_tags(&mut output, "Sweep frequency", &details.allowed_sweep_frequency);
    push_tags(
        &mut output,
        "Execution mode",
        &details.allowed_sweep_execution_mode,
    );
    if let (Some(from), Some(to)) = (details.max_tt_duration_from, details.max_tt_duration_to) {
        output.push_str(&format!(
            "\n  Max TT window: {} - {}",
            from.format(TIME_FORMAT),
            to.format(TIME_FORMAT)
        ));
    }
    push_value(
        &mut output,
        "Holiday treatment",
        details.holiday_treatment.map(|h| h.as_str()),
    );
    push_value(
        &mut output,
        "Currency holiday treatment",
        details.holiday_treatment_currency_holiday.map(|h| h.as_str()),
    );
    if details.sweep_reversal {
        output.push_str("\n  Sweep reversal: yes");
    }
    if details.sweep_post_currency_cut_off {
        output.push_str("\n  Sweep after currency cut-off: yes");
    }

    output
}

/// Format records for display.
pub fn format_parameters(parameters: &[SystemParameter]) -> String {
    if parameters.is_empty() {
        return "No records found.".to_string();
    }
    let mut output = format!("RECORDS ({})\n", parameters.len());
    output.push_str(&"-".repeat(40));
    for parameter in parameters {
        output.push_str(&format!("\n{}", format_parameter(parameter)));
        output.push('\n');
    }
    output
}

/// Format a readiness probe result.
pub fn format_health(health: &HealthStatus) -> String {
    let mut output = format!("Status: {}\n  Backend: {}", health.status, health.backend);
    if let Some(records) = health.records {
        output.push_str(&format!("\n  Records: {}", records));
    }
    if let Some(error) = &health.error {
        output.push_str(&format!("\n  Error: {}", error));
    }
    output
}
