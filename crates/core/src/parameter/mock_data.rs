use chrono::{DateTime, Duration, NaiveTime, Utc};
use uuid::Uuid;

use super::types::{
    HolidayTreatment, ParameterDetails, RecordAction, RecordStatus, SystemParameter,
};

/// Fixed ids so that seeding a persistent store twice is a no-op.
pub const SEED_DOMESTIC_ID: Uuid = Uuid::from_u128(0x5e3d_0001_0000_4000_8000_0000_0000_0001);
pub const SEED_CROSS_BORDER_ID: Uuid = Uuid::from_u128(0x5e3d_0001_0000_4000_8000_0000_0000_0002);

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Generates demo records for a freshly started server.
/// Both are already authorized, so the pending queue starts empty.
pub fn generate_seed_parameters(now: DateTime<Utc>) -> Vec<SystemParameter> {
    let domestic_made = now - Duration::days(2);
    let domestic_checked = domestic_made + Duration::hours(3);
    let cross_border_made = now - Duration::days(1);
    let cross_border_checked = cross_border_made + Duration::hours(2);

    vec![
        SystemParameter {
            id: SEED_DOMESTIC_ID,
            details: ParameterDetails {
                product_type: "Sweep".to_string(),
                allowed_sweep_category: tags(&["Domestic"]),
                allowed_currencies: tags(&["USD", "EUR"]),
                structure_type: tags(&["Single Tier"]),
                allowed_sweep_type: tags(&["Zero Balance Account"]),
                operating_currency_mode: Some("Mono CCY".to_string()),
                balance_type: Some("Available Balance".to_string()),
                allowed_sweep_frequency: tags(&["Daily"]),
                allowed_sweep_execution_mode: tags(&["Manual"]),
                sweep_reversal: false,
                max_tt_duration_from: NaiveTime::from_hms_opt(9, 0, 0),
                max_tt_duration_to: NaiveTime::from_hms_opt(17, 0, 0),
                holiday_treatment: Some(HolidayTreatment::NextWorkingDay),
                holiday_treatment_currency_holiday: Some(HolidayTreatment::NextWorkingDay),
                sweep_post_currency_cut_off: false,
            },
            status: RecordStatus::Authorized,
            action: RecordAction::Create,
            maker: "john.doe".to_string(),
            maker_date_time: domestic_made,
            checker: Some("admin.user".to_string()),
            checker_date_time: Some(domestic_checked),
            rejection_reason: None,
            updated_at: domestic_checked,
        },
        SystemParameter {
            id: SEED_CROSS_BORDER_ID,
            details: ParameterDetails {
                product_type: "Sweep".to_string(),
                allowed_sweep_category: tags(&["Cross Border"]),
                allowed_currencies: tags(&["GBP", "JPY"]),
                structure_type: tags(&["Hierarchy"]),
                allowed_sweep_type: tags(&["Fixed Sweep"]),
                operating_currency_mode: Some("Cross CCY".to_string()),
                balance_type: Some("Ledger Balance".to_string()),
                allowed_sweep_frequency: tags(&["Weekly"]),
                allowed_sweep_execution_mode: tags(&["Automatic"]),
                sweep_reversal: true,
                max_tt_duration_from: NaiveTime::from_hms_opt(8, 0, 0),
                max_tt_duration_to: NaiveTime::from_hms_opt(18, 0, 0),
                holiday_treatment: Some(HolidayTreatment::PreviousWorkingDay),
                holiday_treatment_currency_holiday: Some(HolidayTreatment::PreviousWorkingDay),
                sweep_post_currency_cut_off: true,
            },
            status: RecordStatus::Authorized,
            action: RecordAction::Update,
            maker: "jane.smith".to_string(),
            maker_date_time: cross_border_made,
            checker: Some("admin.user".to_string()),
            checker_date_time: Some(cross_border_checked),
            rejection_reason: None,
            updated_at: cross_border_checked,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::validation::validate_parameter;

    #[test]
    fn test_seed_parameters_are_authorized_and_valid() {
        let seeds = generate_seed_parameters(Utc::now());

        assert_eq!(seeds.len(), 2);
        for seed in &seeds {
            assert_eq!(seed.status, RecordStatus::Authorized);
            assert!(seed.checker.is_some());
            assert!(validate_parameter(&seed.details).is_empty());
        }
    }

    #[test]
    fn test_seed_ids_are_stable() {
        let first = generate_seed_parameters(Utc::now());
        let second = generate_seed_parameters(Utc::now());

        assert_eq!(first[0].id, SEED_DOMESTIC_ID);
        assert_eq!(first[1].id, SEED_CROSS_BORDER_ID);
        assert_eq!(first[0].id, second[0].id);
    }

    #[test]
    fn test_seed_checker_after_maker() {
        let now = Utc::now();
        for seed in generate_seed_parameters(now) {
            let checked = seed.checker_date_time.unwrap();
            assert!(checked > seed.maker_date_time);
            assert!(checked <= now);
        }
    }
}
