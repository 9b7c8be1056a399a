//! SQLite schema definitions and SQL query constants.
//!
//! Tag sets are stored as JSON arrays, times as `HH:MM` and timestamps as
//! fixed-width RFC 3339 so that `ORDER BY maker_date_time` sorts correctly.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS system_parameters (
    id TEXT PRIMARY KEY,
    product_type TEXT NOT NULL,
    allowed_sweep_category TEXT NOT NULL,
    allowed_currencies TEXT NOT NULL,
    structure_type TEXT NOT NULL,
    allowed_sweep_type TEXT NOT NULL,
    operating_currency_mode TEXT,
    balance_type TEXT,
    allowed_sweep_frequency TEXT NOT NULL,
    allowed_sweep_execution_mode TEXT NOT NULL,
    sweep_reversal INTEGER NOT NULL,
    max_tt_duration_from TEXT,
    max_tt_duration_to TEXT,
    holiday_treatment TEXT,
    holiday_treatment_currency_holiday TEXT,
    sweep_post_currency_cut_off INTEGER NOT NULL,
    status TEXT NOT NULL,
    action TEXT NOT NULL,
    maker TEXT NOT NULL,
    maker_date_time TEXT NOT NULL,
    checker TEXT,
    checker_date_time TEXT,
    rejection_reason TEXT,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_system_parameters_status_maker
    ON system_parameters(status, maker_date_time);
"#;

/// Column list shared by every SELECT, in `row_to_parameter` order.
macro_rules! parameter_columns {
    () => {
        "id, product_type, allowed_sweep_category, allowed_currencies, structure_type, \
         allowed_sweep_type, operating_currency_mode, balance_type, allowed_sweep_frequency, \
         allowed_sweep_execution_mode, sweep_reversal, max_tt_duration_from, max_tt_duration_to, \
         holiday_treatment, holiday_treatment_currency_holiday, sweep_post_currency_cut_off, \
         status, action, maker, maker_date_time, checker, checker_date_time, rejection_reason, \
         updated_at"
    };
}

pub const INSERT_PARAMETER: &str = concat!(
    "INSERT INTO system_parameters (",
    parameter_columns!(),
    ") VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, \
     ?19, ?20, ?21, ?22, ?23, ?24)"
);

pub const SELECT_PARAMETER_BY_ID: &str = concat!(
    "SELECT ",
    parameter_columns!(),
    " FROM system_parameters WHERE id = ?1"
);

pub const SELECT_PARAMETERS_BY_STATUS: &str = concat!(
    "SELECT ",
    parameter_columns!(),
    " FROM system_parameters WHERE status = ?1 ORDER BY maker_date_time DESC"
);

/// Replaces every mutable column. `id` is `?1`, the rest follow the column list.
pub const UPDATE_PARAMETER: &str = r#"
UPDATE system_parameters
SET product_type = ?2,
    allowed_sweep_category = ?3,
    allowed_currencies = ?4,
    structure_type = ?5,
    allowed_sweep_type = ?6,
    operating_currency_mode = ?7,
    balance_type = ?8,
    allowed_sweep_frequency = ?9,
    allowed_sweep_execution_mode = ?10,
    sweep_reversal = ?11,
    max_tt_duration_from = ?12,
    max_tt_duration_to = ?13,
    holiday_treatment = ?14,
    holiday_treatment_currency_holiday = ?15,
    sweep_post_currency_cut_off = ?16,
    status = ?17,
    action = ?18,
    maker = ?19,
    maker_date_time = ?20,
    checker = ?21,
    checker_date_time = ?22,
    rejection_reason = ?23,
    updated_at = ?24
WHERE id = ?1
"#;

pub const COUNT_PARAMETERS: &str = "SELECT COUNT(*) FROM system_parameters";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS system_parameters"));
        assert!(CREATE_TABLES.contains("id TEXT PRIMARY KEY"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_PARAMETER.contains("INSERT"));
        assert!(INSERT_PARAMETER.contains("?24"));
        assert!(SELECT_PARAMETER_BY_ID.contains("WHERE id = ?1"));
        assert!(SELECT_PARAMETERS_BY_STATUS.contains("ORDER BY maker_date_time DESC"));
        assert!(UPDATE_PARAMETER.contains("updated_at = ?24"));
        assert!(COUNT_PARAMETERS.contains("COUNT"));
    }
}
