//! System parameter CLI commands.

use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use sysparam_core::parameter::{
    HolidayTreatment, ParameterDetails, RecordAction, RecordStatus, SubmitParameterRequest,
};
use sysparam_core::serde::parse_time;

use crate::error::Result;

/// System parameter commands.
#[derive(Debug, Parser)]
pub struct ParametersCommand {
    #[command(subcommand)]
    pub action: ParametersAction,
}

/// Available system parameter actions.
#[derive(Debug, Subcommand)]
pub enum ParametersAction {
    /// Submit a record for authorization.
    Submit(SubmitArgs),
    /// List records in one status (pending by default).
    List {
        /// PENDING_AUTHORIZATION, AUTHORIZED, REJECTED or DISABLED. Tab names
        /// such as "pending" are accepted.
        #[arg(long)]
        status: Option<RecordStatus>,
    },
    /// Get a record by ID.
    Get {
        /// Record ID.
        id: Uuid,
    },
    /// Authorize a pending record.
    Authorize {
        /// Record ID.
        id: Uuid,
    },
    /// Reject a pending record.
    Reject {
        /// Record ID.
        id: Uuid,
        /// Why the record is rejected.
        #[arg(long)]
        reason: String,
    },
}

fn parse_time_arg(value: &str) -> std::result::Result<NaiveTime, String> {
    parse_time(value).map_err(|e| format!("expected HH:MM: {e}"))
}

/// Record fields for `submit`. Tag sets take repeated flags or comma lists.
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Read the record from a JSON file instead of flags.
    #[arg(long, conflicts_with = "product_type")]
    pub file: Option<PathBuf>,

    /// Product type; "Sweep" makes the sweep fields mandatory.
    #[arg(long, required_unless_present = "file")]
    pub product_type: Option<String>,

    /// Create, Update or Delete.
    #[arg(long, default_value = "Create")]
    pub action: RecordAction,

    #[arg(long = "sweep-category", value_delimiter = ',')]
    pub allowed_sweep_category: Vec<String>,

    #[arg(long = "currency", value_delimiter = ',')]
    pub allowed_currencies: Vec<String>,

    #[arg(long = "structure-type", value_delimiter = ',')]
    pub structure_type: Vec<String>,

    #[arg(long = "sweep-type", value_delimiter = ',')]
    pub allowed_sweep_type: Vec<String>,

    #[arg(long)]
    pub operating_currency_mode: Option<String>,

    #[arg(long)]
    pub balance_type: Option<String>,

    #[arg(long = "sweep-frequency", value_delimiter = ',')]
    pub allowed_sweep_frequency: Vec<String>,

    #[arg(long = "execution-mode", value_delimiter = ',')]
    pub allowed_sweep_execution_mode: Vec<String>,

    #[arg(long)]
    pub sweep_reversal: bool,

    /// Start of the max transaction time window (HH:MM).
    #[arg(long = "max-tt-from", value_parser = parse_time_arg)]
    pub max_tt_duration_from: Option<NaiveTime>,

    /// End of the max transaction time window (HH:MM).
    #[arg(long = "max-tt-to", value_parser = parse_time_arg)]
    pub max_tt_duration_to: Option<NaiveTime>,

    /// "Next Working Day", "Previous Working Day" or "Skip Execution".
    #[arg(long)]
    pub holiday_treatment: Option<HolidayTreatment>,

    #[arg(long = "currency-holiday-treatment")]
    pub holiday_treatment_currency_holiday: Option<HolidayTreatment>,

    #[arg(long = "post-cut-off")]
    pub sweep_post_currency_cut_off: bool,
}

impl SubmitArgs {
    /// Builds the submit body from `--file` or from the individual flags.
    pub fn into_request(self) -> Result<SubmitParameterRequest> {
        if let Some(path) = self.file {
            let contents = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&contents)?);
        }

        let details = ParameterDetails {
            product_type: self.product_type.unwrap_or_default(),
            allowed_sweep_category: self.allowed_sweep_category,
            allowed_currencies: self.allowed_currencies,
            structure_type: self.structure_type,
            allowed_sweep_type: self.allowed_sweep_type,
            operating_currency_mode: self.operating_currency_mode,
            balance_type: self.balance_type,
            allowed_sweep_frequency: self.allowed_sweep_frequency,
            allowed_sweep_execution_mode: self.allowed_sweep_execution_mode,
            sweep_reversal: self.sweep_reversal,
            max_tt_duration_from: self.max_tt_duration_from,
            max_tt_duration_to: self.max_tt_duration_to,
            holiday_treatment: self.holiday_treatment,
            holiday_treatment_currency_holiday: self.holiday_treatment_currency_holiday,
            sweep_post_currency_cut_off: self.sweep_post_currency_cut_off,
        };

        Ok(SubmitParameterRequest::new(details).with_action(self.action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};

    fn parse(args: &[&str]) -> ParametersAction {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Parameters(cmd) => cmd.action,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_submit_flags_build_sweep_request() {
        let action = parse(&[
            "sysparam-client",
            "params",
            "submit",
            "--product-type",
            "Sweep",
            "--sweep-category",
            "Domestic,Cross Border",
            "--currency",
            "USD",
            "--max-tt-from",
            "09:00",
            "--holiday-treatment",
            "Next Working Day",
            "--action",
            "Update",
        ]);

        let ParametersAction::Submit(args) = action else {
            panic!("expected submit");
        };
        let request = args.into_request().unwrap();

        assert_eq!(request.details.product_type, "Sweep");
        assert_eq!(
            request.details.allowed_sweep_category,
            vec!["Domestic".to_string(), "Cross Border".to_string()]
        );
        assert_eq!(request.details.max_tt_duration_from, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(
            request.details.holiday_treatment,
            Some(HolidayTreatment::NextWorkingDay)
        );
        assert_eq!(request.action, RecordAction::Update);
    }

    #[test]
    fn test_submit_requires_product_type_or_file() {
        let result = Cli::try_parse_from(["sysparam-client", "params", "submit"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_list_accepts_tab_name() {
        let action = parse(&["sysparam-client", "params", "list", "--status", "rejected"]);

        assert!(matches!(
            action,
            ParametersAction::List {
                status: Some(RecordStatus::Rejected)
            }
        ));
    }

    #[test]
    fn test_submit_reads_json_file() {
        let path = std::env::temp_dir().join(format!("sysparam-submit-{}.json", Uuid::new_v4()));
        std::fs::write(&path, r#"{"productType": "Pool", "action": "Delete"}"#).unwrap();

        let action = parse(&[
            "sysparam-client",
            "params",
            "submit",
            "--file",
            path.to_str().unwrap(),
        ]);
        let ParametersAction::Submit(args) = action else {
            panic!("expected submit");
        };
        let request = args.into_request().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(request.details.product_type, "Pool");
        assert_eq!(request.action, RecordAction::Delete);
    }
}
