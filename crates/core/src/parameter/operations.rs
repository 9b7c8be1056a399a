use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::requests::SubmitParameterRequest;
use super::types::{RecordStatus, SystemParameter};

/// Builds a freshly submitted record: new id, pending, stamped with the maker.
pub fn new_parameter(
    request: SubmitParameterRequest,
    maker: impl Into<String>,
    now: DateTime<Utc>,
) -> SystemParameter {
    SystemParameter {
        id: Uuid::new_v4(),
        details: request.details,
        status: RecordStatus::PendingAuthorization,
        action: request.action,
        maker: maker.into(),
        maker_date_time: now,
        checker: None,
        checker_date_time: None,
        rejection_reason: None,
        updated_at: now,
    }
}

/// Filter records by status.
pub fn filter_by_status(
    records: &[SystemParameter],
    status: RecordStatus,
) -> Vec<&SystemParameter> {
    records.iter().filter(|r| r.status == status).collect()
}

/// Sort records by submission time, newest first.
pub fn sort_newest_first(records: &mut [SystemParameter]) {
    records.sort_by(|a, b| b.maker_date_time.cmp(&a.maker_date_time));
}

/// Records in `status`, newest first.
pub fn select_by_status(records: &[SystemParameter], status: RecordStatus) -> Vec<SystemParameter> {
    let mut selected: Vec<SystemParameter> = filter_by_status(records, status)
        .into_iter()
        .cloned()
        .collect();
    sort_newest_first(&mut selected);
    selected
}
