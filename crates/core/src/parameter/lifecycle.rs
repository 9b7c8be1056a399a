//! Maker-checker transitions.
//!
//! `PENDING_AUTHORIZATION -> {AUTHORIZED, REJECTED}`. Nothing leaves a
//! terminal state and nothing enters `DISABLED`.

use chrono::{DateTime, Utc};

use super::error::LifecycleError;
use super::types::{RecordStatus, SystemParameter};

fn ensure_pending(record: &SystemParameter, to: RecordStatus) -> Result<(), LifecycleError> {
    if record.status.is_pending() {
        Ok(())
    } else {
        Err(LifecycleError::InvalidTransition {
            from: record.status,
            to,
        })
    }
}

/// Authorizes a pending record, stamping the checker and time.
pub fn authorize(
    record: &SystemParameter,
    checker: impl Into<String>,
    now: DateTime<Utc>,
) -> Result<SystemParameter, LifecycleError> {
    ensure_pending(record, RecordStatus::Authorized)?;

    Ok(SystemParameter {
        status: RecordStatus::Authorized,
        checker: Some(checker.into()),
        checker_date_time: Some(now),
        updated_at: now,
        ..record.clone()
    })
}

/// Rejects a pending record, stamping the checker, time and reason.
///
/// The reason is taken as given; callers run `validate_rejection_reason` first.
pub fn reject(
    record: &SystemParameter,
    checker: impl Into<String>,
    reason: impl Into<String>,
    now: DateTime<Utc>,
) -> Result<SystemParameter, LifecycleError> {
    ensure_pending(record, RecordStatus::Rejected)?;

    Ok(SystemParameter {
        status: RecordStatus::Rejected,
        checker: Some(checker.into()),
        checker_date_time: Some(now),
        rejection_reason: Some(reason.into()),
        updated_at: now,
        ..record.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::operations::new_parameter;
    use crate::parameter::requests::SubmitParameterRequest;
    use crate::parameter::types::ParameterDetails;
    use chrono::Duration;

    fn pending() -> SystemParameter {
        let request = SubmitParameterRequest::new(ParameterDetails::new("Pool"));
        new_parameter(request, "maker.one", Utc::now() - Duration::minutes(5))
    }

    #[test]
    fn test_authorize_pending_record() {
        let record = pending();
        let now = Utc::now();

        let authorized = authorize(&record, "checker.one", now).unwrap();

        assert_eq!(authorized.status, RecordStatus::Authorized);
        assert_eq!(authorized.checker.as_deref(), Some("checker.one"));
        assert_eq!(authorized.checker_date_time, Some(now));
        assert_eq!(authorized.updated_at, now);
        assert_eq!(authorized.rejection_reason, None);
        assert_eq!(authorized.id, record.id);
        assert_eq!(authorized.maker, record.maker);
        assert_eq!(authorized.maker_date_time, record.maker_date_time);
        assert_eq!(authorized.details, record.details);
    }

    #[test]
    fn test_reject_pending_record() {
        let record = pending();
        let now = Utc::now();

        let rejected = reject(&record, "checker.two", "Missing currencies", now).unwrap();

        assert_eq!(rejected.status, RecordStatus::Rejected);
        assert_eq!(rejected.checker.as_deref(), Some("checker.two"));
        assert_eq!(rejected.checker_date_time, Some(now));
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Missing currencies"));
    }

    #[test]
    fn test_authorize_is_not_repeatable() {
        let authorized = authorize(&pending(), "checker.one", Utc::now()).unwrap();

        let result = authorize(&authorized, "checker.two", Utc::now());

        assert_eq!(
            result,
            Err(LifecycleError::InvalidTransition {
                from: RecordStatus::Authorized,
                to: RecordStatus::Authorized,
            })
        );
    }

    #[test]
    fn test_rejected_record_cannot_be_authorized() {
        let rejected = reject(&pending(), "checker.one", "No", Utc::now()).unwrap();

        let result = authorize(&rejected, "checker.one", Utc::now());

        assert!(matches!(
            result,
            Err(LifecycleError::InvalidTransition {
                from: RecordStatus::Rejected,
                ..
            })
        ));
    }

    #[test]
    fn test_disabled_record_cannot_be_rejected() {
        let mut record = pending();
        record.status = RecordStatus::Disabled;

        assert!(reject(&record, "checker.one", "No", Utc::now()).is_err());
    }

    #[test]
    fn test_transition_leaves_input_untouched() {
        let record = pending();
        let before = record.clone();

        let _ = authorize(&record, "checker.one", Utc::now()).unwrap();

        assert_eq!(record, before);
    }
}
