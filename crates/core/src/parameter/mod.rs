mod error;
mod lifecycle;
mod mock_data;
mod operations;
mod requests;
mod types;
mod validation;

pub use error::{LifecycleError, StatusParseError, ValidationErrors};
pub use lifecycle::{authorize, reject};
pub use mock_data::{generate_seed_parameters, SEED_CROSS_BORDER_ID, SEED_DOMESTIC_ID};
pub use operations::{filter_by_status, new_parameter, select_by_status, sort_newest_first};
pub use requests::{AuthorizeRequest, ListParametersQuery, RejectRequest, SubmitParameterRequest};
pub use types::{
    is_sweep, HolidayTreatment, ParameterDetails, RecordAction, RecordStatus, SystemParameter,
    SWEEP_PRODUCT_TYPE,
};
pub use validation::{
    fields, validate_parameter, validate_rejection_reason, REQUIRED_MESSAGE,
    SWEEP_REQUIRED_FIELDS,
};
