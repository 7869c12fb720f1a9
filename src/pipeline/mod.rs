pub mod form;
pub mod submit;
pub mod validation;

pub use form::LeadForm;
pub use submit::{ServerSubmitter, StubSubmitter, SubmitError, WaitlistSubmitter, SUBMIT_FAILURE_NOTICE};
pub use validation::{check_field, format_phone, FieldCheck};
