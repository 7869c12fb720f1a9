mod lead;

pub use lead::{Ack, FieldName, FieldState, LeadRecord, SubmissionState};
