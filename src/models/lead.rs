use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three inputs collected by the waitlist form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    FullName,
    Email,
    Phone,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "full_name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FullName => "Full Name",
            FieldName::Email => "Email Address",
            FieldName::Phone => "Phone Number",
        }
    }

    pub fn all() -> [FieldName; 3] {
        [FieldName::FullName, FieldName::Email, FieldName::Phone]
    }
}

/// Per-field state, updated on input and blur events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    pub raw_value: String,
    pub is_valid: bool,
    pub error: Option<String>,
}

/// A prospective customer's contact record, built only from a fully valid
/// form and never mutated afterwards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadRecord {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement returned by a successful waitlist submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ack {
    pub lead_id: String,
    pub position: i64,
}

/// Lifecycle of a single submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }
}
