//! Waitlist form state machine
//!
//! Owns the per-field states and the submission lifecycle, independent of
//! any rendering. The `WaitlistForm` component binds this to the DOM; tests
//! drive it directly.

use chrono::{DateTime, Utc};

use crate::models::{Ack, FieldName, FieldState, LeadRecord, SubmissionState};
use crate::pipeline::submit::SubmitError;
use crate::pipeline::validation::{check_field, field_error, format_phone, FieldCheck};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    full_name: FieldState,
    email: FieldState,
    phone: FieldState,
    state: SubmissionState,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn value(&self, field: FieldName) -> &str {
        &self.field(field).raw_value
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.field(field).error.as_deref()
    }

    /// Handles a keystroke. The phone field is reformatted before it is
    /// stored so validation only ever sees formatted text; any existing
    /// error on the field is cleared optimistically and comes back on the
    /// next blur or submit if still warranted.
    pub fn input(&mut self, field: FieldName, value: &str) {
        let stored = match field {
            FieldName::Phone => format_phone(value),
            _ => value.to_string(),
        };
        let slot = self.field_mut(field);
        slot.raw_value = stored;
        slot.error = None;
    }

    /// Handles the field losing focus. Empty input never shows an error
    /// here; only non-empty invalid input does.
    pub fn blur(&mut self, field: FieldName) {
        let check = check_field(field, self.value(field));
        let slot = self.field_mut(field);
        slot.is_valid = check.is_valid();
        slot.error = check.error().map(str::to_string);
    }

    /// Submit-time validation of every field. Unlike [`blur`](Self::blur),
    /// empty fields fail here and receive their field error, so a record can
    /// never be built from untouched inputs. Returns overall validity.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in FieldName::all() {
            let check = check_field(field, self.value(field));
            let valid = check.is_valid();
            let error = match check {
                FieldCheck::Valid => None,
                FieldCheck::Invalid(msg) => Some(msg.to_string()),
                FieldCheck::Empty => Some(field_error(field).to_string()),
            };
            let slot = self.field_mut(field);
            slot.is_valid = valid;
            slot.error = error;
            all_valid &= valid;
        }
        all_valid
    }

    /// Fields whose state currently carries an error.
    pub fn fields_in_error(&self) -> Vec<FieldName> {
        FieldName::all()
            .into_iter()
            .filter(|f| self.field(*f).error.is_some())
            .collect()
    }

    /// Starts a submission attempt. Re-validates synchronously rather than
    /// trusting stale blur results, refuses while an attempt is already in
    /// flight, and on success transitions to `Submitting` and returns the
    /// record to send. `None` means nothing was sent and the state did not
    /// move to `Submitting`.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Option<LeadRecord> {
        if self.state.is_submitting() {
            return None;
        }
        if !self.validate_all() {
            return None;
        }
        self.state = SubmissionState::Submitting;
        Some(LeadRecord {
            full_name: self.full_name.raw_value.trim().to_string(),
            email: self.email.raw_value.trim().to_string(),
            phone_number: self.phone.raw_value.trim().to_string(),
            created_at: now,
        })
    }

    /// Resolves the in-flight attempt. A late or duplicate resolution when
    /// no attempt is pending is ignored.
    pub fn finish_submit(&mut self, outcome: &Result<Ack, SubmitError>) {
        if !self.state.is_submitting() {
            return;
        }
        self.state = match outcome {
            Ok(_) => SubmissionState::Succeeded,
            Err(_) => SubmissionState::Failed,
        };
    }

    /// Returns the form to `Idle` so the user can start a fresh attempt
    /// after a failure. Field values and errors are left as they are.
    pub fn reset_attempt(&mut self) {
        if self.state.is_terminal() {
            self.state = SubmissionState::Idle;
        }
    }

    fn field(&self, field: FieldName) -> &FieldState {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
        }
    }

    fn field_mut(&mut self, field: FieldName) -> &mut FieldState {
        match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::validation::{EMAIL_ERROR, NAME_ERROR, PHONE_ERROR};

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::new();
        form.input(FieldName::FullName, "  Ada Lovelace ");
        form.input(FieldName::Email, "ada@example.com");
        form.input(FieldName::Phone, "5551234567");
        form
    }

    fn now() -> DateTime<Utc> {
        "2026-08-06T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn phone_input_is_formatted_before_validation() {
        let mut form = LeadForm::new();
        form.input(FieldName::Phone, "5551234567");
        assert_eq!(form.value(FieldName::Phone), "(555) 123-4567");
        form.blur(FieldName::Phone);
        assert_eq!(form.error(FieldName::Phone), None);
    }

    #[test]
    fn blur_shows_error_only_for_nonempty_invalid() {
        let mut form = LeadForm::new();
        form.blur(FieldName::Email);
        assert_eq!(form.error(FieldName::Email), None);

        form.input(FieldName::Email, "a@b");
        form.blur(FieldName::Email);
        assert_eq!(form.error(FieldName::Email), Some(EMAIL_ERROR));
    }

    #[test]
    fn input_clears_error_eagerly() {
        let mut form = LeadForm::new();
        form.input(FieldName::FullName, "A");
        form.blur(FieldName::FullName);
        assert_eq!(form.error(FieldName::FullName), Some(NAME_ERROR));

        form.input(FieldName::FullName, "Ad");
        assert_eq!(form.error(FieldName::FullName), None);
    }

    #[test]
    fn valid_submit_builds_trimmed_record_and_transitions() {
        let mut form = filled_form();
        let record = form.begin_submit(now()).expect("form is valid");

        assert_eq!(record.full_name, "Ada Lovelace");
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.phone_number, "(555) 123-4567");
        assert_eq!(record.created_at, now());
        assert_eq!(form.state(), SubmissionState::Submitting);

        form.finish_submit(&Ok(Ack {
            lead_id: "lead-1".into(),
            position: 42,
        }));
        assert_eq!(form.state(), SubmissionState::Succeeded);
    }

    #[test]
    fn invalid_submit_does_not_transition() {
        let mut form = filled_form();
        form.input(FieldName::Email, "not-an-email");

        assert!(form.begin_submit(now()).is_none());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.error(FieldName::Email), Some(EMAIL_ERROR));
        assert_eq!(form.fields_in_error(), vec![FieldName::Email]);
    }

    #[test]
    fn empty_fields_block_submit_with_errors() {
        let mut form = LeadForm::new();
        assert!(form.begin_submit(now()).is_none());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.error(FieldName::FullName), Some(NAME_ERROR));
        assert_eq!(form.error(FieldName::Email), Some(EMAIL_ERROR));
        assert_eq!(form.error(FieldName::Phone), Some(PHONE_ERROR));
        assert_eq!(form.fields_in_error().len(), 3);
    }

    #[test]
    fn reentrant_submit_is_refused_while_pending() {
        let mut form = filled_form();
        assert!(form.begin_submit(now()).is_some());
        assert!(form.begin_submit(now()).is_none());
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn failed_submit_leaves_form_editable_and_retryable() {
        let mut form = filled_form();
        form.begin_submit(now()).unwrap();
        form.finish_submit(&Err(SubmitError::Backend("boom".into())));
        assert_eq!(form.state(), SubmissionState::Failed);

        // Values survive, fields stay editable
        assert_eq!(form.value(FieldName::Email), "ada@example.com");
        form.input(FieldName::Email, "ada+retry@example.com");

        // A fresh attempt is possible after resetting the failed one
        form.reset_attempt();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.begin_submit(now()).is_some());
    }

    #[test]
    fn late_resolution_without_pending_attempt_is_ignored() {
        let mut form = filled_form();
        form.finish_submit(&Err(SubmitError::Backend("late".into())));
        assert_eq!(form.state(), SubmissionState::Idle);
    }
}
