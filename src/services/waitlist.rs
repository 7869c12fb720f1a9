use uuid::Uuid;

use crate::db::{self, Db};
use crate::models::{Ack, FieldName, LeadRecord};
use crate::pipeline::validation::{check_field, field_error};

#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("{0}")]
    Other(String),
}

/// Server-side mirror of the form rules. Client validation is never trusted.
pub fn validate_record(record: &LeadRecord) -> Result<(), WaitlistError> {
    let values = [
        (FieldName::FullName, record.full_name.as_str()),
        (FieldName::Email, record.email.as_str()),
        (FieldName::Phone, record.phone_number.as_str()),
    ];
    for (field, value) in values {
        if !check_field(field, value).is_valid() {
            return Err(WaitlistError::Invalid(field_error(field)));
        }
    }
    Ok(())
}

/// Adds a lead to the waitlist and returns its acknowledgement.
///
/// Emails are matched case-insensitively; signing up twice with the same
/// address acknowledges with the existing place in line instead of failing.
pub async fn join(db: &Db, record: &LeadRecord) -> Result<Ack, WaitlistError> {
    validate_record(record)?;

    if let Some(existing) = db::get_lead_by_email(db, &record.email).await {
        return Ok(Ack {
            lead_id: existing.id,
            position: existing.position,
        });
    }

    let id = Uuid::new_v4().to_string();
    let position = db::count_leads(db).await + 1;
    db::insert_lead(
        db,
        &id,
        record.full_name.trim(),
        &record.email,
        &record.phone_number,
        &record.created_at.to_rfc3339(),
        position,
    )
    .await
    .map_err(|e| WaitlistError::Other(e.to_string()))?;

    Ok(Ack {
        lead_id: id,
        position,
    })
}

pub async fn signup_count(db: &Db) -> i64 {
    db::count_leads(db).await
}
