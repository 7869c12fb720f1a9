use leptos::prelude::*;

use crate::models::{Ack, LeadRecord};

#[server]
pub async fn join_waitlist(record: LeadRecord) -> Result<Ack, ServerFnError> {
    use crate::{services::waitlist, state::AppState};
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    waitlist::join(&state.db, &record)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn waitlist_count() -> Result<i64, ServerFnError> {
    use crate::{services::waitlist, state::AppState};
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(waitlist::signup_count(&state.db).await)
}

#[server]
pub async fn track_conversion(event: String, identifier: String) -> Result<(), ServerFnError> {
    use crate::state::AppState;
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Delivery failures are deliberately swallowed: tracking must never
    // change the outcome of the signup that fired it
    if let Err(e) = state.tracker.send(&event, &identifier).await {
        eprintln!("Conversion tracking failed: {e}");
    }
    Ok(())
}
