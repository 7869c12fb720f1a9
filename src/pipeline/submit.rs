//! The single I/O boundary of the form pipeline.
//!
//! Everything the pipeline knows about persistence is
//! [`WaitlistSubmitter::submit`]. Production wires in [`ServerSubmitter`];
//! demos and tests use [`StubSubmitter`], which acknowledges unconditionally
//! after a simulated network delay.

use std::future::Future;

use crate::models::{Ack, LeadRecord};

/// Generic notice shown for any failed attempt; no structured detail
/// reaches the user.
pub const SUBMIT_FAILURE_NOTICE: &str =
    "Something went wrong. Please try again or contact support.";

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    #[error("waitlist submission failed: {0}")]
    Backend(String),
}

pub trait WaitlistSubmitter {
    fn submit(&self, record: LeadRecord) -> impl Future<Output = Result<Ack, SubmitError>>;
}

/// Stub backend: logs the record and acknowledges unconditionally after a
/// simulated network delay (the delay only applies in the browser; native
/// test runs resolve immediately).
#[derive(Debug, Clone)]
pub struct StubSubmitter {
    pub delay_ms: u32,
}

impl Default for StubSubmitter {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

impl WaitlistSubmitter for StubSubmitter {
    async fn submit(&self, record: LeadRecord) -> Result<Ack, SubmitError> {
        #[cfg(feature = "hydrate")]
        if self.delay_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        }
        leptos::logging::log!("stub waitlist submission: {} <{}>", record.full_name, record.email);
        Ok(Ack {
            lead_id: format!("stub-{}", record.email),
            position: 1,
        })
    }
}

/// Production backend: hands the record to the `join_waitlist` server
/// function and folds every transport or server error into the generic
/// [`SubmitError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerSubmitter;

impl WaitlistSubmitter for ServerSubmitter {
    async fn submit(&self, record: LeadRecord) -> Result<Ack, SubmitError> {
        crate::server_fns::join_waitlist(record)
            .await
            .map_err(|e| SubmitError::Backend(e.to_string()))
    }
}
