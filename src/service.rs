//! Boundary contracts for the collaborators around the renderer: the text
//! generator, the submission store, and the notification dispatcher, plus the
//! validation gate and the orchestration that ties one request together.
//!
//! The renderer core never depends on any of this; these seams exist so the
//! surrounding service (HTTP routing, real persistence, outbound email) can
//! be plain glue.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error;
use crate::pdf::{self, RenderOptions};

/// One inbound request payload, stored verbatim by the submission store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    pub property_type: String,
    pub project_type: String,
    /// Free-form specification data collected by the questionnaire.
    pub specification: serde_json::Value,
    pub address: String,
    pub postcode: String,
    pub contact_name: String,
    pub contact_email: String,
}

/// External text-generation collaborator. Returns report text following the
/// section grammar (blank-line-delimited sections, `|` tables, `•`
/// checklists); the renderer treats the result as untrusted either way.
pub trait ReportSource {
    fn generate(&self, submission: &Submission) -> Result<String, String>;
}

/// Durable store for the original payload. Returns the opaque key it
/// assigned; the renderer never reads it back.
pub trait SubmissionStore {
    fn store(
        &self,
        submission: &Submission,
        received_at: chrono::DateTime<Utc>,
    ) -> Result<String, String>;
}

/// Confirmation-message dispatcher. Invoked only after storage succeeds, and
/// its failure never surfaces to the caller.
pub trait NotificationDispatcher {
    fn notify(&self, submission: &Submission) -> Result<(), String>;
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("missing or empty field: {field}")]
    Validation { field: &'static str },

    #[error("report generation failed: {0}")]
    Generation(String),

    #[error("failed to store submission: {0}")]
    Persistence(String),

    #[error(transparent)]
    Render(#[from] Error),
}

/// Reject a submission unless every required field carries a value. An empty
/// string — or an empty/non-object specification — counts as absent.
pub fn validate(submission: &Submission) -> Result<(), ServiceError> {
    fn required(field: &'static str, value: &str) -> Result<(), ServiceError> {
        if value.trim().is_empty() {
            Err(ServiceError::Validation { field })
        } else {
            Ok(())
        }
    }

    required("property_type", &submission.property_type)?;
    required("project_type", &submission.project_type)?;
    let spec_present = submission
        .specification
        .as_object()
        .is_some_and(|o| !o.is_empty());
    if !spec_present {
        return Err(ServiceError::Validation { field: "specification" });
    }
    required("address", &submission.address)?;
    required("postcode", &submission.postcode)?;
    required("contact_name", &submission.contact_name)?;
    required("contact_email", &submission.contact_email)?;
    Ok(())
}

/// Drive one request end to end: validate, store the payload, generate the
/// report text, render it, then send the confirmation. Persistence failure
/// fails the request; notification failure is logged and swallowed and never
/// undoes the store.
pub fn handle_submission(
    submission: &Submission,
    source: &impl ReportSource,
    store: &impl SubmissionStore,
    notifier: &impl NotificationDispatcher,
    options: &RenderOptions,
) -> Result<Vec<u8>, ServiceError> {
    validate(submission)?;

    let key = store
        .store(submission, Utc::now())
        .map_err(ServiceError::Persistence)?;
    log::info!("stored submission {key}");

    let text = source
        .generate(submission)
        .map_err(ServiceError::Generation)?;
    if text.trim().is_empty() {
        return Err(ServiceError::Generation("generator returned empty text".into()));
    }

    let document = pdf::render(&text, options)?;

    if let Err(e) = notifier.notify(submission) {
        log::warn!("confirmation notification failed for {key}: {e}");
    }

    Ok(document)
}
