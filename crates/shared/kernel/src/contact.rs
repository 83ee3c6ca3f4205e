//! Contact form state machine: `editing → submitted`.
//!
//! Submission is a local acknowledgment only. Nothing leaves the page.

use crate::error::format_context;
use folio_domain::{ContactDraft, ContactField};
use std::borrow::Cow;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was empty at submission time.
    #[error("Contact form incomplete{}: `{field}` is required", format_context(.context))]
    MissingField { field: ContactField, context: Option<Cow<'static, str>> },
    /// The form already accepted a submission during this mount.
    #[error("Contact form already submitted{}", format_context(.context))]
    AlreadySubmitted { context: Option<Cow<'static, str>> },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: ContactPhase,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    #[must_use]
    pub const fn phase(&self) -> ContactPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self.phase, ContactPhase::Submitted)
    }

    /// Applies one keystroke's worth of input. Ignored once submitted.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.is_submitted() {
            return false;
        }
        self.draft.set(field, value);
        true
    }

    /// Accepts the draft when every field is filled in, clearing it.
    ///
    /// # Errors
    /// [`ContactError::MissingField`] names the first empty field; the draft and
    /// phase are left untouched. [`ContactError::AlreadySubmitted`] once terminal.
    pub fn submit(&mut self) -> Result<(), ContactError> {
        if self.is_submitted() {
            return Err(ContactError::AlreadySubmitted { context: None });
        }
        if let Some(field) = self.draft.first_missing() {
            debug!(%field, "Contact submission refused");
            return Err(ContactError::MissingField {
                field,
                context: Some("Submitting contact form".into()),
            });
        }

        info!(
            name_len = self.draft.name.len(),
            message_len = self.draft.message.len(),
            "Contact message received"
        );
        self.draft = ContactDraft::default();
        self.phase = ContactPhase::Submitted;
        Ok(())
    }
}
