//! Admin certificate editor.
//!
//! Models the add/edit dialog and the confirmed delete as a state machine.
//! The editor owns the draft being edited, produces the HTTP request to send
//! and reacts to its outcome. It performs no I/O itself.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::certificate::Certificate;
use crate::domain::types::{CategoryId, CertificateId};
use crate::forms::certificates::CertificateForm;

/// Alert shown when the API rejects a save.
pub const SAVE_FAILED_ALERT: &str = "Failed to save certificate";
/// Alert shown when the API rejects a delete.
pub const DELETE_FAILED_ALERT: &str = "Failed to delete certificate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Adding,
    Editing(CertificateId),
    /// A save is in flight. Holds the state to return to on failure.
    Saving(Box<EditorState>),
    /// Waiting for the admin to confirm deleting the certificate.
    ConfirmingDelete(CertificateId),
    Deleting(CertificateId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("no certificate is being edited")]
    NotEditing,
    #[error("a save is already in progress")]
    SaveInProgress,
    #[error("no save is in progress")]
    NotSaving,
    #[error("close the editor before deleting")]
    DialogOpen,
    #[error("a delete is already in progress")]
    DeleteInProgress,
    #[error("no delete is awaiting confirmation")]
    NoDeletePending,
    #[error("no delete is in progress")]
    NotDeleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }
}

/// Request the caller must send to persist the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub method: RequestMethod,
    pub path: String,
    pub body: CertificateForm,
}

/// Bodyless request the caller must send to delete a certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub method: RequestMethod,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateEditor {
    state: EditorState,
    draft: CertificateForm,
    alert: Option<String>,
}

impl Default for CertificateEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateEditor {
    pub fn new() -> Self {
        Self {
            state: EditorState::Idle,
            draft: CertificateForm::default(),
            alert: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn draft(&self) -> &CertificateForm {
        &self.draft
    }

    /// Mutable access to the draft fields while the dialog is open.
    pub fn draft_mut(&mut self) -> Result<&mut CertificateForm, EditorError> {
        self.ensure_open()?;
        Ok(&mut self.draft)
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Whether a save or delete request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, EditorState::Saving(_) | EditorState::Deleting(_))
    }

    fn ensure_not_busy(&self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Saving(_) => Err(EditorError::SaveInProgress),
            EditorState::Deleting(_) => Err(EditorError::DeleteInProgress),
            _ => Ok(()),
        }
    }

    fn ensure_open(&self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Adding | EditorState::Editing(_) => Ok(()),
            EditorState::Saving(_) => Err(EditorError::SaveInProgress),
            EditorState::Deleting(_) => Err(EditorError::DeleteInProgress),
            EditorState::Idle | EditorState::ConfirmingDelete(_) => Err(EditorError::NotEditing),
        }
    }

    /// Open a blank draft issued today in the first available category.
    pub fn open_add(
        &mut self,
        default_category: Option<&CategoryId>,
        today: NaiveDate,
    ) -> Result<(), EditorError> {
        self.ensure_not_busy()?;
        self.draft = CertificateForm {
            issued_date: today.format("%Y-%m-%d").to_string(),
            category_id: default_category
                .map(|id| id.to_string())
                .unwrap_or_default(),
            featured: Some(false),
            ..Default::default()
        };
        self.alert = None;
        self.state = EditorState::Adding;
        Ok(())
    }

    /// Open a draft pre-filled from an existing certificate.
    pub fn open_edit(&mut self, certificate: &Certificate) -> Result<(), EditorError> {
        self.ensure_not_busy()?;
        self.draft = CertificateForm {
            title: certificate.title.to_string(),
            issuer: certificate.issuer.to_string(),
            description: certificate.description.as_ref().map(|d| d.to_string()),
            image_url: certificate.image_url.to_string(),
            link: certificate.link.as_ref().map(|l| l.to_string()),
            issued_date: certificate.issued_date.format("%Y-%m-%d").to_string(),
            featured: Some(certificate.featured),
            category_id: certificate.category.id.to_string(),
            skills: certificate
                .skill_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };
        self.alert = None;
        self.state = EditorState::Editing(certificate.id.clone());
        Ok(())
    }

    /// Add a skill tag. Blank and already present names are ignored.
    pub fn add_skill(&mut self, name: &str) -> Result<bool, EditorError> {
        self.ensure_open()?;
        let name = name.trim();
        if name.is_empty() || self.draft.skills.iter().any(|s| s == name) {
            return Ok(false);
        }
        self.draft.skills.push(name.to_string());
        Ok(true)
    }

    pub fn remove_skill(&mut self, name: &str) -> Result<bool, EditorError> {
        self.ensure_open()?;
        let before = self.draft.skills.len();
        self.draft.skills.retain(|s| s != name.trim());
        Ok(self.draft.skills.len() != before)
    }

    /// Move to `Saving` and return the request carrying the full draft.
    pub fn begin_save(&mut self) -> Result<SaveRequest, EditorError> {
        self.ensure_open()?;
        let (method, path) = match &self.state {
            EditorState::Editing(id) => (RequestMethod::Put, format!("/certificates/{id}")),
            _ => (RequestMethod::Post, "/certificates".to_string()),
        };
        let previous = std::mem::replace(&mut self.state, EditorState::Idle);
        self.state = EditorState::Saving(Box::new(previous));
        self.alert = None;
        Ok(SaveRequest {
            method,
            path,
            body: self.draft.clone(),
        })
    }

    /// Apply the outcome of the request returned by [`Self::begin_save`].
    ///
    /// On success the dialog closes and the draft is reset. On failure the
    /// dialog stays open with the draft intact and an alert is set.
    pub fn finish_save<T, E>(&mut self, outcome: Result<T, E>) -> Result<(), EditorError> {
        let previous = match std::mem::replace(&mut self.state, EditorState::Idle) {
            EditorState::Saving(previous) => *previous,
            other => {
                self.state = other;
                return Err(EditorError::NotSaving);
            }
        };

        match outcome {
            Ok(_) => {
                self.draft = CertificateForm::default();
                self.alert = None;
            }
            Err(_) => {
                self.state = previous;
                self.alert = Some(SAVE_FAILED_ALERT.to_string());
            }
        }
        Ok(())
    }

    /// Ask for confirmation before deleting a certificate.
    pub fn request_delete(&mut self, id: CertificateId) -> Result<(), EditorError> {
        self.ensure_not_busy()?;
        if matches!(self.state, EditorState::Adding | EditorState::Editing(_)) {
            return Err(EditorError::DialogOpen);
        }
        self.alert = None;
        self.state = EditorState::ConfirmingDelete(id);
        Ok(())
    }

    /// Confirm the pending delete and return the request to send.
    pub fn confirm_delete(&mut self) -> Result<DeleteRequest, EditorError> {
        let id = match &self.state {
            EditorState::ConfirmingDelete(id) => id.clone(),
            EditorState::Deleting(_) => return Err(EditorError::DeleteInProgress),
            _ => return Err(EditorError::NoDeletePending),
        };
        let path = format!("/certificates/{id}");
        self.state = EditorState::Deleting(id);
        Ok(DeleteRequest {
            method: RequestMethod::Delete,
            path,
        })
    }

    /// Apply the outcome of the request returned by [`Self::confirm_delete`].
    ///
    /// Either way the editor returns to `Idle`; a failure sets an alert.
    pub fn finish_delete<T, E>(&mut self, outcome: Result<T, E>) -> Result<(), EditorError> {
        if !matches!(self.state, EditorState::Deleting(_)) {
            return Err(EditorError::NotDeleting);
        }
        self.state = EditorState::Idle;
        self.alert = match outcome {
            Ok(_) => None,
            Err(_) => Some(DELETE_FAILED_ALERT.to_string()),
        };
        Ok(())
    }

    /// Close the dialog discarding the draft, or decline a pending delete.
    pub fn cancel(&mut self) -> Result<(), EditorError> {
        self.ensure_not_busy()?;
        self.state = EditorState::Idle;
        self.draft = CertificateForm::default();
        self.alert = None;
        Ok(())
    }
}
