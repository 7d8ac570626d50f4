use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    repository::Repository,
};

use serde::{Deserialize, Serialize};

use std::sync::Arc;

/// What update and delete do when the referenced note does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyPolicy {
    /// Log the miss and report success.
    #[default]
    Ignore,
    /// Log the miss and return `NoteServiceError::KeyNotFound`.
    Report,
}

#[derive(Debug, thiserror::Error)]
pub enum NoteServiceError {
    #[error("could not find note with key {0}")]
    KeyNotFound(String),
}

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<tokio::sync::Mutex<Repository>>,
    missing_key: MissingKeyPolicy,
}

impl NoteService {
    pub const fn new(
        repo: Arc<tokio::sync::Mutex<Repository>>,
        missing_key: MissingKeyPolicy,
    ) -> Self {
        Self { repo, missing_key }
    }

    /// Stores a new note and returns its key together with the stored note.
    pub async fn create_note(&self, request: CreateNoteRequest) -> (String, NoteResponse) {
        let mut repo = self.repo.lock().await;
        let (id, note) = repo.create_note(request.title, request.description);

        tracing::info!("created note {id}");
        tracing::debug!("store holds {} notes", repo.note_count());

        (id, note.into())
    }

    pub async fn get_all_notes(&self) -> Vec<NoteResponse> {
        self.repo
            .lock()
            .await
            .get_all_notes()
            .into_iter()
            .map(NoteResponse::from)
            .collect()
    }

    pub async fn update_note(
        &self,
        id: &str,
        request: UpdateNoteRequest,
    ) -> Result<(), NoteServiceError> {
        let updated = self
            .repo
            .lock()
            .await
            .update_note(id, request.title, request.description);

        match updated {
            Some(_) => Ok(()),
            None => {
                tracing::warn!("could not find key of note {id} to update");
                self.on_missing_key(id)
            }
        }
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), NoteServiceError> {
        if self.repo.lock().await.delete_note(id) {
            return Ok(());
        }

        tracing::warn!("could not find key of note {id} to delete");
        self.on_missing_key(id)
    }

    fn on_missing_key(&self, id: &str) -> Result<(), NoteServiceError> {
        match self.missing_key {
            MissingKeyPolicy::Ignore => Ok(()),
            MissingKeyPolicy::Report => Err(NoteServiceError::KeyNotFound(id.to_string())),
        }
    }
}
