use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Note;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Note title
    pub title: String,
    /// Note description
    pub description: String,
    /// Server-assigned creation time
    pub created_on: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            title: note.title,
            description: note.description,
            created_on: note.created_on,
        }
    }
}

/// Any `createdOn` sent by the client is dropped during decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateNoteRequest {
    /// Note title
    pub title: String,
    /// Note description
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateNoteRequest {
    /// New note title
    pub title: String,
    /// New note description
    pub description: String,
}
