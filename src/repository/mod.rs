use std::collections::HashMap;

use chrono::Utc;

use crate::models::Note;

// `last_id` is never reset, so deleted keys are not reused.
#[derive(Debug, Default)]
pub struct Repository {
    notes: HashMap<String, Note>,
    last_id: u64,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_note(&mut self, title: String, description: String) -> (String, Note) {
        let note = Note {
            title,
            description,
            created_on: Utc::now(),
        };

        self.last_id += 1;
        let id = self.last_id.to_string();
        self.notes.insert(id.clone(), note.clone());

        (id, note)
    }

    /// Order of the returned notes is unspecified.
    pub fn get_all_notes(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }

    /// Replaces title and description, keeping the original `created_on`.
    pub fn update_note(&mut self, id: &str, title: String, description: String) -> Option<Note> {
        let note = self.notes.get_mut(id)?;
        note.title = title;
        note.description = description;

        Some(note.clone())
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        self.notes.remove(id).is_some()
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }
}
