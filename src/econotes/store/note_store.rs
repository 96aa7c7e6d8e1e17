use super::backend::StorageBackend;
use crate::error::{EcoError, Result};
use crate::model::{Note, NoteId};
use chrono::Utc;
use log::{debug, warn};
use std::collections::HashSet;

/// The note sequence plus its persistence slot.
///
/// Notes are kept most-recently-added first. Every mutating method writes the
/// full sequence back to the slot; a failed write is logged and the in-memory
/// state is kept.
pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
    notes: Vec<Note>,
    last_id: i64,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Load the slot `key` from `backend`.
    ///
    /// An absent slot, an unreadable slot or a slot that fails to parse all
    /// yield an empty store.
    pub fn open(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let notes = load_notes(&backend, &key);
        let last_id = notes.iter().map(|n| n.id.0).max().unwrap_or(0);
        debug!("Opened store '{}' with {} notes", key, notes.len());

        Self {
            backend,
            key,
            notes,
            last_id,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Allocate a fresh id: wall-clock milliseconds, bumped past the last one
    /// handed out so ids stay strictly increasing.
    ///
    /// Fails once a stored id sits at `i64::MAX` and nothing larger exists.
    pub fn next_id(&mut self) -> Result<NoteId> {
        let after_last = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| EcoError::Store("No note ids left after the largest stored id".to_string()))?;
        let id = Utc::now().timestamp_millis().max(after_last);
        self.last_id = id;
        Ok(NoteId(id))
    }

    /// Prepend `note`. Ids must be unique, so a note whose id is already
    /// present is refused and nothing is written.
    pub(crate) fn insert_front(&mut self, note: Note) -> Result<()> {
        if self.get(note.id).is_some() {
            return Err(EcoError::Store(format!("Duplicate note id {}", note.id)));
        }
        self.last_id = self.last_id.max(note.id.0);
        self.notes.insert(0, note);
        self.persist();
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: NoteId) -> Option<Note> {
        let pos = self.notes.iter().position(|n| n.id == id)?;
        let removed = self.notes.remove(pos);
        self.persist();
        Some(removed)
    }

    /// Apply `f` to the note with `id` and persist. Returns None if absent.
    pub(crate) fn update<R>(&mut self, id: NoteId, f: impl FnOnce(&mut Note) -> R) -> Option<R> {
        let note = self.notes.iter_mut().find(|n| n.id == id)?;
        let out = f(note);
        self.persist();
        Some(out)
    }

    /// Write the whole sequence to the slot, reporting failures.
    pub fn flush(&self) -> Result<()> {
        let json = serde_json::to_string(&self.notes)?;
        self.backend.write_slot(&self.key, &json)
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            warn!("Failed to persist notes to '{}': {}", self.key, e);
        }
    }
}

fn load_notes<B: StorageBackend>(backend: &B, key: &str) -> Vec<Note> {
    let raw = match backend.read_slot(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read '{}', starting empty: {}", key, e);
            return Vec::new();
        }
    };

    let parsed: Vec<Note> = match serde_json::from_str(&raw) {
        Ok(notes) => notes,
        Err(e) => {
            warn!("Stored notes in '{}' are malformed, starting empty: {}", key, e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut notes = Vec::with_capacity(parsed.len());
    for mut note in parsed {
        if !seen.insert(note.id) {
            warn!("Dropping note with duplicate id {}", note.id);
            continue;
        }
        if note.normalize() {
            debug!("Normalized completion state of note {}", note.id);
        }
        notes.push(note);
    }
    notes
}
