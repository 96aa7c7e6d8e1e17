//! # API Facade
//!
//! [`EcoNotesApi`] is the store object UI clients hold: it owns the note
//! sequence (through [`NoteStore`]) and the current view filter, and it is the
//! single entry point for every operation.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Holds view state** (search query, category filter)
//! - **Returns structured types** (`Result<CmdResult>`, borrowed notes)
//!
//! Business logic lives in `commands/*.rs`; nothing here prints.
//!
//! ## Generic Over StorageBackend
//!
//! `EcoNotesApi<B: StorageBackend>` is generic over the persistence slot:
//! - Production: `EcoNotesApi<FsBackend>`
//! - Testing: `EcoNotesApi<MemBackend>`
//!
//! It is constructed once per session and passed by reference; there is no
//! global instance.

use crate::commands;
use crate::draft::NoteDraft;
use crate::error::Result;
use crate::model::{Category, CategoryFilter, Note, NoteId};
use crate::store::{NoteStore, StorageBackend};

pub struct EcoNotesApi<B: StorageBackend> {
    store: NoteStore<B>,
    filter: NoteFilter,
}

impl<B: StorageBackend> EcoNotesApi<B> {
    /// Load the notes stored under `key`. Never fails: unreadable state
    /// starts an empty store.
    pub fn open(backend: B, key: impl Into<String>) -> Self {
        Self {
            store: NoteStore::open(backend, key),
            filter: NoteFilter::default(),
        }
    }

    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
        eco_tasks: Vec<String>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.store,
            title.into(),
            content.into(),
            category,
            eco_tasks,
        )
    }

    pub fn add_draft(&mut self, draft: NoteDraft) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.store,
            draft.title,
            draft.content,
            draft.category,
            draft.eco_tasks,
        )
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn toggle_eco_task(&mut self, id: NoteId, task: &str) -> Result<commands::CmdResult> {
        commands::toggle::run(&mut self.store, id, task)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Notes passing the current filter, most recent first. Computed on
    /// every call.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        commands::list::filter_notes(self.store.notes(), &self.filter)
    }

    /// Points over all notes, ignoring the filter.
    pub fn total_points(&self) -> u32 {
        commands::points::total(self.store.notes())
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.filter)
    }

    pub fn points_summary(&self) -> Result<commands::CmdResult> {
        commands::points::run(&self.store)
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.store.get(id)
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }
}

pub use crate::commands::list::NoteFilter;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
