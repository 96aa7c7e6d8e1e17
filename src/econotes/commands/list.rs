use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{CategoryFilter, Note};
use crate::store::{NoteStore, StorageBackend};

/// View filter: free-text query plus category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl NoteFilter {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }
}

fn matches_query(note: &Note, query_lower: &str) -> bool {
    query_lower.is_empty()
        || note.title.to_lowercase().contains(query_lower)
        || note.content.to_lowercase().contains(query_lower)
}

/// Notes passing `filter`, in store order (most recent first).
///
/// The query is a case-insensitive substring match against title or content
/// and an empty query matches everything; it is ANDed with the category.
pub fn filter_notes<'a>(notes: &'a [Note], filter: &NoteFilter) -> Vec<&'a Note> {
    let query_lower = filter.query.to_lowercase();
    notes
        .iter()
        .filter(|n| filter.category.matches(n.category) && matches_query(n, &query_lower))
        .collect()
}

pub fn run<B: StorageBackend>(store: &NoteStore<B>, filter: &NoteFilter) -> Result<CmdResult> {
    let listed = filter_notes(store.notes(), filter)
        .into_iter()
        .cloned()
        .collect();
    let total = super::points::total(store.notes());
    Ok(CmdResult::default()
        .with_listed_notes(listed)
        .with_total_points(total))
}
