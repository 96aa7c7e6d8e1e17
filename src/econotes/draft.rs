//! The note being composed, and the "analyzing" state of a suggestion request.

use crate::error::Result;
use crate::model::Category;
use crate::suggest::SuggestionProvider;
use std::cell::Cell;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub eco_tasks: Vec<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category,
            eco_tasks: Vec::new(),
        }
    }

    /// True when adding this draft would be rejected.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Attach a suggested task. Returns false if it was already attached.
    pub fn accept_suggestion(&mut self, task: impl Into<String>) -> bool {
        let task = task.into();
        if self.eco_tasks.contains(&task) {
            return false;
        }
        self.eco_tasks.push(task);
        true
    }
}

/// Runs suggestion requests and exposes whether one is in flight.
///
/// The flag only guards what is displayed; overlapping requests are allowed.
pub struct Analyzer<P: SuggestionProvider> {
    provider: P,
    pending: Cell<usize>,
}

struct PendingGuard<'a>(&'a Cell<usize>);

impl<'a> PendingGuard<'a> {
    fn enter(cell: &'a Cell<usize>) -> Self {
        cell.set(cell.get() + 1);
        Self(cell)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

impl<P: SuggestionProvider> Analyzer<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            pending: Cell::new(0),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.get() > 0
    }

    /// Ask the provider about the draft's content. The analyzing flag is
    /// cleared when the request finishes, fails or is dropped.
    pub async fn analyze(&self, draft: &NoteDraft) -> Result<Vec<String>> {
        let _guard = PendingGuard::enter(&self.pending);
        self.provider.suggest(&draft.content).await
    }
}
