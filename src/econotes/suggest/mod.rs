//! # Suggestions
//!
//! The suggestion provider proposes eco-tasks for a note based on its text.
//! It is a plain keyword lookup: a static table of keyword rules is matched by
//! substring against the lowercased content and a random pick is made among
//! the matches (or among the whole catalog when nothing matches). A
//! configurable delay stands in for "analysis" time.
//!
//! Providers never touch the store. The caller decides whether to attach a
//! returned task to the draft it is composing.

use crate::error::Result;

pub mod catalog;
pub mod keyword;

pub use catalog::ECO_TASKS;
pub use keyword::{KeywordSuggester, SuggestSettings};

/// Source of candidate eco-tasks for a piece of note content.
#[allow(async_fn_in_trait)]
pub trait SuggestionProvider {
    /// Candidate tasks for `content`. Dropping the future cancels the request.
    async fn suggest(&self, content: &str) -> Result<Vec<String>>;
}
