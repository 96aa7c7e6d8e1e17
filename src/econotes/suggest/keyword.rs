use super::catalog::{matching_tasks, ECO_TASKS};
use super::SuggestionProvider;
use crate::error::{EcoError, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestSettings {
    /// Artificial "analysis" time before answering.
    pub delay: Duration,
    /// Upper bound on the number of returned candidates.
    pub max_suggestions: usize,
    /// Content shorter than this (in chars, after trimming) gets no suggestions.
    pub min_content_len: usize,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
            max_suggestions: 1,
            min_content_len: 5,
        }
    }
}

impl SuggestSettings {
    /// Same settings without the delay, for tests and scripted use.
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Keyword-to-task matcher with a random pick among the matches.
///
/// The random source is injected so a fixed seed gives reproducible picks.
pub struct KeywordSuggester<R: Rng = StdRng> {
    settings: SuggestSettings,
    rng: Mutex<R>,
}

impl KeywordSuggester<StdRng> {
    pub fn seeded(seed: u64, settings: SuggestSettings) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), settings)
    }

    pub fn from_entropy(settings: SuggestSettings) -> Self {
        Self::with_rng(StdRng::from_entropy(), settings)
    }
}

impl<R: Rng> KeywordSuggester<R> {
    pub fn with_rng(rng: R, settings: SuggestSettings) -> Self {
        Self {
            settings,
            rng: Mutex::new(rng),
        }
    }

    /// Pick candidates for `content` right away, without the delay.
    ///
    /// Empty for content under the length threshold. Otherwise non-empty:
    /// picks from the keyword matches, or from the whole catalog when nothing
    /// matches.
    pub fn pick(&self, content: &str) -> Vec<String> {
        if content.trim().chars().count() < self.settings.min_content_len {
            return Vec::new();
        }

        let mut candidates = matching_tasks(content);
        if candidates.is_empty() {
            debug!("No keyword matched, drawing from the full catalog");
            candidates = ECO_TASKS.to_vec();
        }

        let amount = self.settings.max_suggestions.max(1);
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        candidates
            .choose_multiple(&mut *rng, amount)
            .map(|task| task.to_string())
            .collect()
    }

    /// Like [`SuggestionProvider::suggest`], but gives up with
    /// [`EcoError::Cancelled`] as soon as `token` is cancelled.
    pub async fn suggest_with_cancel(
        &self,
        content: &str,
        token: &CancellationToken,
    ) -> Result<Vec<String>> {
        if content.trim().chars().count() < self.settings.min_content_len {
            return Ok(Vec::new());
        }
        if token.is_cancelled() {
            return Err(EcoError::Cancelled);
        }

        if !self.settings.delay.is_zero() {
            tokio::select! {
                _ = token.cancelled() => return Err(EcoError::Cancelled),
                _ = tokio::time::sleep(self.settings.delay) => {}
            }
        }

        Ok(self.pick(content))
    }
}

impl<R: Rng> SuggestionProvider for KeywordSuggester<R> {
    async fn suggest(&self, content: &str) -> Result<Vec<String>> {
        self.suggest_with_cancel(content, &CancellationToken::new())
            .await
    }
}
