//! Fuzzy ingredient matching against the inventory catalog
//!
//! Recipe lines carry candidate name fragments rather than inventory
//! identifiers; this matcher scores each active catalog item against the
//! fragments and accepts the best item at or above a minimum score.
//! Unmatched lines are surfaced to the caller, never silently dropped.

use shared::InventoryItem;

use crate::config::MatcherConfig;
use crate::error::{EngineError, EngineResult};

/// A catalog item accepted by the matcher, with its total score
#[derive(Debug, Clone, Copy)]
pub struct ScoredMatch<'a> {
    pub item: &'a InventoryItem,
    pub score: u32,
}

/// Scoring matcher for recipe-line candidate fragments
#[derive(Debug, Clone)]
pub struct IngredientMatcher {
    config: MatcherConfig,
}

impl IngredientMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Lowercase, collapse non-alphanumeric runs to single spaces, trim
    pub fn normalize(text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Total score of an item name against all candidate fragments
    ///
    /// Per fragment: exact full-string match and substring match both
    /// award points (an exact match earns both), plus points for each
    /// whitespace-delimited token of the fragment found in the name.
    pub fn score(&self, candidates: &[String], item_name: &str) -> u32 {
        let name = Self::normalize(item_name);
        let mut total = 0;

        for candidate in candidates {
            let fragment = Self::normalize(candidate);
            if fragment.is_empty() {
                continue;
            }
            if fragment == name {
                total += self.config.exact_score;
            }
            if name.contains(&fragment) {
                total += self.config.substring_score;
            }
            for token in fragment.split(' ') {
                if name.contains(token) {
                    total += self.config.token_score;
                }
            }
        }

        total
    }

    /// Select the best-scoring active item, or None when no item reaches
    /// the acceptance threshold
    ///
    /// Ties are broken by catalog iteration order: the first item seen at
    /// the winning score is kept.
    pub fn best_match<'a>(
        &self,
        candidates: &[String],
        catalog: &'a [InventoryItem],
    ) -> Option<ScoredMatch<'a>> {
        let mut best: Option<ScoredMatch<'a>> = None;

        for item in catalog.iter().filter(|item| item.is_active()) {
            let score = self.score(candidates, &item.name);
            if score < self.config.min_score {
                continue;
            }
            let beats_best = match best {
                Some(ref current) => score > current.score,
                None => true,
            };
            if beats_best {
                best = Some(ScoredMatch { item, score });
            }
        }

        match best {
            Some(ref found) => {
                tracing::debug!(
                    item = %found.item.name,
                    score = found.score,
                    "matched recipe candidates to inventory item"
                );
            }
            None => {
                tracing::debug!(?candidates, "no inventory item reached the match threshold");
            }
        }

        best
    }

    /// Single-line matching for hosts that want the hard-failure channel
    /// instead of a missing list
    pub fn require_match<'a>(
        &self,
        label: &str,
        candidates: &[String],
        catalog: &'a [InventoryItem],
    ) -> EngineResult<ScoredMatch<'a>> {
        self.best_match(candidates, catalog)
            .ok_or_else(|| EngineError::NoIngredientMatch {
                label: label.to_string(),
            })
    }
}

impl Default for IngredientMatcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}
