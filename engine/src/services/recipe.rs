//! Recipe resolution and versioning
//!
//! Versions per sellable follow the Draft -> Current -> Superseded state
//! machine: publishing a successor closes out the prior current version
//! in the same operation, so at most one current version is ever
//! observable. Resolution returns the current version's lines verbatim;
//! unit conversion is deferred to the conversion service, once per line
//! against the matched inventory item's native unit.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use shared::{
    validate_loss_percent, validate_quantity, RecipeLineSpec, RecipeState, RecipeVersion,
};

use crate::error::{EngineError, EngineResult};

/// Input for creating a recipe version
#[derive(Debug, Clone)]
pub struct CreateVersionInput {
    pub sellable_id: Uuid,
    pub lines: Vec<RecipeLineSpec>,
}

/// Outcome of a batch seeding run
#[derive(Debug, Default, Serialize)]
pub struct SeedReport {
    pub created: usize,
    /// Sellables skipped because a current version already existed
    pub skipped: Vec<Uuid>,
}

/// In-memory recipe version store
#[derive(Debug, Default)]
pub struct RecipeStore {
    versions: HashMap<Uuid, Vec<RecipeVersion>>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single current version for a sellable, if any
    pub fn current(&self, sellable_id: Uuid) -> Option<&RecipeVersion> {
        self.versions
            .get(&sellable_id)?
            .iter()
            .find(|version| version.is_current())
    }

    /// All versions for a sellable, oldest first, preserved for cost
    /// audits
    pub fn history(&self, sellable_id: Uuid) -> &[RecipeVersion] {
        self.versions
            .get(&sellable_id)
            .map(|versions| versions.as_slice())
            .unwrap_or(&[])
    }

    /// Create a new recipe version for a sellable
    ///
    /// Without `force`, a sellable that already has a current version is
    /// a `RecipeVersionConflict`: callers treat it as a benign no-op and
    /// nothing is written. With `force`, the prior current version is
    /// superseded (effective_to stamped) in the same operation that
    /// publishes the successor.
    pub fn create_version(
        &mut self,
        input: CreateVersionInput,
        force: bool,
        now: DateTime<Utc>,
    ) -> EngineResult<&RecipeVersion> {
        validate_lines(&input.lines)?;

        let versions = self.versions.entry(input.sellable_id).or_default();

        let current_idx = versions.iter().position(|version| version.is_current());
        if let Some(idx) = current_idx {
            if !force {
                return Err(EngineError::RecipeVersionConflict {
                    sellable_id: input.sellable_id,
                    version: versions[idx].version,
                });
            }
        }

        let next_version = versions
            .iter()
            .map(|version| version.version)
            .max()
            .unwrap_or(0)
            + 1;

        if let Some(idx) = current_idx {
            let prior = &mut versions[idx];
            transition(prior, RecipeState::Superseded)?;
            prior.effective_to = Some(now);
            tracing::info!(
                sellable_id = %input.sellable_id,
                superseded = prior.version,
                successor = next_version,
                "superseding recipe version"
            );
        }

        let mut version = RecipeVersion {
            sellable_id: input.sellable_id,
            version: next_version,
            lines: input.lines,
            state: RecipeState::Draft,
            effective_from: now,
            effective_to: None,
        };
        transition(&mut version, RecipeState::Current)?;
        versions.push(version);

        Ok(&versions[versions.len() - 1])
    }

    /// Seed a batch of recipes
    ///
    /// Version conflicts skip the sellable and continue; any other error
    /// aborts the batch.
    pub fn seed(
        &mut self,
        seeds: Vec<CreateVersionInput>,
        force: bool,
        now: DateTime<Utc>,
    ) -> EngineResult<SeedReport> {
        let mut report = SeedReport::default();

        for seed in seeds {
            let sellable_id = seed.sellable_id;
            match self.create_version(seed, force, now) {
                Ok(_) => report.created += 1,
                Err(EngineError::RecipeVersionConflict { .. }) => {
                    report.skipped.push(sellable_id);
                }
                Err(other) => return Err(other),
            }
        }

        tracing::info!(
            created = report.created,
            skipped = report.skipped.len(),
            "recipe seeding complete"
        );
        Ok(report)
    }
}

/// Apply a state transition, rejecting any move the state machine does
/// not allow
fn transition(version: &mut RecipeVersion, next: RecipeState) -> EngineResult<()> {
    if !version.state.can_transition(next) {
        return Err(EngineError::Validation {
            field: "state".to_string(),
            message: format!(
                "Invalid recipe state transition: {} to {}",
                version.state.as_str(),
                next.as_str()
            ),
        });
    }
    version.state = next;
    Ok(())
}

fn validate_lines(lines: &[RecipeLineSpec]) -> EngineResult<()> {
    for line in lines {
        line.validate().map_err(|err| EngineError::Validation {
            field: "lines".to_string(),
            message: err.to_string(),
        })?;
        validate_quantity(line.quantity).map_err(|message| EngineError::Validation {
            field: format!("lines.{}.quantity", line.label),
            message: message.to_string(),
        })?;
        validate_loss_percent(line.loss_percent).map_err(|message| EngineError::Validation {
            field: format!("lines.{}.loss_percent", line.label),
            message: message.to_string(),
        })?;
    }
    Ok(())
}
