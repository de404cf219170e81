//! Scholarship eligibility engine.
//!
//! A fixed, ordered set of [`Condition`]s is registered once at startup
//! (normally from the [`catalog`]); every evaluation runs the full list
//! against one (profile, criteria) pair and aggregates the per-criterion
//! results into an [`EligibilityReport`]. The engine is read-only after
//! construction and safe to share across request handlers.

pub mod catalog;
pub mod condition;
pub mod domain;
pub mod normalize;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalog::{catalog, create_engine};
pub use condition::{
    BoolOperator, BooleanRule, CheckOutcome, Condition, ListOperator, ListRule, RangeOperator,
    RangeRule, Rule, RuleError, ValueFormat,
};
pub use domain::{
    Category, CheckKind, CheckResult, EligibilityCriteria, EligibilityReport, Importance,
    StudentProfile,
};
pub use router::eligibility_router;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Building an engine with nothing registered is a deployment bug,
    /// not a data problem, and is surfaced as a hard failure.
    #[error("no eligibility conditions registered")]
    NoConditions,
}

/// Accumulates registrations, then freezes into an engine. Re-registering
/// an id replaces the earlier entry; order is ascending priority with
/// ties broken by registration order.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    slots: Vec<Slot>,
}

#[derive(Debug)]
struct Slot {
    priority: i32,
    sequence: usize,
    condition: Condition,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, condition: Condition, priority: i32) -> Self {
        let sequence = self
            .slots
            .iter()
            .position(|slot| slot.condition.id == condition.id)
            .map(|existing| self.slots.remove(existing).sequence)
            .unwrap_or(self.slots.len());
        self.slots.push(Slot {
            priority,
            sequence,
            condition,
        });
        self
    }

    /// Bulk registration; priority is the position in the list.
    pub fn register_all(mut self, conditions: Vec<Condition>) -> Self {
        for (index, condition) in conditions.into_iter().enumerate() {
            self = self.register(condition, index as i32);
        }
        self
    }

    pub fn build(mut self) -> Result<EligibilityEngine, EngineError> {
        if self.slots.is_empty() {
            return Err(EngineError::NoConditions);
        }
        self.slots
            .sort_by_key(|slot| (slot.priority, slot.sequence));
        Ok(EligibilityEngine {
            conditions: self.slots.into_iter().map(|slot| slot.condition).collect(),
        })
    }
}

/// Immutable, ordered registry of eligibility conditions.
#[derive(Debug)]
pub struct EligibilityEngine {
    conditions: Vec<Condition>,
}

impl EligibilityEngine {
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Run every registered condition and aggregate the full explanation
    /// report. One faulty condition becomes a failing check with an error
    /// note; it never aborts the rest of the evaluation.
    pub fn check(
        &self,
        profile: &StudentProfile,
        criteria: &EligibilityCriteria,
    ) -> EligibilityReport {
        let mut checks = Vec::with_capacity(self.conditions.len());
        let mut skipped = 0usize;
        for condition in &self.conditions {
            match condition.run(profile, criteria) {
                CheckOutcome::Ok(result) => checks.push(result),
                CheckOutcome::Skipped => skipped += 1,
                CheckOutcome::Fault { reason, .. } => {
                    warn!(condition = %condition.id, %reason, "eligibility condition fault");
                    checks.push(condition.fault_result(&reason));
                }
            }
        }
        EligibilityReport::from_checks(checks, skipped)
    }

    /// Pass/fail gate without the explanation report: evaluates only
    /// required conditions and stops at the first failure. Agrees with
    /// `check(...).passed` for identical inputs.
    pub fn quick_check(&self, profile: &StudentProfile, criteria: &EligibilityCriteria) -> bool {
        for condition in &self.conditions {
            if condition.importance != Importance::Required {
                continue;
            }
            match condition.run(profile, criteria) {
                CheckOutcome::Ok(result) if !result.passed => return false,
                CheckOutcome::Fault { reason, .. } => {
                    warn!(condition = %condition.id, %reason, "eligibility condition fault");
                    return false;
                }
                _ => {}
            }
        }
        true
    }
}
