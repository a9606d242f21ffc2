//! Linear undo/redo over plan transactions.
//!
//! Two stacks of forward/backward delta pairs. Pushing a new transaction
//! clears the redo stack; empty diffs are rejected so no-op edits never
//! pollute history. Undo/redo on an empty stack is a no-op.

use super::diff::{apply, PlanDiff};
use super::Plan;

/// Undo/redo stacks for one plan session.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<PlanDiff>,
    future: Vec<PlanDiff>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Record a committed transaction. Returns false (and records nothing)
    /// for an empty diff.
    pub fn push(&mut self, diff: PlanDiff) -> bool {
        if diff.is_empty() {
            return false;
        }
        self.past.push(diff);
        self.future.clear();
        true
    }

    /// Revert the most recent transaction against `plan`. Returns the
    /// restored snapshot, or None when there is nothing to undo.
    pub fn undo(&mut self, plan: &Plan) -> Option<Plan> {
        let entry = self.past.pop()?;
        let restored = apply(plan, &entry.backward);
        self.future.push(entry);
        Some(restored)
    }

    /// Re-apply the most recently undone transaction against `plan`.
    pub fn redo(&mut self, plan: &Plan) -> Option<Plan> {
        let entry = self.future.pop()?;
        let next = apply(plan, &entry.forward);
        self.past.push(entry);
        Some(next)
    }

    /// Drop all recorded transactions (e.g. when switching months).
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn depth(&self) -> usize {
        self.past.len()
    }
}
