//! Minimal forward/backward deltas between two plan snapshots.
//!
//! `diff` compares whole cells, so a lock toggle without a shift change is
//! still a recordable (and therefore undoable) transaction. `apply` is the
//! single mutation primitive used by undo/redo and by the session when
//! committing a transaction.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Cell, CellKey, Plan};

/// One cell's change inside a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellChange {
    /// Overwrite (or create) the cell
    Set(Cell),
    /// Remove the cell entirely
    Remove,
}

/// A partial plan update: key to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDelta {
    changes: Vec<(CellKey, CellChange)>,
}

impl PlanDelta {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(CellKey, CellChange)> {
        self.changes.iter()
    }

    fn push(&mut self, key: CellKey, change: CellChange) {
        self.changes.push((key, change));
    }
}

/// Symmetric pair of deltas produced by [`diff`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDiff {
    pub forward: PlanDelta,
    pub backward: PlanDelta,
}

impl PlanDiff {
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.backward.is_empty()
    }
}

/// Compute the minimal forward/backward deltas turning `old` into `new`
/// (and back). Keys present in neither direction produce no entries.
pub fn diff(old: &Plan, new: &Plan) -> PlanDiff {
    let keys: BTreeSet<&CellKey> = old.iter().map(|(k, _)| k).chain(new.iter().map(|(k, _)| k)).collect();

    let mut out = PlanDiff::default();
    for key in keys {
        let old_cell = old.get(key);
        let new_cell = new.get(key);
        if old_cell == new_cell {
            continue;
        }
        out.forward.push(
            key.clone(),
            match new_cell {
                Some(c) => CellChange::Set(c.clone()),
                None => CellChange::Remove,
            },
        );
        out.backward.push(
            key.clone(),
            match old_cell {
                Some(c) => CellChange::Set(c.clone()),
                None => CellChange::Remove,
            },
        );
    }
    out
}

/// Apply a delta to a plan snapshot, returning the updated snapshot.
pub fn apply(plan: &Plan, delta: &PlanDelta) -> Plan {
    let mut out = plan.clone();
    for (key, change) in delta.iter() {
        match change {
            CellChange::Set(cell) => out.set_cell(key.clone(), cell.clone()),
            CellChange::Remove => {
                out.remove(&key.employee_id, key.day);
            }
        }
    }
    out
}
