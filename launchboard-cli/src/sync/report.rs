//! Run-level counters

use serde::Serialize;

use crate::api::RecordOutcome;

/// Aggregate result of a push or duplicate run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub items_created: usize,
    pub subitems_created: usize,
    /// Records whose item or one of its subitems failed
    pub failed: usize,
    pub outcomes: Vec<RecordOutcome>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: RecordOutcome) {
        if outcome.item_id.is_some() {
            self.items_created += 1;
        }
        self.subitems_created += outcome.subitems_created;
        if outcome.is_error() {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.outcomes.iter().filter(|o| o.is_error())
    }
}
