//! Tally of per-file disable outcomes.

use crate::disable::DisableItem;

/// Counters plus the ordered per-file items of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisableSummary {
    pub changed: u32,
    pub skipped: u32,
    pub errors: u32,
    pub items: Vec<DisableItem>,
}

impl DisableSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: DisableItem) {
        if item.outcome.is_change() {
            self.changed += 1;
        } else if item.outcome.is_skip() {
            self.skipped += 1;
        } else {
            self.errors += 1;
        }
        self.items.push(item);
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}
