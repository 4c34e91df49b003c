//! Draft state — the in-memory, unsaved candidate values for a schedule.

use std::collections::BTreeSet;

use sr_domain::schedule::{ScheduleFields, ScheduleRecord, Weekday};

/// Mutable candidate values for a schedule being created or edited.
///
/// A draft is never persisted here: it is seeded when the editor is built
/// (empty for create, copied from the record for edit) and discarded by the
/// caller on cancel or after a successful submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub topic: String,
    pub time: String,
    pub days: BTreeSet<Weekday>,
    pub description: String,
}

impl ScheduleDraft {
    /// Create-mode defaults: everything empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Edit-mode seeding from an existing record.
    pub fn from_record(record: &ScheduleRecord) -> Self {
        Self {
            topic: record.fields.topic.clone(),
            time: record.fields.time.clone(),
            days: record.fields.days.clone(),
            description: record.fields.description.clone(),
        }
    }

    /// Flip one day's membership and return the new membership.
    ///
    /// Add and remove are idempotent, so the final set depends only on
    /// which days ended up selected, never on toggle order.
    pub fn toggle_day(&mut self, day: Weekday) -> bool {
        if self.days.remove(&day) {
            false
        } else {
            self.days.insert(day);
            true
        }
    }

    /// Force one day's membership (checkbox semantics).
    pub fn set_day(&mut self, day: Weekday, selected: bool) {
        if selected {
            self.days.insert(day);
        } else {
            self.days.remove(&day);
        }
    }

    /// Number of currently selected days. Always equals the cardinality of
    /// `days` and recomputes synchronously on every toggle.
    pub fn selected_day_count(&self) -> usize {
        self.days.len()
    }

    /// Snapshot the draft into the submittable value object.
    pub fn fields(&self) -> ScheduleFields {
        ScheduleFields {
            topic: self.topic.clone(),
            time: self.time.clone(),
            days: self.days.clone(),
            description: self.description.clone(),
        }
    }
}
