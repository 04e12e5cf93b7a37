use indexmap::IndexMap;

use crate::model::finals_entry::{FinalsEntry, ScheduleKey};

/// The finals schedule keyed by (class time, day token). Built once from the
/// finals page, read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct FinalsIndex {
    entries: IndexMap<ScheduleKey, FinalsEntry>,
}

impl FinalsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry; a later entry with the same key replaces the earlier one.
    pub fn insert(&mut self, entry: FinalsEntry) {
        let key = ScheduleKey::new(&entry.class_time, &entry.class_days);
        if let Some(old) = self.entries.insert(key, entry) {
            log::debug!(
                "finals entry for {} {} replaced (was {} {})",
                old.class_time, old.class_days, old.final_day, old.final_time
            );
        }
    }

    /// Returns `(final day, final time)` for a class time and day token.
    pub fn lookup(&self, time: &str, day_token: &str) -> Option<(&str, &str)> {
        self.entries
            .get(&ScheduleKey::new(time, day_token))
            .map(|e| (e.final_day.as_str(), e.final_time.as_str()))
    }

    pub fn entries(&self) -> impl Iterator<Item = &FinalsEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<FinalsEntry> for FinalsIndex {
    fn from_iter<I: IntoIterator<Item = FinalsEntry>>(iter: I) -> Self {
        let mut index = FinalsIndex::new();
        for entry in iter {
            index.insert(entry);
        }
        index
    }
}
