use indexmap::{IndexMap, IndexSet};

use crate::config::DAY_PRIORITY;
use crate::model::class_session::ClassSession;

/// Collapses the per-day sessions of one class into a single
/// (time, day token) pair that can be looked up in the finals index.
#[derive(Clone, Debug)]
pub struct DayTokenReconciler {
    priority: Vec<String>,
}

impl Default for DayTokenReconciler {
    fn default() -> Self {
        DayTokenReconciler::new(DAY_PRIORITY.iter().map(|d| d.to_string()).collect())
    }
}

impl DayTokenReconciler {
    /// Repeated letters in `priority` count once.
    pub fn new(priority: Vec<String>) -> Self {
        let priority = priority
            .into_iter()
            .collect::<IndexSet<String>>()
            .into_iter()
            .collect();
        DayTokenReconciler { priority }
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    /// Returns `(representative time, day token)`, or `None` when there are
    /// no sessions.
    ///
    /// A repeated day letter keeps its first position but takes the time of
    /// its last row. Letters outside the priority list only reach the token
    /// when none of the priority letters are present.
    pub fn reconcile(&self, sessions: &[ClassSession]) -> Option<(String, String)> {
        let mut days: IndexMap<&str, &str> = IndexMap::new();
        for session in sessions {
            if let Some(previous) = days.insert(session.day.as_str(), session.time.as_str()) {
                log::debug!(
                    "{}: day {} listed twice ({} then {}), keeping {}",
                    session.class_name, session.day, previous, session.time, session.time
                );
            }
        }

        let (_, time) = days.first()?;

        let mut token: String = self
            .priority
            .iter()
            .filter(|d| days.contains_key(d.as_str()))
            .map(String::as_str)
            .collect();
        if token.is_empty() {
            token = days.keys().copied().collect();
        }

        Some((time.to_string(), token))
    }
}
