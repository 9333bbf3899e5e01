use std::collections::HashSet;

use dashmap::DashMap;
use uuid::Uuid;

/// Remembers which entries each viewer session has already opened, so a
/// repeat view within the session does not inflate the view counter.
#[derive(Default)]
pub struct ViewTracker {
    seen: DashMap<String, HashSet<Uuid>>,
}

impl ViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view; true only the first time this session sees the entry.
    pub fn first_view(&self, session: &str, entry_id: Uuid) -> bool {
        self.seen
            .entry(session.to_string())
            .or_default()
            .insert(entry_id)
    }

    /// Drop all state for a session (e.g. on logout/expiry).
    pub fn forget_session(&self, session: &str) {
        self.seen.remove(session);
    }
}
