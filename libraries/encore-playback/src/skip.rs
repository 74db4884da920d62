//! Skipped-track set
//!
//! Library tracks the user removed from "up next". Suppressed from natural
//! traversal only; the library itself is never modified.

use encore_core::TrackId;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct SkippedSet {
    ids: HashSet<TrackId>,
}

impl SkippedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress a track. Returns false if it was already suppressed.
    pub fn insert(&mut self, id: TrackId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: &TrackId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Keep only the ids for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&TrackId) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut skipped = SkippedSet::new();
        assert!(skipped.insert(TrackId::new("a")));
        assert!(!skipped.insert(TrackId::new("a")));
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn retain_prunes_missing_ids() {
        let mut skipped = SkippedSet::new();
        skipped.insert(TrackId::new("a"));
        skipped.insert(TrackId::new("b"));

        skipped.retain(|id| id.as_str() == "b");

        assert!(!skipped.contains(&TrackId::new("a")));
        assert!(skipped.contains(&TrackId::new("b")));
    }
}
