//! Per-section reveal flags
//!
//! A section starts hidden and may be revealed exactly once. There is no
//! operation that hides a section again.

use std::collections::BTreeSet;

/// Monotonic map from section id to "has become visible"
///
/// Absent ids read as hidden. Stored as an ordered set of revealed ids so
/// iteration order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    revealed: BTreeSet<String>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the section has been revealed
    pub fn is_visible(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Mark a section visible.
    ///
    /// Returns true only on the hidden -> visible transition; re-marking a
    /// revealed section is a no-op and returns false.
    pub fn mark_visible(&mut self, id: &str) -> bool {
        if self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    /// Reveal every id in `ids`, returning the ones that were newly revealed
    pub fn reveal_all<'a, I>(&mut self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .filter(|id| self.mark_visible(id))
            .map(str::to_string)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.revealed.len()
    }

    /// Revealed ids in sorted order
    pub fn iter_visible(&self) -> impl Iterator<Item = &str> {
        self.revealed.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_hidden() {
        let map = VisibilityMap::new();
        assert!(!map.is_visible("hero-text"));
        assert_eq!(map.visible_count(), 0);
    }

    #[test]
    fn test_mark_visible_once() {
        let mut map = VisibilityMap::new();
        assert!(map.mark_visible("about"));
        assert!(!map.mark_visible("about"));
        assert!(map.is_visible("about"));
        assert_eq!(map.visible_count(), 1);
    }

    #[test]
    fn test_reveal_all_reports_new_only() {
        let mut map = VisibilityMap::new();
        map.mark_visible("gallery-2");
        let newly = map.reveal_all(["gallery-1", "gallery-2", "gallery-3"]);
        assert_eq!(newly, vec!["gallery-1".to_string(), "gallery-3".to_string()]);
        assert_eq!(
            map.iter_visible().collect::<Vec<_>>(),
            vec!["gallery-1", "gallery-2", "gallery-3"]
        );
    }

    proptest! {
        #[test]
        fn prop_flags_never_reset(ids in proptest::collection::vec("[a-d]", 0..40)) {
            let mut map = VisibilityMap::new();
            let mut seen: Vec<String> = Vec::new();
            for id in &ids {
                let changed = map.mark_visible(id);
                prop_assert_eq!(changed, !seen.contains(id));
                if changed {
                    seen.push(id.clone());
                }
                for earlier in &seen {
                    prop_assert!(map.is_visible(earlier));
                }
            }
            prop_assert_eq!(map.visible_count(), seen.len());
        }
    }
}
