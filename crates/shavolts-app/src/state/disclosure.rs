//! Disclosure groups
//!
//! Two flavours: [`Accordion`] keeps at most one panel open, [`ExpandedSet`]
//! lets every panel toggle independently.

use std::collections::BTreeSet;

/// Single-select disclosure group. Initially nothing is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion<K> {
    open: Option<K>,
}

impl<K> Default for Accordion<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: Copy + Eq> Accordion<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `key`, closing whatever was open; toggling the open panel closes it
    pub fn toggle(&mut self, key: K) {
        self.open = if self.open == Some(key) {
            None
        } else {
            Some(key)
        };
    }

    pub fn is_open(&self, key: K) -> bool {
        self.open == Some(key)
    }

    pub fn open(&self) -> Option<K> {
        self.open
    }
}

/// Multi-select disclosure group. Initially everything is collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedSet<K: Ord> {
    expanded: BTreeSet<K>,
}

impl<K: Ord> Default for ExpandedSet<K> {
    fn default() -> Self {
        Self {
            expanded: BTreeSet::new(),
        }
    }
}

impl<K: Copy + Ord> ExpandedSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `key` only
    pub fn toggle(&mut self, key: K) {
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    pub fn is_expanded(&self, key: K) -> bool {
        self.expanded.contains(&key)
    }

    /// Number of expanded keys
    pub fn count(&self) -> usize {
        self.expanded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_starts_closed() {
        let acc: Accordion<&str> = Accordion::new();
        assert_eq!(acc.open(), None);
        assert!(!acc.is_open("specs"));
    }

    #[test]
    fn test_accordion_opening_b_closes_a() {
        let mut acc = Accordion::new();
        acc.toggle("sustainability");
        acc.toggle("shacare");
        assert!(acc.is_open("shacare"));
        assert!(!acc.is_open("sustainability"));
    }

    #[test]
    fn test_accordion_retoggle_closes() {
        let mut acc = Accordion::new();
        acc.toggle(2u8);
        acc.toggle(2u8);
        assert_eq!(acc.open(), None);
    }

    #[test]
    fn test_expanded_set_toggles_independently() {
        let mut set = ExpandedSet::new();
        set.toggle('a');
        set.toggle('b');
        assert!(set.is_expanded('a') && set.is_expanded('b'));

        set.toggle('a');
        assert!(!set.is_expanded('a'));
        assert!(set.is_expanded('b'));
        assert_eq!(set.count(), 1);
    }
}
