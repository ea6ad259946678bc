//! Keyed constraint sets shared by the map and struct matchers.

use crate::Matcher;

/// Ordered set of `key -> matcher` constraints with unique keys.
///
/// Order only affects descriptions; matching treats the set as unordered.
pub(crate) struct Constraints<K> {
    entries: Vec<(K, Box<dyn Matcher>)>,
}

impl<K: PartialEq> Constraints<K> {
    pub(crate) fn new() -> Self {
        Constraints {
            entries: Vec::new(),
        }
    }

    /// Register the matcher for `key`, replacing an existing one in place.
    pub(crate) fn set(&mut self, key: K, matcher: Box<dyn Matcher>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = matcher,
            None => self.entries.push((key, matcher)),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &dyn Matcher)> + '_ {
        self.entries.iter().map(|(k, m)| (k, &**m))
    }

    /// Render as `key<sep>description` pairs joined by `", "`.
    pub(crate) fn render(&self, sep: &str, key: impl Fn(&K) -> String) -> String {
        self.iter()
            .map(|(k, m)| format!("{}{sep}{}", key(k), m.describe()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
