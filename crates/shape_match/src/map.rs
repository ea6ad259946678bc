//! Matcher for associative containers.

use std::fmt;

use shape_value::{Inspect, Value};

use crate::constraints::Constraints;
use crate::Matcher;

/// Matches maps by a declared subset of required `key -> matcher` pairs.
///
/// Every declared key must be present in the candidate and its value must
/// satisfy the key's matcher; undeclared keys are ignored. A matcher with no
/// constraints only accepts an empty map.
pub struct MapMatcher {
    constraints: Constraints<Value>,
}

/// Create a map matcher with no constraints.
///
/// # Example
///
/// ```
/// use shape_match::{eq, map, MatcherExt};
/// use std::collections::HashMap;
///
/// let nested = map().add("parent", map().add("child", eq(1)));
/// let inner = HashMap::from([("child", 1)]);
/// let outer = HashMap::from([("parent", inner)]);
/// assert!(nested.matches_inspect(&outer));
/// ```
pub fn map() -> MapMatcher {
    MapMatcher::new()
}

impl MapMatcher {
    /// Create a map matcher with no constraints.
    pub fn new() -> Self {
        MapMatcher {
            constraints: Constraints::new(),
        }
    }

    /// Create a map matcher seeded with `(key, matcher)` pairs.
    ///
    /// An empty iterator gives the same matcher as [`MapMatcher::new`].
    pub fn from_constraints<K, I>(constraints: I) -> Self
    where
        K: Inspect,
        I: IntoIterator<Item = (K, Box<dyn Matcher>)>,
    {
        let mut m = MapMatcher::new();
        for (key, matcher) in constraints {
            m.constraints.set(key.to_value(), matcher);
        }
        m
    }

    /// Require `key` to be present with a value accepted by `matcher`.
    ///
    /// Replaces any constraint already registered for `key`.
    #[must_use]
    pub fn add(mut self, key: impl Inspect, matcher: impl Matcher + 'static) -> Self {
        self.constraints.set(key.to_value(), Box::new(matcher));
        self
    }

    /// Number of declared keys.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Check if no keys are declared.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl Default for MapMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for MapMatcher {
    fn matches(&self, value: &Value) -> bool {
        let Some(candidate) = value.as_map() else {
            tracing::trace!(kind = value.type_name(), "map matcher: candidate is not a map");
            return false;
        };

        if self.constraints.is_empty() && !candidate.is_empty() {
            tracing::trace!(
                len = candidate.len(),
                "map matcher: no constraints, candidate must be empty"
            );
            return false;
        }

        for (key, matcher) in self.constraints.iter() {
            let Some(found) = candidate.get(key) else {
                tracing::trace!(%key, "map matcher: required key missing");
                return false;
            };
            if !matcher.matches(found) {
                tracing::trace!(%key, value = %found, "map matcher: value rejected");
                return false;
            }
        }
        true
    }

    fn describe(&self) -> String {
        format!(
            "Map{{{}}}",
            self.constraints.render(": ", ToString::to_string)
        )
    }
}

impl fmt::Display for MapMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for MapMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MapMatcher({})", self.describe())
    }
}
