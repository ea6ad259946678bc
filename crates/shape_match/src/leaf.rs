//! Leaf matchers: equality to a literal, and the wildcard.

use std::fmt;

use shape_value::{Inspect, Value};

use crate::Matcher;

/// Matches values structurally equal to an expected literal.
#[derive(Clone)]
pub struct EqMatcher {
    expected: Value,
}

/// Create a matcher that accepts values equal to `expected`.
///
/// Equality is variant-strict: `eq(1)` (signed) does not accept `1u32`.
pub fn eq(expected: impl Inspect) -> EqMatcher {
    EqMatcher {
        expected: expected.to_value(),
    }
}

impl EqMatcher {
    /// The literal this matcher compares against.
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Matcher for EqMatcher {
    fn matches(&self, value: &Value) -> bool {
        *value == self.expected
    }

    fn describe(&self) -> String {
        format!(
            "is equal to {} ({})",
            self.expected,
            self.expected.type_name()
        )
    }
}

impl fmt::Display for EqMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for EqMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EqMatcher").field(&self.expected).finish()
    }
}

/// Matches every value.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyMatcher;

/// Create a matcher that accepts anything.
pub fn any() -> AnyMatcher {
    AnyMatcher
}

impl Matcher for AnyMatcher {
    fn matches(&self, _value: &Value) -> bool {
        true
    }

    fn describe(&self) -> String {
        "is anything".to_owned()
    }
}

impl fmt::Display for AnyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("is anything")
    }
}
