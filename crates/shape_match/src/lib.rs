//! Shape Match - composable matchers for test assertions.
//!
//! This crate provides:
//! - The `Matcher` capability (`matches` + `describe`)
//! - Map, struct and pointer matchers that decide whether a value has an
//!   expected shape without requiring full equality
//! - Equality and wildcard leaf matchers
//! - Construction errors (`MatchError`)
//!
//! # Matching Model
//!
//! Map and struct matchers use subset semantics: every declared constraint
//! must hold, and entries the matcher does not mention are ignored. A
//! matcher with no constraints is the exception and only accepts an empty
//! container or a record with no fields.
//!
//! Matching is total. A value of the wrong shape is a non-match, never an
//! error; only building a struct matcher from a non-record can fail.
//!
//! ```
//! use shape_match::{eq, map, Matcher, MatcherExt};
//! use std::collections::HashMap;
//!
//! let m = map().add("a", eq(1));
//! let candidate = HashMap::from([("a", 1), ("b", 2)]);
//! assert!(m.matches_inspect(&candidate));
//! assert_eq!(m.describe(), "Map{\"a\": is equal to 1 (int)}");
//! ```
//!
//! # Concurrency
//!
//! Builder methods consume and return the matcher, so a matcher behind a
//! shared reference is read-only. Every matcher is `Send + Sync`.

mod constraints;
mod errors;
mod leaf;
mod map;
mod pointer;
mod structs;

#[cfg(test)]
mod test_helpers;

use std::sync::Arc;

pub use errors::MatchError;
pub use leaf::{any, eq, AnyMatcher, EqMatcher};
pub use map::{map, MapMatcher};
pub use pointer::{pointer, PointerMatcher};
pub use structs::{must_struct, try_struct, StructMatcher};

pub use shape_value::{inspect_struct, Inspect, MapValue, StructValue, Value, Visibility};

/// A predicate over runtime values that can describe what it expects.
///
/// Implementations must be total: `matches` returns `false` for any value it
/// cannot handle, and `describe` never fails.
pub trait Matcher: Send + Sync {
    /// Returns `true` if `value` has the expected shape.
    fn matches(&self, value: &Value) -> bool;

    /// Human-readable rendering of the expected shape, for failure messages.
    fn describe(&self) -> String;
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn matches(&self, value: &Value) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn matches(&self, value: &Value) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Conveniences available on every matcher.
pub trait MatcherExt: Matcher {
    /// Inspect a plain Rust value and match the result.
    fn matches_inspect<T: Inspect + ?Sized>(&self, value: &T) -> bool {
        self.matches(&value.to_value())
    }

    /// Erase the matcher's type.
    fn boxed(self) -> Box<dyn Matcher>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<M: Matcher + ?Sized> MatcherExt for M {}
