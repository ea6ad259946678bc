//! Matcher for records.
//!
//! A struct matcher is usually derived from an expected record: every
//! accessible field becomes an equality constraint, and private fields are
//! skipped. Individual constraints can then be replaced with [`StructMatcher::field`].

use std::fmt;

use shape_value::{Inspect, Value, Visibility};

use crate::constraints::Constraints;
use crate::errors::MatchError;
use crate::leaf::eq;
use crate::Matcher;

/// Matches records by a declared subset of required `field -> matcher` pairs.
///
/// Every declared field must be an accessible field of the candidate and
/// satisfy its matcher; undeclared fields are ignored. A matcher with no
/// constraints only accepts a record without fields. The candidate's type
/// name is not compared.
pub struct StructMatcher {
    type_name: String,
    fields: Constraints<String>,
}

/// Build a struct matcher from an expected record.
///
/// Fails with [`MatchError::NotRecordType`] when `expected` does not inspect
/// as a struct.
pub fn try_struct<T: Inspect + ?Sized>(expected: &T) -> Result<StructMatcher, MatchError> {
    StructMatcher::from_value(&expected.to_value())
}

/// Build a struct matcher from an expected record, panicking if it is not one.
///
/// Intended for test setup, where a non-record expectation is a bug in the
/// test itself.
///
/// # Panics
///
/// Panics when `expected` does not inspect as a struct.
pub fn must_struct<T: Inspect + ?Sized>(expected: &T) -> StructMatcher {
    match try_struct(expected) {
        Ok(matcher) => matcher,
        Err(err) => panic!("must_struct: {err}"),
    }
}

impl StructMatcher {
    /// Derive equality constraints from every accessible field of `expected`.
    pub fn from_value(expected: &Value) -> Result<Self, MatchError> {
        let Some(record) = expected.as_struct() else {
            return Err(MatchError::NotRecordType {
                found: expected.type_name(),
            });
        };

        let mut fields = Constraints::new();
        for (name, value) in record.public_fields() {
            fields.set(name.to_owned(), Box::new(eq(value)));
        }

        tracing::debug!(
            type_name = record.type_name(),
            derived = fields.len(),
            skipped = record.len().saturating_sub(fields.len()),
            "derived struct matcher"
        );

        Ok(StructMatcher {
            type_name: record.type_name().to_owned(),
            fields,
        })
    }

    /// Require field `name` to satisfy `matcher`.
    ///
    /// Replaces the constraint already registered for `name`, keeping its
    /// position in the description.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, matcher: impl Matcher + 'static) -> Self {
        self.fields.set(name.into(), Box::new(matcher));
        self
    }

    /// Type name of the record this matcher was derived from.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Number of constrained fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are constrained.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Matcher for StructMatcher {
    fn matches(&self, value: &Value) -> bool {
        let Some(record) = value.as_struct() else {
            tracing::trace!(
                kind = value.type_name(),
                "struct matcher: candidate is not a struct"
            );
            return false;
        };

        if self.fields.is_empty() && !record.is_empty() {
            tracing::trace!(
                fields = record.len(),
                "struct matcher: no constraints, candidate must have no fields"
            );
            return false;
        }

        for (name, matcher) in self.fields.iter() {
            let Some(found) = record.get_field(name) else {
                tracing::trace!(
                    field = %name,
                    private = record.visibility_of(name) == Some(Visibility::Private),
                    "struct matcher: field missing or inaccessible"
                );
                return false;
            };
            if !matcher.matches(found) {
                tracing::trace!(field = %name, value = %found, "struct matcher: value rejected");
                return false;
            }
        }
        true
    }

    fn describe(&self) -> String {
        format!(
            "Struct:{}({})",
            self.type_name,
            self.fields.render("=", String::clone)
        )
    }
}

impl fmt::Display for StructMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for StructMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StructMatcher({})", self.describe())
    }
}
