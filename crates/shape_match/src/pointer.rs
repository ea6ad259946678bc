//! Matcher that looks through one level of indirection.

use std::fmt;

use shape_value::Value;

use crate::Matcher;

/// Dereferences a pointer candidate and delegates to an inner matcher.
///
/// Nil pointers and non-pointer values never match.
pub struct PointerMatcher {
    inner: Box<dyn Matcher>,
}

/// Wrap `inner` so it is applied to the target of a pointer.
pub fn pointer(inner: impl Matcher + 'static) -> PointerMatcher {
    PointerMatcher {
        inner: Box::new(inner),
    }
}

impl PointerMatcher {
    /// The matcher applied to the dereferenced value.
    pub fn inner(&self) -> &dyn Matcher {
        &*self.inner
    }
}

impl Matcher for PointerMatcher {
    fn matches(&self, value: &Value) -> bool {
        match value.deref_pointer() {
            Some(target) => self.inner.matches(target),
            None => {
                tracing::trace!(
                    kind = value.type_name(),
                    nil = value.is_nil(),
                    "pointer matcher: no target to dereference"
                );
                false
            }
        }
    }

    fn describe(&self) -> String {
        format!("Pointer({})", self.inner.describe())
    }
}

impl fmt::Display for PointerMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for PointerMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointerMatcher({})", self.describe())
    }
}
