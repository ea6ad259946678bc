//! Shared heap storage for runtime values.
//!
//! `Heap<T>` wraps an `Arc<T>` whose constructor is private to the value
//! module, so every heap-backed `Value` is created through a `Value::`
//! factory method.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted, immutable storage for value payloads.
#[derive(PartialEq, Eq, Hash)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Wrap a payload. Only the value module constructs heap storage.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (*self.0).fmt(f)
    }
}
