//! Shared callback handles compared by identity.

use std::fmt;
use std::sync::Arc;

/// A cheaply clonable callback taking its argument by value.
///
/// Equality is pointer identity: clones of one `Callback` are equal, while
/// two callbacks built from the same closure body are not. Build a callback
/// once and hand out clones if re-renders should be skipped when nothing
/// else changed.
pub struct Callback<A> {
    inner: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A> Callback<A> {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Invoke the callback.
    pub fn call(&self, arg: A) {
        (self.inner)(arg)
    }

    /// Whether both handles point at the same closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> PartialEq for Callback<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<A> Eq for Callback<A> {}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Arc::as_ptr(&self.inner))
    }
}
