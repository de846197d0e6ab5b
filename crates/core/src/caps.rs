//! # Built-in Registry Capabilities
//!
//! The two zero-hole capabilities the engine ships with: [`Show`] (a
//! textual representation) and [`Combine`] (one associative binary
//! operation, the dictionary form of [`crate::descriptor::Combine`]).
//! Collaborator crates register dictionaries for their types; nothing in
//! the target type changes.
//!
//! Markers stay namespaced (`caps::Show`, `caps::Combine`) so the `Combine`
//! *descriptor trait* keeps its name at the crate root.

use std::fmt;
use std::sync::Arc;

use crate::descriptor;
use crate::registry::Capability;

// ============================================================================
// Show
// ============================================================================

/// Capability marker: the shape has a textual representation.
pub struct Show;

impl Capability for Show {
    const NAME: &'static str = "Show";
    type Dict<T: 'static> = ShowInstance<T>;
}

/// Dictionary rendering a `T` as text.
pub struct ShowInstance<T> {
    render: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T: 'static> ShowInstance<T> {
    /// Build an instance from a render function.
    pub fn new(render: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self {
            render: Arc::new(render),
        }
    }

    /// Borrow an existing [`fmt::Display`] implementation.
    pub fn from_display() -> Self
    where
        T: fmt::Display,
    {
        Self::new(|value: &T| value.to_string())
    }

    /// Render a value.
    pub fn show(&self, value: &T) -> String {
        (self.render)(value)
    }
}

impl<T> Clone for ShowInstance<T> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> fmt::Debug for ShowInstance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowInstance").finish_non_exhaustive()
    }
}

// ============================================================================
// Combine
// ============================================================================

/// Capability marker: the shape carries one associative binary operation.
pub struct Combine;

impl Capability for Combine {
    const NAME: &'static str = "Combine";
    type Dict<T: 'static> = CombineInstance<T>;
}

/// Dictionary combining two `T`s into one.
pub struct CombineInstance<T> {
    op: Arc<dyn Fn(T, T) -> T + Send + Sync>,
}

impl<T: 'static> CombineInstance<T> {
    /// Build an instance from a binary operation.
    pub fn new(op: impl Fn(T, T) -> T + Send + Sync + 'static) -> Self {
        Self { op: Arc::new(op) }
    }

    /// Reify a [`descriptor::Combine`] impl as a dictionary.
    pub fn from_impl() -> Self
    where
        T: descriptor::Combine,
    {
        Self::new(|a: T, b: T| descriptor::Combine::combine(a, b))
    }

    /// Combine two values.
    pub fn combine(&self, a: T, b: T) -> T {
        (self.op)(a, b)
    }
}

impl<T> Clone for CombineInstance<T> {
    fn clone(&self) -> Self {
        Self {
            op: Arc::clone(&self.op),
        }
    }
}

impl<T> fmt::Debug for CombineInstance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombineInstance").finish_non_exhaustive()
    }
}
