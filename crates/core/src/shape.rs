//! # Shapes - Type Constructors with Holes
//!
//! A *shape* is a type constructor with some number of open positions
//! ("holes"). A zero-hole shape is just a concrete type (`String`,
//! `Option<i32>`); a one-hole shape needs one type argument to become
//! concrete (`Option<_>`, `Vec<_>`). Capabilities attach to shapes, so the
//! engine needs two things from this module:
//!
//! - [`ShapeId`]: a runtime identity for zero-hole shapes, used as a
//!   registry key and in error messages.
//! - [`Shape1`]: a compile-time encoding of one-hole shapes. Rust has no
//!   direct way to abstract over `Option` versus `Vec` as constructors, so
//!   each constructor gets a *brand type* implementing `Shape1`, and the
//!   `Plug` associated type fills the hole.
//!
//! ## Design Choices
//!
//! Content types are constrained to [`Value`] (`Clone + 'static`). Derived
//! operations pair, duplicate, and re-wrap hole contents, and the function
//! shape stores contents inside shared closures; `Clone + 'static` is the
//! weakest bound that lets every built-in shape participate. `Plug`
//! preserves the bound, which is what lets composed shapes nest to any
//! depth.
//!
//! Constructors with more than one hole do not implement `Shape1` directly:
//! they fix all holes but one as type parameters of the brand (a function
//! shape fixes its argument type, for example), which is ordinary partial
//! application at the type level.

use std::any;
use std::fmt;

/// Marker bound for types that may occupy a hole.
///
/// Blanket-implemented; never implement it by hand.
pub trait Value: Clone + 'static {}

impl<T: Clone + 'static> Value for T {}

/// Runtime identity of a zero-hole shape (a concrete type).
///
/// Wraps [`std::any::TypeId`] together with the type's name so errors can
/// say *which* shape was missing, not just that one was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId {
    id: any::TypeId,
    name: &'static str,
}

impl ShapeId {
    /// Identity of the concrete type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: any::TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// The underlying [`std::any::TypeId`].
    pub fn type_id(&self) -> any::TypeId {
        self.id
    }

    /// The type's name, as reported by the compiler.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A one-hole type constructor, defunctionalized as a brand type.
///
/// The brand itself carries no data; `Plug<A>` is the concrete type obtained
/// by filling the hole with `A`.
///
/// # Example
///
/// ```
/// use kindred_core::{Shape1, Value};
///
/// struct BoxShape;
///
/// impl Shape1 for BoxShape {
///     type Plug<A: Value> = Box<A>;
/// }
///
/// let b: <BoxShape as Shape1>::Plug<i32> = Box::new(7);
/// assert_eq!(*b, 7);
/// ```
pub trait Shape1: 'static {
    /// The concrete type produced by plugging `A` into the hole.
    type Plug<A: Value>: Value;
}
