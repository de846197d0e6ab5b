//! # Instance Registry
//!
//! The registry is the external capability table: it associates a
//! (capability, shape) pair with a concrete instance dictionary, without
//! ever touching the shape's type. Capabilities are identified by a marker
//! type implementing [`Capability`]; shapes are identified by the concrete
//! type itself. Nothing here inspects content values at run time; the table
//! is keyed by type identity and consulted before any operation executes.
//!
//! ## Lifecycle
//!
//! Populate once at startup with [`InstanceRegistry::register`], then treat
//! the registry as read-only. `register` takes `&mut self`, so the borrow
//! checker enforces that registration has finished before the registry is
//! shared; after that, any number of threads may call
//! [`InstanceRegistry::resolve`] concurrently. The populate-before-read
//! ordering across threads is a usage contract, not something the registry
//! enforces.
//!
//! ## Dependent resolution
//!
//! An instance for a plugged shape `S<A>` may need the instance for `A`:
//! showing an optional needs showing its content. [`LiftDict`] expresses
//! exactly that step, taking the inner dictionary as an explicit `Arc`
//! argument, and [`InstanceRegistry::resolve_nested`] drives it: primitive
//! entry for `S<A>` first, otherwise resolve `A` and lift. When the inner
//! resolution fails, the outer failure carries it as its cause, so the
//! caller can see which hole was actually missing. Chains deeper than one
//! hole are spelled out at the call site with
//! [`InstanceRegistry::resolve_with`].

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::CoreError;
use crate::shape::{Shape1, ShapeId, Value};

/// A capability resolvable through the registry.
///
/// The marker type names the capability and fixes, per concrete type `T`,
/// the dictionary type that implements it.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use kindred_core::{Capability, InstanceRegistry};
///
/// // A dictionary for hashing values of type T.
/// #[derive(Clone)]
/// struct HashInstance<T> {
///     hash: Arc<dyn Fn(&T) -> u64 + Send + Sync>,
/// }
///
/// struct Hashed;
///
/// impl Capability for Hashed {
///     const NAME: &'static str = "Hashed";
///     type Dict<T: 'static> = HashInstance<T>;
/// }
///
/// let mut registry = InstanceRegistry::new();
/// registry
///     .register::<Hashed, i32>(HashInstance {
///         hash: Arc::new(|v| *v as u64),
///     })
///     .unwrap();
///
/// let dict = registry.resolve::<Hashed, i32>().unwrap();
/// assert_eq!((dict.hash)(&7), 7);
/// ```
pub trait Capability: 'static {
    /// Capability name used in error messages.
    const NAME: &'static str;

    /// The dictionary type carried for a concrete type `T`.
    type Dict<T: 'static>: Send + Sync + 'static;
}

/// One-hole shapes whose `C` dictionary can be built from the hole's
/// dictionary.
///
/// The signature is the dependency edge: the outer instance cannot exist
/// without the inner one, and it holds the inner by `Arc` for its lifetime
/// rather than copying it.
pub trait LiftDict<C: Capability>: Shape1 {
    /// Build the dictionary for the plugged shape from the content's.
    fn lift_dict<A: Value>(inner: Arc<C::Dict<A>>) -> C::Dict<Self::Plug<A>>;
}

struct RegisteredInstance {
    dict: Arc<dyn Any + Send + Sync>,
    capability: &'static str,
    shape: ShapeId,
}

/// The capability table: primitive instance dictionaries keyed by
/// (capability, shape) type identity.
///
/// Registration of an already-populated pair is a hard error; there is no
/// silent overwrite and no best-effort fallback on lookup.
#[derive(Default)]
pub struct InstanceRegistry {
    entries: HashMap<(TypeId, TypeId), RegisteredInstance>,
}

impl InstanceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a primitive instance of capability `C` for the concrete
    /// type `T`.
    ///
    /// Fails with [`CoreError::DuplicateRegistration`] if the pair is
    /// already populated, leaving the original entry resolvable.
    pub fn register<C: Capability, T: 'static>(&mut self, dict: C::Dict<T>) -> Result<(), CoreError> {
        let key = (TypeId::of::<C>(), TypeId::of::<T>());
        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(CoreError::DuplicateRegistration {
                capability: C::NAME,
                shape: ShapeId::of::<T>(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(RegisteredInstance {
                    dict: Arc::new(dict),
                    capability: C::NAME,
                    shape: ShapeId::of::<T>(),
                });
                Ok(())
            }
        }
    }

    /// Resolve the instance of capability `C` for the concrete type `T`.
    ///
    /// Deterministic and total: returns the registered dictionary, or
    /// [`CoreError::ResolutionFailure`] exactly when the pair was never
    /// registered. Never invents a default instance.
    pub fn resolve<C: Capability, T: 'static>(&self) -> Result<Arc<C::Dict<T>>, CoreError> {
        let key = (TypeId::of::<C>(), TypeId::of::<T>());
        let entry = self
            .entries
            .get(&key)
            .ok_or(CoreError::ResolutionFailure {
                capability: C::NAME,
                shape: ShapeId::of::<T>(),
                cause: None,
            })?;

        entry
            .dict
            .clone()
            .downcast::<C::Dict<T>>()
            .map_err(|_| CoreError::ResolutionFailure {
                capability: C::NAME,
                shape: ShapeId::of::<T>(),
                cause: None,
            })
    }

    /// Resolve `C` for the plugged shape `S::Plug<A>`.
    ///
    /// A primitive entry for the plugged shape wins; otherwise the hole's
    /// instance is resolved and lifted through `S`. An inner failure is
    /// attached as the cause of the outer one.
    pub fn resolve_nested<C, S, A>(&self) -> Result<Arc<C::Dict<S::Plug<A>>>, CoreError>
    where
        C: Capability,
        S: LiftDict<C>,
        A: Value,
    {
        self.resolve_with::<C, S, A, _>(|registry| registry.resolve::<C, A>())
    }

    /// Like [`resolve_nested`](Self::resolve_nested), but with the hole's
    /// resolution supplied by the caller, so multi-hole chains compose at
    /// the call site:
    ///
    /// ```rust,ignore
    /// // Show for Vec<Option<i32>>: resolve the option level itself nested.
    /// registry.resolve_with::<Show, VecShape, Option<i32>, _>(|r| {
    ///     r.resolve_nested::<Show, OptionShape, i32>()
    /// })
    /// ```
    pub fn resolve_with<C, S, A, F>(
        &self,
        inner: F,
    ) -> Result<Arc<C::Dict<S::Plug<A>>>, CoreError>
    where
        C: Capability,
        S: LiftDict<C>,
        A: Value,
        F: FnOnce(&Self) -> Result<Arc<C::Dict<A>>, CoreError>,
    {
        if let Ok(primitive) = self.resolve::<C, S::Plug<A>>() {
            return Ok(primitive);
        }

        let content = inner(self).map_err(|cause| CoreError::ResolutionFailure {
            capability: C::NAME,
            shape: ShapeId::of::<S::Plug<A>>(),
            cause: Some(Box::new(cause)),
        })?;

        Ok(Arc::new(S::lift_dict(content)))
    }

    /// Whether an instance of `C` is registered for `T`.
    pub fn contains<C: Capability, T: 'static>(&self) -> bool {
        self.entries
            .contains_key(&(TypeId::of::<C>(), TypeId::of::<T>()))
    }

    /// The registered (capability, shape) pairs, for startup diagnostics.
    pub fn registered(&self) -> Vec<(&'static str, ShapeId)> {
        self.entries
            .values()
            .map(|entry| (entry.capability, entry.shape))
            .collect()
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no instances.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("instance_count", &self.entries.len())
            .finish()
    }
}
