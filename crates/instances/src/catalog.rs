//! # The Stock Catalog
//!
//! Registers the zero-hole dictionaries for the usual scalar types.
//! Call once during setup, before the registry is shared; any duplicate
//! already present surfaces as the configuration error it is.

use kindred_core::caps::{self, CombineInstance, Show, ShowInstance};
use kindred_core::{CoreError, InstanceRegistry};

/// Populate a registry with the stock instances.
///
/// `Show` for `i32`, `i64`, `u64`, `bool`, `String`; `Combine` for the
/// numeric types (addition) and `String` (concatenation).
pub fn register_defaults(registry: &mut InstanceRegistry) -> Result<(), CoreError> {
    registry.register::<Show, i32>(ShowInstance::from_display())?;
    registry.register::<Show, i64>(ShowInstance::from_display())?;
    registry.register::<Show, u64>(ShowInstance::from_display())?;
    registry.register::<Show, bool>(ShowInstance::from_display())?;
    registry.register::<Show, String>(ShowInstance::from_display())?;

    registry.register::<caps::Combine, i32>(CombineInstance::from_impl())?;
    registry.register::<caps::Combine, i64>(CombineInstance::from_impl())?;
    registry.register::<caps::Combine, u64>(CombineInstance::from_impl())?;
    registry.register::<caps::Combine, String>(CombineInstance::from_impl())?;

    Ok(())
}
