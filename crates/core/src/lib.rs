//! # Kindred Core - Capability Resolution and Composition
//!
//! This crate matches concrete types to capability implementations and
//! assembles new implementations mechanically:
//!
//! - **Shapes**: Type constructors with holes, and their identities
//! - **Descriptors**: Minimal operation sets (Combine, CombineK, Transform,
//!   Apply)
//! - **Registry**: The external (capability, shape) instance table with
//!   dependent resolution
//! - **Compose**: Instances for nested shapes, derived from the parts
//! - **Derive**: Secondary operations generated from the minimal sets
//! - **Laws**: Property checks every instance must pass
//!
//! ## Design Philosophy
//!
//! Capabilities are retrofitted onto existing types without modifying them:
//! an implementation lives in a trait impl on a shape brand, or in a
//! dictionary held by the registry, never in the target type. Resolution is
//! a static selection problem. One-hole capabilities resolve through the
//! trait solver at compile time; zero-hole dictionaries resolve through the
//! registry before any operation executes. Content values are never
//! inspected to pick an instance.

pub mod caps;
pub mod compose;
pub mod derive;
pub mod descriptor;
pub mod error;
pub mod laws;
pub mod registry;
pub mod shape;
pub mod trace;

// Re-export key types at crate root for convenience. The `caps` markers
// stay namespaced so the `Combine` descriptor trait keeps its name here.
pub use caps::{CombineInstance, ShowInstance};
pub use compose::Compose;
pub use derive::ApBuilder;
pub use descriptor::{lifted, Apply, Combine, CombineK, Lifted, Transform};
pub use error::CoreError;
pub use registry::{Capability, InstanceRegistry, LiftDict};
pub use shape::{Shape1, ShapeId, Value};
pub use trace::ResolutionTrace;
