//! # Kindred Instances - Built-ins for the Standard Containers
//!
//! The collaborator side of the engine: shape brands and capability
//! instances for the containers everyone reaches for first.
//!
//! - [`OptionShape`]: the optional value (absence propagates)
//! - [`VecShape`]: the sequence (application pairs every function with
//!   every argument)
//! - [`FuncShape`]: the function of one argument, with the argument hole
//!   fixed
//! - [`register_defaults`]: the stock zero-hole dictionaries for an
//!   [`kindred_core::InstanceRegistry`]
//!
//! The core engine never depends on any of this; it only requires that
//! containers exist and can be driven through the descriptor operations.

pub mod catalog;
pub mod func;
pub mod option;
pub mod vec;

// Re-export key types at crate root for convenience
pub use catalog::register_defaults;
pub use func::FuncShape;
pub use option::OptionShape;
pub use vec::VecShape;
