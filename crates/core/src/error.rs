//! # Error Types
//!
//! Every failure the engine can report is a configuration problem: an
//! instance that was never registered, registered twice, or registered with
//! an operation that breaks its capability's laws. None of them are
//! recovered silently and none fall back to a default instance; each carries
//! the capability name and shape identity needed to diagnose it without
//! inspecting engine internals.

use thiserror::Error;

use crate::shape::ShapeId;

/// Errors reported by the resolution and composition engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// No instance exists for this (capability, shape) pair.
    ///
    /// When the failure happened while assembling a dependent instance, the
    /// inner hole's failure is attached as `cause` and reachable through
    /// `source()`.
    #[error("no {capability} instance for shape {shape}")]
    ResolutionFailure {
        capability: &'static str,
        shape: ShapeId,
        #[source]
        cause: Option<Box<CoreError>>,
    },

    /// A second registration for an already-populated (capability, shape)
    /// pair. A setup-time configuration error; the original entry is left
    /// untouched.
    #[error("duplicate {capability} instance for shape {shape}")]
    DuplicateRegistration {
        capability: &'static str,
        shape: ShapeId,
    },

    /// A registered instance failed one of its capability's laws under a
    /// property check. Only the law suite produces this; registration cannot
    /// detect it.
    #[error("{capability} instance violates the {law} law: {details}")]
    LawViolation {
        capability: &'static str,
        law: &'static str,
        details: String,
    },
}

impl CoreError {
    /// The innermost failure of a resolution chain.
    ///
    /// For a dependent resolution this is the hole whose instance was
    /// actually missing; for everything else it is `self`.
    pub fn root_cause(&self) -> &CoreError {
        match self {
            CoreError::ResolutionFailure {
                cause: Some(inner), ..
            } => inner.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_resolution_failure_display() {
        let err = CoreError::ResolutionFailure {
            capability: "Show",
            shape: ShapeId::of::<i32>(),
            cause: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("Show"));
        assert!(msg.contains("i32"));
    }

    #[test]
    fn test_cause_is_reachable_through_source() {
        let inner = CoreError::ResolutionFailure {
            capability: "Show",
            shape: ShapeId::of::<i32>(),
            cause: None,
        };
        let outer = CoreError::ResolutionFailure {
            capability: "Show",
            shape: ShapeId::of::<Option<i32>>(),
            cause: Some(Box::new(inner.clone())),
        };

        let source = outer.source().expect("outer failure has a cause");
        assert_eq!(source.to_string(), inner.to_string());
    }

    #[test]
    fn test_root_cause_walks_the_chain() {
        let leaf = CoreError::ResolutionFailure {
            capability: "Show",
            shape: ShapeId::of::<i32>(),
            cause: None,
        };
        let mid = CoreError::ResolutionFailure {
            capability: "Show",
            shape: ShapeId::of::<Option<i32>>(),
            cause: Some(Box::new(leaf.clone())),
        };
        let top = CoreError::ResolutionFailure {
            capability: "Show",
            shape: ShapeId::of::<Vec<Option<i32>>>(),
            cause: Some(Box::new(mid)),
        };

        assert_eq!(top.root_cause(), &leaf);
    }
}
