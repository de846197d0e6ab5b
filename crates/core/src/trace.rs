//! # Resolution Traces
//!
//! A dependent resolution can fail several holes deep: show-a-sequence
//! needed show-an-optional which needed show-the-content, and only the
//! innermost was missing. The error chain carries that information through
//! `source()`, but a chain of single-line messages is awkward to read in a
//! startup log. [`ResolutionTrace`] renders the chain as an indented tree,
//! one node per (capability, shape) step, so the missing hole is visible at
//! a glance.

use std::fmt;

use crate::error::CoreError;

/// A node in a resolution tree: one (capability, shape) step and the steps
/// it depended on.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionTrace {
    /// Human-readable label for this step.
    pub label: String,
    /// Steps this one depended on.
    pub children: Vec<ResolutionTrace>,
}

impl ResolutionTrace {
    /// Create a leaf node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Attach a dependency step.
    pub fn with_child(mut self, child: ResolutionTrace) -> Self {
        self.children.push(child);
        self
    }

    /// Build a trace from a resolution failure, one node per link of the
    /// cause chain. Returns `None` for errors that are not resolution
    /// failures (duplicates and law violations have no chain to render).
    pub fn from_error(err: &CoreError) -> Option<Self> {
        match err {
            CoreError::ResolutionFailure {
                capability,
                shape,
                cause,
            } => {
                let mut node = Self::new(format!("missing {} for {}", capability, shape));
                if let Some(inner) = cause {
                    if let Some(child) = Self::from_error(inner) {
                        node.children.push(child);
                    }
                }
                Some(node)
            }
            _ => None,
        }
    }

    /// Render the tree with two-space indentation per dependency level.
    pub fn display(&self) -> String {
        self.display_indent(0)
    }

    fn display_indent(&self, indent: usize) -> String {
        use std::fmt::Write;
        let mut out = String::new();
        let prefix = "  ".repeat(indent);
        writeln!(out, "{}{}", prefix, self.label).unwrap();
        for child in &self.children {
            out.push_str(&child.display_indent(indent + 1));
        }
        out
    }

    /// Depth of the tree; the number of holes the resolution descended into.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ResolutionTrace::depth)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for ResolutionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeId;

    fn missing(capability: &'static str, shape: ShapeId, cause: Option<CoreError>) -> CoreError {
        CoreError::ResolutionFailure {
            capability,
            shape,
            cause: cause.map(Box::new),
        }
    }

    #[test]
    fn test_trace_from_flat_failure() {
        let err = missing("Show", ShapeId::of::<i32>(), None);
        let trace = ResolutionTrace::from_error(&err).unwrap();

        assert_eq!(trace.depth(), 1);
        assert!(trace.label.contains("Show"));
        assert!(trace.label.contains("i32"));
    }

    #[test]
    fn test_trace_renders_the_dependency_chain() {
        let inner = missing("Show", ShapeId::of::<i32>(), None);
        let outer = missing("Show", ShapeId::of::<Option<i32>>(), Some(inner));

        let trace = ResolutionTrace::from_error(&outer).unwrap();
        assert_eq!(trace.depth(), 2);

        let rendered = trace.display();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Option"));
        // inner step is indented under the outer one
        assert!(lines[1].starts_with("  "));
        assert!(lines[1].contains("i32"));
    }

    #[test]
    fn test_non_resolution_errors_have_no_trace() {
        let err = CoreError::DuplicateRegistration {
            capability: "Show",
            shape: ShapeId::of::<i32>(),
        };
        assert!(ResolutionTrace::from_error(&err).is_none());
    }

    #[test]
    fn test_display_impl_matches_display_method() {
        let trace = ResolutionTrace::new("missing Show for i32")
            .with_child(ResolutionTrace::new("missing Show for u8"));
        assert_eq!(format!("{}", trace), trace.display());
    }
}
