//! Error types for exact geometric operations.

use thiserror::Error;

/// Errors that can occur while constructing or combining exact regions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExactError {
    /// Textual input did not match the expected encoding.
    #[error("malformed geometry data: {text}")]
    Parse {
        /// The offending text.
        text: String,
    },

    /// A vertex insertion would make the polygon reflex or self-crossing.
    #[error("non-convex point {point} for polygon {polygon}")]
    NonConvex {
        /// The rejected vertex.
        point: String,
        /// The polygon the vertex was being added to.
        polygon: String,
    },

    /// A single-rectangle operation was invoked on a composite box set.
    #[error("cannot {operation} a composed box set")]
    Composed {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// An ordering was requested against the 0/0 (NaN) rational.
    #[error("0/0 comparison is indeterminate")]
    IndeterminateComparison,

    /// Homogeneous weights did not combine into a point or a vector.
    #[error("invalid homogeneous weight in {operation}")]
    Weight {
        /// The operation whose weights were out of range.
        operation: &'static str,
    },

    /// A set-operation loop observed an impossible intermediate state.
    #[error("degenerate region state: {detail}")]
    DegenerateRegion {
        /// What went wrong.
        detail: String,
    },

    /// The operation is deliberately unimplemented for this shape.
    #[error("{what} is not implemented")]
    NotImplemented {
        /// The missing operation.
        what: &'static str,
    },
}
