//! Error types for trueno-color operations.
//!
//! Color conversions and value arithmetic are total and never fail. Errors
//! only arise when building a value from a caller-supplied slice.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-color operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A slice had the wrong number of components for the target type.
    #[error("{kind} expects {expected} components, got {found}")]
    ComponentCount {
        /// Name of the type being constructed.
        kind: &'static str,
        /// Accepted component count(s), e.g. `"3 or 4"`.
        expected: &'static str,
        /// Length of the slice that was supplied.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ComponentCount {
            kind: "Color",
            expected: "3 or 4",
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Color"));
        assert!(msg.contains("3 or 4"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_error_equality() {
        let a = Error::ComponentCount { kind: "Rect", expected: "4", found: 1 };
        let b = Error::ComponentCount { kind: "Rect", expected: "4", found: 1 };
        assert_eq!(a, b);
    }
}
