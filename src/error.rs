//! Errors raised when decoding curve data.
//!
//! Evaluation never fails. These only come up at the boundary where raw key
//! arrays or type codes are turned into curves.

use std::fmt;

/// Error type for building curves from raw data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The integer type code does not name an interpolation scheme.
    UnknownCurveType(u32),
    /// The type name does not name an interpolation scheme.
    UnknownCurveName(String),
    /// A flat key array had an odd number of elements.
    UnpairedKeyData { len: usize },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::UnknownCurveType(code) => write!(f, "unknown curve type code: {}", code),
            CurveError::UnknownCurveName(s) => write!(f, "unknown curve type name: '{}'", s),
            CurveError::UnpairedKeyData { len } => {
                write!(f, "key data has {} elements, expected (time, value) pairs", len)
            }
        }
    }
}

impl std::error::Error for CurveError {}
