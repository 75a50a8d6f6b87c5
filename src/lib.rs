//! Keycurve - Keyframed animation curves for Rust
//!
//! This library evaluates authored 1-D curves: time-sorted `(time, value)` keys
//! joined by step, linear, smoothstep or cubic spline interpolation. Curves can
//! be sampled one time at a time or quantized into lookup tables, and grouped
//! into sets to drive multi-channel values such as colors.

pub mod curves;
mod error;
#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used types at the crate root
pub use curves::{Curve, CurveEvaluator, CurveSet, CurveType, DEFAULT_TENSION, Key};
pub use error::CurveError;

#[cfg(feature = "macros")]
pub use keycurve_macros::curve;
