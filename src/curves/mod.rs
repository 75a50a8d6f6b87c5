//! Keyframed curves and their evaluation.
//!
//! A [`Curve`] maps time to a scalar through a list of time-sorted [`Key`]s and
//! a [`CurveType`] that decides how values are interpolated between keys. A
//! [`CurveSet`] evaluates several curves at once for multi-channel data.
//!
//! Evaluation caches the key interval that contains the last queried time, so
//! sampling at steadily increasing times only scans the keys when the time
//! crosses into the next interval.

mod curve;
mod curve_set;
mod evaluator;
mod interval;
mod key;
mod kind;

pub use curve::{Curve, DEFAULT_TENSION};
pub use curve_set::CurveSet;
pub use evaluator::CurveEvaluator;
pub use key::Key;
pub use kind::CurveType;
