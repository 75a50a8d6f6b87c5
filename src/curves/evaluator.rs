//! Standalone cached evaluator over a borrowed curve.

use super::interval::Interval;
use super::Curve;

/// Evaluates a [`Curve`] while caching the key interval between calls.
///
/// The evaluator borrows the curve immutably, so the keys cannot change while
/// it is alive and the cache can never go stale. Any number of evaluators may
/// borrow the same curve at once, one per consumer or per thread, each with its
/// own cache.
///
/// Evaluating at steadily increasing times (sampling an animation frame by
/// frame, building a lookup table) only rescans the keys when a time leaves the
/// cached interval.
///
/// # Examples
///
/// ```
/// use keycurve::{Curve, CurveEvaluator, CurveType};
///
/// let curve = Curve::new(&[0.0, 0.0, 1.0, 10.0, 2.0, 0.0]).with_type(CurveType::Linear);
/// let mut eval = CurveEvaluator::new(&curve, 0.0);
///
/// assert_eq!(eval.evaluate(0.5, false), 5.0);
/// assert_eq!(eval.evaluate(1.5, false), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct CurveEvaluator<'a> {
    curve: &'a Curve,
    interval: Interval,
}

impl<'a> CurveEvaluator<'a> {
    /// Creates an evaluator with its cache resolved for `initial_time`.
    pub fn new(curve: &'a Curve, initial_time: f64) -> Self {
        let mut interval = Interval::default();
        interval.reset(curve.keys(), curve.curve_type(), curve.tension(), initial_time);
        Self { curve, interval }
    }

    /// Evaluates the curve at `time`.
    ///
    /// The key interval is located again when `force_reset` is set or when
    /// `time` falls outside the cached interval.
    pub fn evaluate(&mut self, time: f64, force_reset: bool) -> f64 {
        let curve = self.curve;
        self.interval.evaluate(
            curve.keys(),
            curve.curve_type(),
            curve.tension(),
            time,
            force_reset,
        )
    }

    /// The curve being evaluated.
    pub fn curve(&self) -> &'a Curve {
        self.curve
    }
}
