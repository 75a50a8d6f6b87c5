//! Cached key interval shared by [`Curve`](super::Curve) and
//! [`CurveEvaluator`](super::CurveEvaluator).
//!
//! Locating the interval that contains a time is a linear scan over the keys,
//! so the result is cached together with everything the interpolation needs
//! (endpoint values, Hermite tangents, reciprocal width). Queries that stay
//! inside `[left, right)` skip the scan entirely.

use super::{CurveType, Key};

/// Cached state for the key interval most recently located.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interval {
    pub(crate) left: f64,
    pub(crate) right: f64,
    /// `1 / (right - left)`, or 0 when that is not finite.
    pub(crate) recip: f64,
    pub(crate) p0: f64,
    pub(crate) p1: f64,
    pub(crate) m0: f64,
    pub(crate) m1: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl Interval {
    /// Covers every time and evaluates to 0. Used for empty curves.
    pub(crate) const UNBOUNDED: Interval = Interval {
        left: f64::NEG_INFINITY,
        right: f64::INFINITY,
        recip: 0.0,
        p0: 0.0,
        p1: 0.0,
        m0: 0.0,
        m1: 0.0,
    };

    /// Whether `time` lies in the cached half-open window `[left, right)`.
    #[inline]
    pub(crate) fn contains(&self, time: f64) -> bool {
        time >= self.left && time < self.right
    }

    /// Holds a single value over `[left, right)`.
    fn flat(left: f64, right: f64, value: f64) -> Self {
        Self {
            left,
            right,
            recip: 0.0,
            p0: value,
            p1: value,
            m0: 0.0,
            m1: 0.0,
        }
    }

    /// Re-resolves the interval containing `time`.
    ///
    /// `keys` must be sorted by time. Times before the first key or at/after
    /// the last key clamp to that key's value.
    pub(crate) fn reset(&mut self, keys: &[Key], curve_type: CurveType, tension: f64, time: f64) {
        let (first, last) = match (keys.first(), keys.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                *self = Self::UNBOUNDED;
                return;
            }
        };

        if time < first.time {
            log::trace!("time {} before first key, clamping to {}", time, first.value);
            *self = Self::flat(f64::NEG_INFINITY, first.time, first.value);
        } else if time >= last.time || time.is_nan() {
            log::trace!("time {} at or after last key, clamping to {}", time, last.value);
            *self = Self::flat(last.time, f64::INFINITY, last.value);
        } else {
            // first.time <= time < last.time, so the scan stops before the end
            let mut index = 0;
            while time >= keys[index + 1].time {
                index += 1;
            }

            let b = keys[index];
            let c = keys[index + 1];
            log::trace!("time {} located in interval {} [{}, {})", time, index, b.time, c.time);

            self.left = b.time;
            self.right = c.time;
            self.recip = finite_or_zero(1.0 / (c.time - b.time));
            self.p0 = b.value;
            self.p1 = c.value;

            if curve_type.is_hermite() {
                let (m0, m1) = tangents(keys, index, curve_type, tension);
                self.m0 = m0;
                self.m1 = m1;
            } else {
                self.m0 = 0.0;
                self.m1 = 0.0;
            }
        }
    }

    /// Re-resolves when forced or when `time` leaves the cached interval, then
    /// interpolates.
    pub(crate) fn evaluate(
        &mut self,
        keys: &[Key],
        curve_type: CurveType,
        tension: f64,
        time: f64,
        force_reset: bool,
    ) -> f64 {
        if force_reset || !self.contains(time) {
            self.reset(keys, curve_type, tension, time);
        }
        self.interpolate(curve_type, time)
    }

    /// Interpolates inside the cached interval. Does not check that `time`
    /// actually lies inside it.
    pub(crate) fn interpolate(&self, curve_type: CurveType, time: f64) -> f64 {
        if curve_type == CurveType::Step {
            return self.p0;
        }

        let t = if self.recip == 0.0 {
            0.0
        } else {
            (time - self.left) * self.recip
        };

        match curve_type {
            CurveType::Linear => lerp(self.p0, self.p1, t),
            CurveType::Smoothstep => lerp(self.p0, self.p1, t * t * (3.0 - 2.0 * t)),
            _ => hermite(self.p0, self.p1, self.m0, self.m1, t),
        }
    }
}

/// Computes the tangents at both ends of the interval `keys[index]..keys[index + 1]`.
///
/// Missing outer neighbours are synthesized by reflecting the interval's
/// far key through its near key.
fn tangents(keys: &[Key], index: usize, curve_type: CurveType, tension: f64) -> (f64, f64) {
    let b = keys[index];
    let c = keys[index + 1];

    let a = if index == 0 {
        Key::new(b.time + (b.time - c.time), b.value + (b.value - c.value))
    } else {
        keys[index - 1]
    };

    let d = if index + 2 == keys.len() {
        Key::new(c.time + (c.time - b.time), c.value + (c.value - b.value))
    } else {
        keys[index + 2]
    };

    if curve_type == CurveType::Spline {
        // Scales correct for uneven spacing of the outer neighbours
        let s1 = finite_or_zero(2.0 * (c.time - b.time) / (c.time - a.time));
        let s2 = finite_or_zero(2.0 * (c.time - b.time) / (d.time - b.time));
        (
            tension * s1 * (c.value - a.value),
            tension * s2 * (d.value - b.value),
        )
    } else {
        // Legacy: rescale the outer neighbours to the interval width first
        let s1 = finite_or_zero((c.time - b.time) / (b.time - a.time));
        let s2 = finite_or_zero((c.time - b.time) / (d.time - c.time));
        let a_value = b.value + (a.value - b.value) * s1;
        let d_value = c.value + (d.value - c.value) * s2;
        let tension = if curve_type == CurveType::Catmull {
            0.5
        } else {
            tension
        };
        (tension * (c.value - a_value), tension * (d_value - b.value))
    }
}

#[inline]
fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cubic Hermite basis evaluated at `t` in [0, 1].
#[inline]
fn hermite(p0: f64, p1: f64, m0: f64, m1: f64, t: f64) -> f64 {
    let t2 = t * t;
    let twot = t + t;
    let omt = 1.0 - t;
    let omt2 = omt * omt;
    p0 * ((1.0 + twot) * omt2) + m0 * (t * omt2) + p1 * (t2 * (3.0 - twot)) + m1 * (t2 * (t - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn keys(data: &[f64]) -> Vec<Key> {
        data.chunks_exact(2).map(|p| Key::new(p[0], p[1])).collect()
    }

    #[test]
    fn test_empty_keys_unbounded() {
        let mut interval = Interval::default();
        interval.reset(&[], CurveType::Linear, 0.5, 3.0);
        assert_eq!(interval, Interval::UNBOUNDED);
        assert_eq!(interval.interpolate(CurveType::Spline, 3.0), 0.0);
    }

    #[test]
    fn test_clamp_before_first_key() {
        let keys = keys(&[1.0, 4.0, 2.0, 8.0]);
        let mut interval = Interval::default();
        interval.reset(&keys, CurveType::Linear, 0.5, 0.0);
        assert_eq!(interval.left, f64::NEG_INFINITY);
        assert_eq!(interval.right, 1.0);
        assert_eq!(interval.recip, 0.0);
        assert_eq!(interval.interpolate(CurveType::Linear, 0.0), 4.0);
    }

    #[test]
    fn test_clamp_at_last_key() {
        let keys = keys(&[1.0, 4.0, 2.0, 8.0]);
        let mut interval = Interval::default();
        interval.reset(&keys, CurveType::Spline, 0.5, 2.0);
        assert_eq!(interval.left, 2.0);
        assert_eq!(interval.right, f64::INFINITY);
        assert_eq!(interval.interpolate(CurveType::Spline, 5.0), 8.0);
    }

    #[test]
    fn test_locates_inner_interval() {
        let keys = keys(&[0.0, 0.0, 1.0, 1.0, 3.0, 2.0]);
        let mut interval = Interval::default();
        interval.reset(&keys, CurveType::Linear, 0.5, 1.5);
        assert_eq!(interval.left, 1.0);
        assert_eq!(interval.right, 3.0);
        assert!(approx_eq(interval.recip, 0.5));
        assert!(interval.contains(1.0));
        assert!(interval.contains(2.999));
        assert!(!interval.contains(3.0));
        assert!(approx_eq(interval.interpolate(CurveType::Linear, 2.0), 1.5));
    }

    #[test]
    fn test_nan_time_clamps_to_last_key() {
        let mut interval = Interval::default();
        interval.reset(&keys(&[0.5, 3.0]), CurveType::Linear, 0.5, f64::NAN);
        assert_eq!(interval.left, 0.5);
        assert_eq!(interval.right, f64::INFINITY);
        assert_eq!(interval.p0, 3.0);
    }

    #[test]
    fn test_evaluate_reuses_cache_unless_forced() {
        let mut data = keys(&[0.0, 0.0, 1.0, 10.0]);
        let mut interval = Interval::default();
        assert!(approx_eq(interval.evaluate(&data, CurveType::Linear, 0.5, 0.5, true), 5.0));

        data[1].value = 20.0;
        assert!(approx_eq(interval.evaluate(&data, CurveType::Linear, 0.5, 0.5, false), 5.0));
        assert!(approx_eq(interval.evaluate(&data, CurveType::Linear, 0.5, 0.5, true), 10.0));
    }

    #[test]
    fn test_non_hermite_has_zero_tangents() {
        let keys = keys(&[0.0, 0.0, 1.0, 1.0, 2.0, 0.0]);
        let mut interval = Interval::default();
        interval.reset(&keys, CurveType::Spline, 0.5, 0.5);
        assert!(interval.m0 != 0.0);
        interval.reset(&keys, CurveType::Linear, 0.5, 0.5);
        assert_eq!(interval.m0, 0.0);
        assert_eq!(interval.m1, 0.0);
    }

    #[test]
    fn test_spline_tangents_with_reflected_neighbours() {
        // a is reflected to (-0.25, -1), d is the real key (0.5, 0.5)
        let keys = keys(&[0.0, 0.0, 0.25, 1.0, 0.5, 0.5, 0.75, 1.0, 1.0, 0.0]);
        let (m0, m1) = tangents(&keys, 0, CurveType::Spline, 0.5);
        assert!(approx_eq(m0, 1.0));
        assert!(approx_eq(m1, 0.25));
    }

    #[test]
    fn test_spline_tangents_coincident_times_are_zero() {
        // a, b and c share a time, so both scale divisions are 0 / 0
        let keys = keys(&[1.0, 0.0, 1.0, 2.0, 1.0, 4.0, 2.0, 0.0]);
        let (m0, m1) = tangents(&keys, 1, CurveType::Spline, 0.5);
        assert_eq!(m0, 0.0);
        assert!(m1.is_finite());
    }

    #[test]
    fn test_legacy_tangents() {
        // Uneven spacing: a at 0, b at 1, c at 3, d at 4
        let keys = keys(&[0.0, 0.0, 1.0, 1.0, 3.0, 2.0, 4.0, 0.0]);

        // s1 = 2 / 1, s2 = 2 / 1
        // a_ = 1 + (0 - 1) * 2 = -1, d_ = 2 + (0 - 2) * 2 = -2
        let (m0, m1) = tangents(&keys, 1, CurveType::Catmull, 0.9);
        assert!(approx_eq(m0, 0.5 * (2.0 - -1.0)));
        assert!(approx_eq(m1, 0.5 * (-2.0 - 1.0)));

        let (m0, m1) = tangents(&keys, 1, CurveType::Cardinal, 0.9);
        assert!(approx_eq(m0, 0.9 * 3.0));
        assert!(approx_eq(m1, 0.9 * -3.0));
    }

    #[test]
    fn test_legacy_and_spline_differ() {
        let keys = keys(&[0.0, 0.0, 1.0, 1.0, 3.0, 2.0, 4.0, 0.0]);
        let spline = tangents(&keys, 1, CurveType::Spline, 0.5);
        let catmull = tangents(&keys, 1, CurveType::Catmull, 0.5);
        assert!(!approx_eq(spline.0, catmull.0));
    }

    #[test]
    fn test_hermite_endpoints() {
        assert!(approx_eq(hermite(2.0, 7.0, 3.0, -4.0, 0.0), 2.0));
        assert!(approx_eq(hermite(2.0, 7.0, 3.0, -4.0, 1.0), 7.0));
    }

    #[test]
    fn test_hermite_with_zero_tangents_matches_smoothstep() {
        for t in [0.1, 0.3, 0.5, 0.8] {
            let smooth = lerp(1.0, 5.0, t * t * (3.0 - 2.0 * t));
            assert!(approx_eq(hermite(1.0, 5.0, 0.0, 0.0, t), smooth));
        }
    }

    #[test]
    fn test_step_ignores_position() {
        let keys = keys(&[0.0, 1.0, 1.0, 5.0]);
        let mut interval = Interval::default();
        interval.reset(&keys, CurveType::Step, 0.5, 0.9);
        assert_eq!(interval.interpolate(CurveType::Step, 0.9), 1.0);
    }
}
