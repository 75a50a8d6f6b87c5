//! Keyframed scalar curves.

use super::interval::Interval;
use super::{CurveEvaluator, CurveType, Key};
use crate::CurveError;

/// Tension used when none is given. A spline at this tension is Catmull-Rom.
pub const DEFAULT_TENSION: f64 = 0.5;

/// A scalar curve defined by time-sorted keys and an interpolation scheme.
///
/// The keys are always kept sorted by time: they can only be changed through
/// methods that preserve the order. The curve owns one evaluation cache, used
/// by [`Curve::value`], [`Curve::evaluate`] and [`Curve::quantize`].
///
/// # Examples
///
/// ```
/// use keycurve::{Curve, CurveType};
///
/// // Flat (time, value) pairs, in any order
/// let mut curve = Curve::new(&[0.0, 0.0, 10.0, 100.0]).with_type(CurveType::Linear);
///
/// assert_eq!(curve.value(5.0), 50.0);
/// assert_eq!(curve.value(-1.0), 0.0);  // clamps before the first key
/// assert_eq!(curve.value(20.0), 100.0); // and after the last
/// ```
#[derive(Debug)]
pub struct Curve {
    keys: Vec<Key>,
    curve_type: CurveType,
    tension: f64,
    cache: Interval,
}

impl Curve {
    /// Creates a curve from flat `(time, value)` pairs and sorts it by time.
    ///
    /// A trailing number without a partner is ignored. Use [`Curve::try_new`]
    /// to reject such input instead.
    pub fn new(data: &[f64]) -> Self {
        if data.len() % 2 != 0 {
            log::warn!(
                "curve key data has odd length {}, ignoring trailing {}",
                data.len(),
                data[data.len() - 1]
            );
        }
        Self::from_keys(data.chunks_exact(2).map(|pair| Key::new(pair[0], pair[1])))
    }

    /// Creates a curve from flat `(time, value)` pairs, failing on odd-length
    /// input.
    ///
    /// # Examples
    ///
    /// ```
    /// use keycurve::{Curve, CurveError};
    ///
    /// assert!(Curve::try_new(&[0.0, 1.0, 1.0, 2.0]).is_ok());
    /// assert_eq!(
    ///     Curve::try_new(&[0.0, 1.0, 1.0]).unwrap_err(),
    ///     CurveError::UnpairedKeyData { len: 3 }
    /// );
    /// ```
    pub fn try_new(data: &[f64]) -> Result<Self, CurveError> {
        if data.len() % 2 != 0 {
            return Err(CurveError::UnpairedKeyData { len: data.len() });
        }
        Ok(Self::new(data))
    }

    /// Creates a curve from keys and sorts it by time.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut curve = Self {
            keys: keys.into_iter().map(Into::into).collect(),
            curve_type: CurveType::default(),
            tension: DEFAULT_TENSION,
            cache: Interval::default(),
        };
        curve.sort();
        curve.reset_cache(0.0);
        curve
    }

    /// Creates a curve with no keys. It evaluates to 0 everywhere.
    pub fn empty() -> Self {
        Self::from_keys(std::iter::empty::<Key>())
    }

    /// Sets the interpolation scheme.
    pub fn with_type(mut self, curve_type: CurveType) -> Self {
        self.curve_type = curve_type;
        self
    }

    /// Sets the spline tension, meaningful for [`CurveType::Spline`] and
    /// [`CurveType::Cardinal`].
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// The interpolation scheme.
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Changes the interpolation scheme. Takes effect on the next evaluation.
    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        self.curve_type = curve_type;
    }

    /// The spline tension.
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Changes the spline tension. Tangents pick it up on the next reset.
    pub fn set_tension(&mut self, tension: f64) {
        self.tension = tension;
    }

    /// The keys, sorted by time.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the curve has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the key at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Key> {
        self.keys.get(index)
    }

    /// Inserts a key, keeping the keys sorted, and returns it.
    ///
    /// The key goes after every existing key with the same or an earlier time.
    ///
    /// # Examples
    ///
    /// ```
    /// use keycurve::{Curve, Key};
    ///
    /// let mut curve = Curve::new(&[0.0, 0.0, 1.0, 3.0]);
    /// curve.add(0.5, 1.0);
    /// assert_eq!(curve.get(1), Some(&Key::new(0.5, 1.0)));
    /// ```
    pub fn add(&mut self, time: f64, value: f64) -> Key {
        let key = Key::new(time, value);
        let index = self.insertion_index(time);
        self.keys.insert(index, key);
        key
    }

    /// Changes the value of the key at `index`. Returns `None` if out of range.
    pub fn set_value(&mut self, index: usize, value: f64) -> Option<()> {
        let key = self.keys.get_mut(index)?;
        key.value = value;
        Some(())
    }

    /// Moves the key at `index` to `time`, keeping the keys sorted.
    ///
    /// Returns the key's new index, or `None` if `index` is out of range.
    pub fn set_time(&mut self, index: usize, time: f64) -> Option<usize> {
        let mut key = self.remove(index)?;
        key.time = time;
        let new_index = self.insertion_index(time);
        self.keys.insert(new_index, key);
        Some(new_index)
    }

    /// Removes and returns the key at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Key> {
        if index < self.keys.len() {
            Some(self.keys.remove(index))
        } else {
            None
        }
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Sorts the keys by time. Keys sharing a time keep their relative order.
    pub fn sort(&mut self) {
        self.keys.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    /// Evaluates the curve at `time`.
    ///
    /// Always locates the key interval afresh, so it reflects every edit made
    /// since the previous call.
    pub fn value(&mut self, time: f64) -> f64 {
        self.evaluate(time, true)
    }

    /// Evaluates the curve at `time` using the curve's own cache.
    ///
    /// Without `force_reset`, a time inside the previously located interval
    /// reuses the cached endpoint values and tangents even if keys were edited
    /// since. Those results are stale until the next reset.
    pub fn evaluate(&mut self, time: f64, force_reset: bool) -> f64 {
        self.cache
            .evaluate(&self.keys, self.curve_type, self.tension, time, force_reset)
    }

    /// Creates a standalone evaluator borrowing this curve.
    pub fn evaluator(&self, initial_time: f64) -> CurveEvaluator<'_> {
        CurveEvaluator::new(self, initial_time)
    }

    /// Returns the key nearest to `time`.
    ///
    /// Scans from the first key and stops as soon as the distance grows again.
    /// Only keys within 2 time units are considered, which suits curves
    /// authored over the unit time range.
    pub fn closest(&self, time: f64) -> Option<&Key> {
        let mut min = 2.0;
        let mut result = None;
        for key in &self.keys {
            let diff = (time - key.time).abs();
            if min >= diff {
                min = diff;
                result = Some(key);
            } else {
                break;
            }
        }
        result
    }

    /// Samples the curve at `precision` evenly spaced times over [0, 1].
    ///
    /// `precision` is raised to at least 2 so both ends are sampled.
    ///
    /// # Examples
    ///
    /// ```
    /// use keycurve::{Curve, CurveType};
    ///
    /// let mut curve = Curve::new(&[0.0, 0.0, 1.0, 1.0]).with_type(CurveType::Linear);
    /// assert_eq!(curve.quantize(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn quantize(&mut self, precision: usize) -> Vec<f64> {
        let precision = precision.max(2);
        let step = 1.0 / (precision - 1) as f64;

        let mut values = Vec::with_capacity(precision);
        values.push(self.evaluate(0.0, true));
        for i in 1..precision {
            values.push(self.evaluate(step * i as f64, false));
        }
        values
    }

    /// Like [`Curve::quantize`], with every sample clamped into `[min, max]`.
    pub fn quantize_clamped(&mut self, precision: usize, min: f64, max: f64) -> Vec<f64> {
        let mut values = self.quantize(precision);
        for v in &mut values {
            *v = v.max(min).min(max);
        }
        values
    }

    fn reset_cache(&mut self, time: f64) {
        self.cache
            .reset(&self.keys, self.curve_type, self.tension, time);
    }

    /// Index of the first key whose time is strictly greater than `time`.
    fn insertion_index(&self, time: f64) -> usize {
        self.keys
            .iter()
            .position(|k| k.time > time)
            .unwrap_or(self.keys.len())
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::empty()
    }
}

/// Copies keys, type and tension. The clone's cache starts fresh.
impl Clone for Curve {
    fn clone(&self) -> Self {
        let mut curve = Self {
            keys: self.keys.clone(),
            curve_type: self.curve_type,
            tension: self.tension,
            cache: Interval::default(),
        };
        curve.reset_cache(0.0);
        curve
    }
}

/// Equal when keys, type and tension match. Cache state is ignored.
impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.curve_type == other.curve_type && self.tension == other.tension
    }
}

impl<K: Into<Key>> FromIterator<K> for Curve {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}
