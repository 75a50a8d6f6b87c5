//! Groups of curves evaluated together.

use super::{Curve, CurveEvaluator, CurveType};

/// A fixed number of independent curves sharing an interpolation scheme.
///
/// Used for multi-channel data such as colors or positions, where every
/// channel is sampled at the same time.
///
/// The set stores its own [`CurveType`]. Setting it cascades to every curve,
/// but a curve changed later through [`CurveSet::get_mut`] keeps its own type
/// and [`CurveSet::curve_type`] keeps reporting the stored one.
///
/// # Examples
///
/// ```
/// use keycurve::{CurveSet, CurveType};
///
/// let mut set = CurveSet::from_key_arrays([
///     &[0.0, 0.0, 1.0, 10.0][..],
///     &[0.0, 0.0, 1.0, 20.0][..],
/// ])
/// .with_type(CurveType::Linear);
///
/// assert_eq!(set.value(0.5), vec![5.0, 10.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    curves: Vec<Curve>,
    curve_type: CurveType,
}

impl CurveSet {
    /// Creates a set of `count` empty curves.
    pub fn new(count: usize) -> Self {
        Self {
            curves: (0..count).map(|_| Curve::empty()).collect(),
            curve_type: CurveType::default(),
        }
    }

    /// Creates a set with one curve per flat `(time, value)` key array.
    pub fn from_key_arrays<I, D>(data: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[f64]>,
    {
        data.into_iter()
            .map(|keys| Curve::new(keys.as_ref()))
            .collect::<Vec<_>>()
            .into()
    }

    /// Sets the interpolation scheme of the set and every curve in it.
    pub fn with_type(mut self, curve_type: CurveType) -> Self {
        self.set_curve_type(curve_type);
        self
    }

    /// The stored set-level interpolation scheme.
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Stores `curve_type` and applies it to every curve.
    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        log::debug!(
            "setting curve type {} on {} curves",
            curve_type,
            self.curves.len()
        );
        self.curve_type = curve_type;
        for curve in &mut self.curves {
            curve.set_curve_type(curve_type);
        }
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the set holds no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Returns the curve at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    /// Mutable access to the curve at `index`, for editing its keys.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Curve> {
        self.curves.get_mut(index)
    }

    /// All curves, in channel order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Evaluates every curve at `time`.
    pub fn value(&mut self, time: f64) -> Vec<f64> {
        let mut result = Vec::with_capacity(self.curves.len());
        self.value_into(time, &mut result);
        result
    }

    /// Evaluates every curve at `time` into `result`, reusing its storage.
    ///
    /// `result` is resized to the number of curves and overwritten.
    pub fn value_into(&mut self, time: f64, result: &mut Vec<f64>) {
        result.clear();
        result.extend(self.curves.iter_mut().map(|curve| curve.value(time)));
    }

    /// Samples every curve at `precision` evenly spaced times over [0, 1].
    ///
    /// The samples are interleaved: `values[i * len + j]` is curve `j` at
    /// sample `i`.
    pub fn quantize(&self, precision: usize) -> Vec<f64> {
        let precision = precision.max(2);
        let num_curves = self.curves.len();
        let step = 1.0 / (precision - 1) as f64;

        let mut values = vec![0.0; precision * num_curves];
        for (c, curve) in self.curves.iter().enumerate() {
            let mut eval = CurveEvaluator::new(curve, 0.0);
            for i in 0..precision {
                values[i * num_curves + c] = eval.evaluate(step * i as f64, i == 0);
            }
        }
        values
    }

    /// Like [`CurveSet::quantize`], with every sample clamped into `[min, max]`.
    pub fn quantize_clamped(&self, precision: usize, min: f64, max: f64) -> Vec<f64> {
        let mut values = self.quantize(precision);
        for v in &mut values {
            *v = v.max(min).min(max);
        }
        values
    }
}

/// One empty curve.
impl Default for CurveSet {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Wraps existing curves. The stored type is the default; the curves keep
/// their own types until one is set on the set.
impl From<Vec<Curve>> for CurveSet {
    fn from(curves: Vec<Curve>) -> Self {
        Self {
            curves,
            curve_type: CurveType::default(),
        }
    }
}
