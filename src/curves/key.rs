//! A single control point of a curve.

/// A `(time, value)` control point.
///
/// Keys are plain values. Several keys in one curve may share a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Key {
    pub time: f64,
    pub value: f64,
}

impl Key {
    /// Creates a key.
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f64)> for Key {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

impl From<[f64; 2]> for Key {
    fn from([time, value]: [f64; 2]) -> Self {
        Self { time, value }
    }
}

impl From<Key> for (f64, f64) {
    fn from(key: Key) -> Self {
        (key.time, key.value)
    }
}
