//! Interpolation schemes and their stable integer codes.

use std::fmt;
use std::str::FromStr;

use crate::CurveError;

/// Interpolation scheme used between two neighbouring keys.
///
/// The discriminants are the codes stored in authored asset data and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum CurveType {
    /// Straight line between keys.
    Linear = 0,

    /// Cubic ease in and out, `t * t * (3 - 2t)`, with zero slope at both keys.
    #[default]
    Smoothstep = 1,

    /// Legacy Catmull-Rom spline.
    ///
    /// Tension is fixed at 0.5 regardless of the curve's own tension, and the
    /// tangents use the legacy neighbour rescaling. Kept so existing content
    /// renders unchanged; prefer [`CurveType::Spline`].
    Catmull = 2,

    /// Legacy cardinal spline.
    ///
    /// Same tangent formula as [`CurveType::Catmull`] but uses the curve's
    /// tension. Prefer [`CurveType::Spline`].
    Cardinal = 3,

    /// Cubic Hermite spline with tangents scaled for uneven key spacing.
    ///
    /// A tension of 0.5 gives Catmull-Rom.
    Spline = 4,

    /// Holds the left key's value until the next key.
    Step = 5,
}

impl CurveType {
    /// All schemes in code order.
    pub const ALL: [CurveType; 6] = [
        CurveType::Linear,
        CurveType::Smoothstep,
        CurveType::Catmull,
        CurveType::Cardinal,
        CurveType::Spline,
        CurveType::Step,
    ];

    /// Integer code used in serialized data.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Whether evaluation goes through Hermite tangents.
    pub fn is_hermite(self) -> bool {
        matches!(
            self,
            CurveType::Catmull | CurveType::Cardinal | CurveType::Spline
        )
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            CurveType::Linear => "linear",
            CurveType::Smoothstep => "smoothstep",
            CurveType::Catmull => "catmull",
            CurveType::Cardinal => "cardinal",
            CurveType::Spline => "spline",
            CurveType::Step => "step",
        }
    }
}

impl TryFrom<u32> for CurveType {
    type Error = CurveError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        CurveType::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(CurveError::UnknownCurveType(code))
    }
}

impl From<CurveType> for u32 {
    fn from(curve_type: CurveType) -> Self {
        curve_type.code()
    }
}

impl FromStr for CurveType {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        CurveType::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or_else(|| CurveError::UnknownCurveName(s.to_string()))
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
