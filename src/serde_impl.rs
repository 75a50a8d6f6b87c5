//! Serialization in the asset layout used by authored content.
//!
//! A curve is stored as `{ "type": 4, "tension": 0.5, "keys": [t0, v0, t1, v1] }`
//! and a curve set as `{ "type": 1, "keys": [[t0, v0, ...], [t0, v0, ...]] }`.
//! `type` and `tension` may be omitted on input.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Curve, CurveError, CurveSet, CurveType, DEFAULT_TENSION};

fn default_type_code() -> u32 {
    CurveType::default().code()
}

fn default_tension() -> f64 {
    DEFAULT_TENSION
}

fn flatten(curve: &Curve) -> Vec<f64> {
    curve
        .keys()
        .iter()
        .flat_map(|k| [k.time, k.value])
        .collect()
}

#[derive(Serialize, Deserialize)]
struct CurveRepr {
    #[serde(rename = "type", default = "default_type_code")]
    curve_type: u32,
    #[serde(default = "default_tension")]
    tension: f64,
    #[serde(default)]
    keys: Vec<f64>,
}

impl TryFrom<CurveRepr> for Curve {
    type Error = CurveError;

    fn try_from(repr: CurveRepr) -> Result<Self, Self::Error> {
        let curve_type = CurveType::try_from(repr.curve_type)?;
        Ok(Curve::try_new(&repr.keys)?
            .with_type(curve_type)
            .with_tension(repr.tension))
    }
}

impl Serialize for Curve {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CurveRepr {
            curve_type: self.curve_type().code(),
            tension: self.tension(),
            keys: flatten(self),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Curve {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CurveRepr::deserialize(deserializer)?;
        Curve::try_from(repr).map_err(D::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct CurveSetRepr {
    #[serde(rename = "type", default = "default_type_code")]
    curve_type: u32,
    #[serde(default)]
    keys: Vec<Vec<f64>>,
}

impl TryFrom<CurveSetRepr> for CurveSet {
    type Error = CurveError;

    fn try_from(repr: CurveSetRepr) -> Result<Self, Self::Error> {
        let curve_type = CurveType::try_from(repr.curve_type)?;
        let curves = repr
            .keys
            .iter()
            .map(|keys| Curve::try_new(keys))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CurveSet::from(curves).with_type(curve_type))
    }
}

impl Serialize for CurveSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CurveSetRepr {
            curve_type: self.curve_type().code(),
            keys: self.curves().iter().map(flatten).collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CurveSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CurveSetRepr::deserialize(deserializer)?;
        CurveSet::try_from(repr).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Key;

    #[test]
    fn test_curve_to_asset_layout() {
        let curve = Curve::new(&[1.0, 2.0, 0.0, 1.0]).with_type(CurveType::Spline);
        let json = serde_json::to_value(&curve).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": 4, "tension": 0.5, "keys": [0.0, 1.0, 1.0, 2.0] })
        );
    }

    #[test]
    fn test_curve_from_asset_sorts_keys() {
        let curve: Curve =
            serde_json::from_str(r#"{ "type": 0, "keys": [1, 3, 0, 1] }"#).unwrap();
        assert_eq!(curve.curve_type(), CurveType::Linear);
        assert_eq!(curve.tension(), DEFAULT_TENSION);
        assert_eq!(curve.keys(), &[Key::new(0.0, 1.0), Key::new(1.0, 3.0)]);
    }

    #[test]
    fn test_curve_defaults() {
        let curve: Curve = serde_json::from_str("{}").unwrap();
        assert!(curve.is_empty());
        assert_eq!(curve.curve_type(), CurveType::Smoothstep);
    }

    #[test]
    fn test_curve_rejects_bad_data() {
        let err = serde_json::from_str::<Curve>(r#"{ "type": 9, "keys": [] }"#).unwrap_err();
        assert!(err.to_string().contains("unknown curve type code: 9"));

        let err = serde_json::from_str::<Curve>(r#"{ "keys": [0, 1, 2] }"#).unwrap_err();
        assert!(err.to_string().contains("key data has 3 elements"));
    }

    #[test]
    fn test_curve_set_from_asset() {
        let set: CurveSet = serde_json::from_str(
            r#"{ "type": 5, "keys": [[0, 0, 1, 1], [0, 2, 1, 3]] }"#,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.curve_type(), CurveType::Step);
        assert!(set.curves().iter().all(|c| c.curve_type() == CurveType::Step));
    }

    #[test]
    fn test_curve_set_round_trip() {
        let set = CurveSet::from_key_arrays([[0.0, 0.0, 1.0, 1.0], [0.0, 2.0, 1.0, 3.0]])
            .with_type(CurveType::Linear);
        let json = serde_json::to_string(&set).unwrap();
        let back: CurveSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
