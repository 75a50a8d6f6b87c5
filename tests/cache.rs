use keycurve::{Curve, CurveType};

#[test]
fn test_value_sees_edits_immediately() {
    let mut curve = Curve::new(&[0.0, 0.0, 1.0, 10.0]).with_type(CurveType::Linear);
    assert_eq!(curve.value(0.5), 5.0);

    curve.set_value(1, 20.0);
    assert_eq!(curve.value(0.5), 10.0);
}

#[test]
fn test_unforced_evaluate_returns_stale_cache() {
    let mut curve = Curve::new(&[0.0, 0.0, 1.0, 10.0]).with_type(CurveType::Linear);
    assert_eq!(curve.evaluate(0.5, false), 5.0);

    curve.set_value(1, 20.0);

    // Still inside the cached interval, so the old endpoint value is used
    assert_eq!(curve.evaluate(0.5, false), 5.0);
    assert_eq!(curve.evaluate(0.25, false), 2.5);

    // Forcing a reset picks up the edit
    assert_eq!(curve.evaluate(0.5, true), 10.0);
}

#[test]
fn test_unforced_evaluate_refreshes_outside_interval() {
    let mut curve =
        Curve::new(&[0.0, 0.0, 1.0, 10.0, 2.0, 0.0]).with_type(CurveType::Linear);
    assert_eq!(curve.evaluate(0.5, false), 5.0);

    curve.set_value(2, 10.0);

    // Leaving [0, 1) relocates the interval and reads the new key
    assert_eq!(curve.evaluate(1.5, false), 10.0);
}

#[test]
fn test_type_change_applies_without_reset() {
    let mut curve = Curve::new(&[0.0, 0.0, 1.0, 10.0]).with_type(CurveType::Linear);
    assert_eq!(curve.evaluate(0.25, false), 2.5);

    curve.set_curve_type(CurveType::Step);
    assert_eq!(curve.evaluate(0.25, false), 0.0);
}

#[test]
fn test_quantize_leaves_cache_at_end() {
    let mut curve =
        Curve::new(&[0.0, 0.0, 0.5, 1.0, 1.0, 2.0]).with_type(CurveType::Linear);
    curve.quantize(5);

    // The cache now covers [1, inf), so 0.5 relocates and reads the edit
    curve.set_value(1, 5.0);
    assert_eq!(curve.evaluate(0.5, false), 5.0);
}
