//! Legacy tangent comparison demo.
//!
//! Unevenly spaced keys make the legacy Catmull/Cardinal tangents diverge from
//! the spacing-corrected spline tangents. This prints both, plus the closest
//! key to each sample time.
//!
//! Usage: cargo run --example legacy_tangents --features macros

use anyhow::Result;
use keycurve::{CurveEvaluator, CurveType, curve};

fn main() -> Result<()> {
    let spline = curve!(spline; 0.0 => 0.0, 0.1 => 1.0, 0.7 => -1.0, 1.0 => 0.5);

    let mut catmull = spline.clone().with_type(CurveType::Catmull);
    let mut cardinal = spline.clone().with_type(CurveType::Cardinal).with_tension(0.9);
    let mut eval = CurveEvaluator::new(&spline, 0.0);

    println!("{:>6}{:>12}{:>12}{:>12}{:>10}", "t", "spline", "catmull", "cardinal", "closest");
    for i in 0..=20 {
        let t = i as f64 / 20.0;
        let closest = spline
            .closest(t)
            .map(|k| format!("{:.2}", k.time))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>6.2}{:>12.4}{:>12.4}{:>12.4}{:>10}",
            t,
            eval.evaluate(t, false),
            catmull.value(t),
            cardinal.value(t),
            closest
        );
    }

    Ok(())
}
