//! Quantized lookup table demo.
//!
//! Samples one curve with every interpolation scheme and prints the resulting
//! lookup tables side by side, the way a particle system would bake a
//! size-over-lifetime curve before uploading it.
//!
//! Usage: cargo run --example quantize_table [precision]

use anyhow::{Context, Result};
use keycurve::{Curve, CurveType};

const DEFAULT_PRECISION: usize = 11;

fn main() -> Result<()> {
    let precision = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid precision '{}'", arg))?,
        None => DEFAULT_PRECISION,
    };

    let base = Curve::try_new(&[0.0, 0.0, 0.25, 1.0, 0.5, 0.5, 0.75, 1.0, 1.0, 0.0])?;

    let tables: Vec<(CurveType, Vec<f64>)> = CurveType::ALL
        .into_iter()
        .map(|t| (t, base.clone().with_type(t).quantize(precision)))
        .collect();

    print!("{:>6}", "t");
    for (t, _) in &tables {
        print!("{:>12}", t);
    }
    println!();

    let rows = tables.first().map(|(_, v)| v.len()).unwrap_or(0);
    for i in 0..rows {
        print!("{:>6.3}", i as f64 / (rows - 1) as f64);
        for (_, values) in &tables {
            print!("{:>12.4}", values[i]);
        }
        println!();
    }

    Ok(())
}
