//! Asset curve loading demo.
//!
//! Reads a color gradient stored as a curve set in asset JSON (either from the
//! file given on the command line or a built-in sample) and prints the baked
//! RGBA table.
//!
//! Usage: cargo run --example asset_curves --features serde [path/to/curves.json]

use anyhow::{Context, Result};
use keycurve::CurveSet;

const SAMPLE: &str = r#"{
    "type": 4,
    "keys": [
        [0, 1, 0.5, 0.5, 1, 0],
        [0, 0, 0.5, 1, 1, 0],
        [0, 0, 1, 1],
        [0, 1, 0.8, 1, 1, 0]
    ]
}"#;

const PRECISION: usize = 9;

fn main() -> Result<()> {
    let json = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?
        }
        None => SAMPLE.to_string(),
    };

    let gradient: CurveSet = serde_json::from_str(&json).context("parsing curve set")?;
    println!("{} channels, {} interpolation", gradient.len(), gradient.curve_type());

    let table = gradient.quantize_clamped(PRECISION, 0.0, 1.0);
    for (i, sample) in table.chunks(gradient.len().max(1)).enumerate() {
        let channels: Vec<String> = sample.iter().map(|v| format!("{:.3}", v)).collect();
        println!("{:>5.3}  [{}]", i as f64 / (PRECISION - 1) as f64, channels.join(", "));
    }

    Ok(())
}
