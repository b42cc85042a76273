//! Quick (rank-based) projection command implementation

use anyhow::Result;

use crate::projection::quick_projection;

/// Handle the quick command: baseline * defense factor * manual adjustment.
pub fn handle_quick(
    baseline: f64,
    opp_defense: f64,
    adjustment: Option<f64>,
    as_json: bool,
) -> Result<()> {
    let out = quick_projection(baseline, opp_defense, adjustment);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Projection: {:.1}", out.projection);
    println!(
        "  defense factor {:.3}, adjustment factor {:.3}",
        out.defense_factor, out.adjustment_factor
    );
    Ok(())
}
