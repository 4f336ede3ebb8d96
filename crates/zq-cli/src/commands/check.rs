//! Check command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use zq_circuit::Circuit;
use zq_conversions::{ConversionOptions, export_circuit_with, import_circuit};

use super::common::load_json;

/// Execute the check command: export, re-import, and compare.
pub fn execute(input: &str, options: &ConversionOptions, tolerance: f64) -> Result<()> {
    eprintln!(
        "{} Checking round-trip of {}",
        style("→").cyan().bold(),
        style(input).green()
    );

    let circuit: Circuit = load_json(input)?;
    let external = export_circuit_with(&circuit, options)
        .with_context(|| format!("Failed to export {input}"))?;
    let back = import_circuit(&external).context("Failed to re-import exported circuit")?;
    debug!(tolerance, operations = back.len(), "Re-imported circuit");

    if back == circuit {
        println!(
            "{} {} operations round-trip exactly",
            style("✓").green().bold(),
            circuit.len()
        );
        return Ok(());
    }

    if back.approx_eq(&circuit, tolerance) {
        println!(
            "{} {} operations round-trip within tolerance {}",
            style("✓").green().bold(),
            circuit.len(),
            tolerance
        );
        return Ok(());
    }

    anyhow::bail!("{}", describe_mismatch(&circuit, &back, tolerance))
}

/// Explain where two circuits first differ.
fn describe_mismatch(original: &Circuit, back: &Circuit, tolerance: f64) -> String {
    if original.n_qubits() != back.n_qubits() {
        return format!(
            "Round-trip changed qubit count from {} to {}",
            original.n_qubits(),
            back.n_qubits()
        );
    }
    if original.len() != back.len() {
        return format!(
            "Round-trip changed operation count from {} to {}",
            original.len(),
            back.len()
        );
    }
    original
        .operations()
        .iter()
        .zip(back.operations())
        .position(|(a, b)| !a.approx_eq(b, tolerance))
        .map_or_else(
            || "Round-trip mismatch".to_string(),
            |i| {
                let (a, b) = (&original.operations()[i], &back.operations()[i]);
                format!(
                    "Round-trip mismatch at operation {i}: {} on {:?} came back as {} on {:?}",
                    a.gate(),
                    a.qubit_indices(),
                    b.gate(),
                    b.qubit_indices()
                )
            },
        )
}
