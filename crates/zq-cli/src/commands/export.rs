//! Export command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use zq_circuit::Circuit;
use zq_conversions::{ConversionOptions, export_circuit_with};

use super::common::{load_json, write_json};

/// Execute the export command.
pub fn execute(input: &str, output: Option<&str>, options: &ConversionOptions) -> Result<()> {
    eprintln!(
        "{} Exporting {} to register {}",
        style("→").cyan().bold(),
        style(input).green(),
        style(&options.register_name).yellow()
    );

    let circuit: Circuit = load_json(input)?;
    eprintln!(
        "  Loaded: {} qubits, {} operations",
        circuit.n_qubits(),
        circuit.len()
    );

    let external = export_circuit_with(&circuit, options)
        .with_context(|| format!("Failed to export {input}"))?;

    debug!(
        operations = circuit.len(),
        instructions = external.data().len(),
        "Converted circuit"
    );

    write_json(&external, output)?;
    eprintln!(
        "{} Exported {} instructions",
        style("✓").green().bold(),
        external.data().len()
    );
    if let Some(path) = output {
        eprintln!("  Output: {}", style(path).green());
    }

    Ok(())
}
