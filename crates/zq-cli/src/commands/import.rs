//! Import command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use qcircuit::QuantumCircuit;
use zq_conversions::import_circuit;

use super::common::{load_json, write_json};

/// Execute the import command.
pub fn execute(input: &str, output: Option<&str>) -> Result<()> {
    eprintln!("{} Importing {}", style("→").cyan().bold(), style(input).green());

    let external: QuantumCircuit = load_json(input)?;
    eprintln!(
        "  Loaded: {} qubits, {} clbits, {} instructions",
        external.num_qubits(),
        external.num_clbits(),
        external.data().len()
    );

    let circuit =
        import_circuit(&external).with_context(|| format!("Failed to import {input}"))?;

    debug!(
        instructions = external.data().len(),
        operations = circuit.len(),
        n_qubits = circuit.n_qubits(),
        "Converted circuit"
    );

    write_json(&circuit, output)?;
    eprintln!(
        "{} Imported {} operations",
        style("✓").green().bold(),
        circuit.len()
    );
    if let Some(path) = output {
        eprintln!("  Output: {}", style(path).green());
    }

    Ok(())
}
