//! Inspect command implementation.

use anyhow::{Context, Result};
use console::style;

use zq_serialization::{Decoded, load_decoded};

/// Nesting depth shown for objects and lists.
const MAX_DEPTH: usize = 3;

/// Execute the inspect command.
pub fn execute(input: &str) -> Result<()> {
    let decoded = load_decoded(input).with_context(|| format!("Failed to load {input}"))?;

    println!("{} {}", style(input).green(), style(decoded.kind()).cyan());
    for line in outline(&decoded, 1) {
        println!("{line}");
    }

    Ok(())
}

/// One-line description of a decoded value.
pub fn describe(decoded: &Decoded) -> String {
    match decoded {
        Decoded::Array(a) => format!(
            "{} array, shape {:?}",
            if a.is_complex() { "complex" } else { "real" },
            a.shape()
        ),
        Decoded::HistoryEntry(e) => {
            format!("history entry #{}, value {}", e.call_number, e.value)
        }
        Decoded::HistoryEntryWithArtifacts(e) => format!(
            "history entry #{}, value {}, {} artifacts",
            e.call_number,
            e.value,
            e.artifacts.len()
        ),
        Decoded::ValueEstimate(e) => format!("value estimate {e}"),
        Decoded::OptimizationResult(r) => {
            let mut line = format!(
                "optimization result, opt_value {}, {} parameters, {} history entries",
                r.opt_value,
                r.opt_params.len(),
                r.history.len()
            );
            if let Some(nfev) = r.nfev {
                line.push_str(&format!(", nfev {nfev}"));
            }
            if let Some(nit) = r.nit {
                line.push_str(&format!(", nit {nit}"));
            }
            line
        }
        Decoded::CircuitTemplateParams(a) => format!("{} circuit template parameters", a.len()),
        Decoded::Object(fields) => format!("object with {} fields", fields.len()),
        Decoded::List(items) => format!("list of {} items", items.len()),
        Decoded::Scalar(v) => v.to_string(),
    }
}

fn outline(decoded: &Decoded, depth: usize) -> Vec<String> {
    let indent = "  ".repeat(depth);
    let mut lines = vec![format!("{indent}{}", describe(decoded))];
    if depth >= MAX_DEPTH {
        return lines;
    }
    match decoded {
        Decoded::Object(fields) => {
            for (key, value) in fields {
                lines.push(format!("{indent}  {}:", style(key).yellow()));
                lines.extend(outline(value, depth + 2));
            }
        }
        Decoded::List(items) => {
            for item in items {
                lines.extend(outline(item, depth + 1));
            }
        }
        _ => {}
    }
    lines
}
