//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - library-agnostic quantum circuits",
        style("zq").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  zq-symbolic       Expression trees and dialect translation");
    println!("  zq-circuit        Circuit and gate model");
    println!("  zq-conversions    Conversion to and from qcircuit");
    println!("  zq-serialization  Result file formats");
    println!("  zq-cli            Command-line interface");
}
