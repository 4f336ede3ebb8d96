//! zq command-line interface
//!
//! Converts circuits between the zq model and qcircuit, checks that a
//! conversion round-trips, and summarizes result files.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;

mod commands;
mod config;
mod logging;

use commands::{check, export, import, inspect, version};
use config::Config;

/// zq - library-agnostic quantum circuits
#[derive(Parser)]
#[command(name = "zq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a zq circuit (JSON) to a qcircuit circuit (JSON)
    Export {
        /// Input circuit file
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Name of the exported quantum register
        #[arg(long)]
        register_name: Option<String>,
    },

    /// Import a qcircuit circuit (JSON) as a zq circuit (JSON)
    Import {
        /// Input circuit file
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check that a zq circuit survives export and re-import
    Check {
        /// Input circuit file
        #[arg(short, long)]
        input: String,

        /// Tolerance for numeric parameters
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Summarize a result file
    Inspect {
        /// Input result file
        #[arg(short, long)]
        input: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.logging, cli.verbose);

    let result = match cli.command {
        Commands::Export {
            input,
            output,
            register_name,
        } => {
            let config = config.with_overrides(register_name, None)?;
            export::execute(&input, output.as_deref(), &config.conversion_options())
        }

        Commands::Import { input, output } => import::execute(&input, output.as_deref()),

        Commands::Check { input, tolerance } => {
            let config = config.with_overrides(None, tolerance)?;
            check::execute(
                &input,
                &config.conversion_options(),
                config.conversion.roundtrip_tolerance,
            )
        }

        Commands::Inspect { input } => inspect::execute(&input),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
