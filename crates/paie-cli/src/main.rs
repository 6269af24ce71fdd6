//! # paie CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Paie Stack CLI — payslip toolchain.
///
/// Computes draft payslips from rule sets, validates and locks them,
/// aggregates annual summaries, and renders printable documents.
#[derive(Parser, Debug)]
#[command(name = "paie", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compute a draft payslip from a request and rule sets.
    Compute(paie_cli::compute::ComputeArgs),
    /// Validate a draft payslip, locking it permanently.
    Validate(paie_cli::validate::ValidateArgs),
    /// Aggregate payslip records into an annual summary.
    Summary(paie_cli::summary::SummaryArgs),
    /// Render a payslip record as a printable document.
    Render(paie_cli::render::RenderArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute(args) => paie_cli::compute::run(args),
        Commands::Validate(args) => paie_cli::validate::run(args),
        Commands::Summary(args) => paie_cli::summary::run(args),
        Commands::Render(args) => paie_cli::render::run(args),
    }
}
