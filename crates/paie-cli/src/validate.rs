//! # Validate Subcommand
//!
//! Promotes a draft payslip record to `VALIDATED`. The transition is
//! permanent: once validated, edits are rejected by every surface.

use std::path::PathBuf;

use clap::Args;

use paie_lifecycle::validate_bulletin;

use crate::io;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Payslip record to validate (JSON).
    #[arg(long)]
    pub input: PathBuf,

    /// Where to write the validated record. Defaults to rewriting the
    /// input file in place.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the validate subcommand.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let mut payslip = io::read_payslip(&args.input)?;
    validate_bulletin(&mut payslip)?;
    tracing::info!(payslip = %payslip.id, "payslip validated and locked");

    let output = args.output.as_deref().or(Some(args.input.as_path()));
    io::write_json(&payslip, output)
}
