//! # Summary Subcommand
//!
//! Aggregates a set of payslip records into one annual summary. The
//! employee is taken from the first record; records for a different
//! employee are rejected rather than silently mixed into the totals.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;

use paie_engine::{aggregate_year, Payslip};

use crate::io;

/// Arguments for the summary subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Civil year to aggregate.
    #[arg(long)]
    pub year: i32,

    /// Payslip records to aggregate (JSON, one payslip per file).
    #[arg(required = true)]
    pub payslips: Vec<PathBuf>,

    /// Where to write the summary (JSON). Defaults to stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the summary subcommand.
pub fn run(args: SummaryArgs) -> anyhow::Result<()> {
    let mut payslips: Vec<Payslip> = Vec::with_capacity(args.payslips.len());
    for path in &args.payslips {
        payslips.push(io::read_payslip(path)?);
    }

    let employee_id = payslips[0].employee.employee_id;
    for payslip in &payslips {
        if payslip.employee.employee_id != employee_id {
            bail!(
                "payslip {} belongs to {}, expected {}",
                payslip.id,
                payslip.employee.employee_id,
                employee_id
            );
        }
    }

    let summary = aggregate_year(employee_id, args.year, &payslips)?;
    tracing::info!(
        %employee_id,
        year = args.year,
        gross = %summary.annual_totals.gross_salary,
        "aggregated annual summary"
    );

    io::write_json(&summary, args.output.as_deref())
}
