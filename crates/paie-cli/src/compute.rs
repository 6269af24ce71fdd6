//! # Compute Subcommand
//!
//! Reads a computation request and the applicable rule sets, runs the
//! payslip computation, and writes the resulting draft record as JSON.
//!
//! The request file is the CLI's own surface: it is deserialized here
//! and translated into the typed [`ComputationInput`] the engine expects,
//! so period validation still happens in one place.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use serde::Deserialize;

use paie_core::{Money, PayPeriod};
use paie_engine::{
    compute_payslip, ComputationInput, EmployeeSnapshot, EmployerSnapshot, PaidLeave, PayElement,
    RuleSets,
};

use crate::io;

/// Arguments for the compute subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Computation request (YAML).
    #[arg(long)]
    pub input: PathBuf,

    /// Contribution rule sets (YAML).
    #[arg(long)]
    pub rules: PathBuf,

    /// Where to write the payslip record (JSON). Defaults to stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// On-disk shape of a computation request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ComputeRequest {
    employee: EmployeeSnapshot,
    employer: EmployerSnapshot,
    period_start: NaiveDate,
    period_end: NaiveDate,
    payment_date: NaiveDate,
    pay_elements: Vec<PayElement>,
    #[serde(default)]
    tax_withheld: Money,
    #[serde(default)]
    paid_leave: PaidLeave,
}

/// Run the compute subcommand.
pub fn run(args: ComputeArgs) -> anyhow::Result<()> {
    let request: ComputeRequest = io::read_yaml(&args.input)?;
    let rules: RuleSets = io::read_yaml(&args.rules)?;

    let period = PayPeriod::new(request.period_start, request.period_end)?;
    let input = ComputationInput {
        employee: request.employee,
        employer: request.employer,
        period,
        payment_date: request.payment_date,
        elements: request.pay_elements,
        tax_withheld: request.tax_withheld,
        paid_leave: request.paid_leave,
    };

    let payslip = compute_payslip(input, &rules)?;
    tracing::info!(
        payslip = %payslip.id,
        gross = %payslip.gross_salary,
        net_to_pay = %payslip.net_to_pay,
        "computed draft payslip"
    );

    io::write_json(&payslip, args.output.as_deref())
}
