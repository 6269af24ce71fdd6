//! # Render Subcommand
//!
//! Builds the fixed-section document model for a payslip record and
//! renders it through the backend pool. Optionally merges an annual
//! summary so the cumulative-totals section carries year-to-date figures.

use std::path::PathBuf;

use clap::Args;

use paie_engine::AnnualSummary;
use paie_render::{payslip_document, PoolConfig, RendererPool, TextBackend};

use crate::io;

/// Arguments for the render subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Payslip record to render (JSON).
    #[arg(long)]
    pub input: PathBuf,

    /// Annual summary for the year-to-date section (JSON, optional).
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Where to write the rendered document. Defaults to stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the render subcommand.
pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let payslip = io::read_payslip(&args.input)?;
    let summary: Option<AnnualSummary> = match &args.summary {
        Some(path) => Some(io::read_json(path)?),
        None => None,
    };

    let model = payslip_document(&payslip, summary.as_ref().map(|s| &s.annual_totals));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()?;
    let pool = RendererPool::new(PoolConfig::default(), TextBackend::new);
    let bytes = runtime.block_on(pool.render(&model))?;
    tracing::info!(payslip = %payslip.id, bytes = bytes.len(), "rendered document");

    io::write_bytes(&bytes, args.output.as_deref())
}
