use anyhow::{Context, Result};
use clap::Parser;
use copresence::{cli::Cli, input, presence, report};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = report::ReportConfig {
        format: args.format,
        details: args.details,
    };

    let document = input::load_document(args.input.as_deref())?;

    // Any failing document aborts the whole run
    let reports = document
        .into_maps()
        .iter()
        .enumerate()
        .map(|(index, map)| {
            presence::analyze(map).with_context(|| format!("Document {} rejected", index))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(documents = reports.len(), "rendering results");

    let output = report::render(reports, &config)?;
    print!("{}", output);

    Ok(())
}
