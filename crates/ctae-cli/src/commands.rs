//! Query command execution.

use anyhow::{Context, Result};
use tracing::info_span;

use ctae_model::{QueryOutput, SingleOutcome};
use ctae_registry::RegistryClient;
use ctae_report::{export_batch, export_trial_report};
use ctae_transform::run_query;

use crate::cli::QueryArgs;
use crate::render::{print_batch, print_trial_report};

pub fn run_query_command(args: &QueryArgs) -> Result<()> {
    let client = RegistryClient::with_base_url(&args.registry_url)
        .context("create registry client")?;
    let span = info_span!("query", input = %args.input);
    let _guard = span.enter();

    let output = run_query(&client, &args.input);
    match &output {
        QueryOutput::Single(SingleOutcome::Report(report)) => {
            print_trial_report(report);
            if let Some(dir) = &args.export_dir {
                let written = export_trial_report(dir, report)
                    .with_context(|| format!("export tables for {}", report.id))?;
                for path in written {
                    println!("wrote {}", path.display());
                }
            }
        }
        QueryOutput::Single(SingleOutcome::Unavailable { id }) => {
            println!("Results data not available for {id}");
        }
        QueryOutput::Batch(rows) => {
            println!(
                "Multiple inputs detected, detail tables available only for \
                 single trial id input"
            );
            print_batch(rows);
            if let Some(dir) = &args.export_dir {
                let path = export_batch(dir, rows).context("export batch table")?;
                println!("wrote {}", path.display());
            }
        }
    }
    Ok(())
}
