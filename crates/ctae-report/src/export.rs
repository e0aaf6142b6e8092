//! CSV writers for the query artifacts.
//!
//! Column order matches the rendered tables exactly, so an export can
//! stand in for anything shown on screen.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;

use ctae_model::{BATCH_HEADERS, BatchRow, DetailTable, TrialMetrics, TrialReport, format_numeric};

/// Write one detail table: `Term`, one column per arm, `Total`, `Percent`.
pub fn write_detail_csv<W: io::Write>(table: &DetailTable, writer: W) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    let mut headers = Vec::with_capacity(table.arms.len() + 3);
    headers.push("Term".to_string());
    headers.extend(table.arms.iter().cloned());
    headers.push("Total".to_string());
    headers.push("Percent".to_string());
    csv.write_record(&headers)?;
    for row in &table.rows {
        let mut record = Vec::with_capacity(headers.len());
        record.push(row.term.clone());
        record.extend(row.cells.iter().map(|cell| cell.render()));
        record.push(row.total.render());
        record.push(row.percent.render());
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the SAE/OAE per-category summary table.
pub fn write_category_summary_csv<W: io::Write>(report: &TrialReport, writer: W) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Group", "Subjects", "Percentage", "AE Count"])?;
    for row in report.category_summary() {
        csv.write_record([
            row.group.to_string(),
            format_numeric(row.subjects),
            row.percentage,
            row.ae_count.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the single-trial aggregate summary (batch columns minus the id).
pub fn write_aggregate_csv<W: io::Write>(metrics: &TrialMetrics, writer: W) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(&BATCH_HEADERS[1..])?;
    csv.write_record(metrics.cells().map(|cell| cell.render()))?;
    csv.flush()?;
    Ok(())
}

/// Write the batch comparison table.
pub fn write_batch_csv<W: io::Write>(rows: &[BatchRow], writer: W) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(BATCH_HEADERS)?;
    for row in rows {
        let mut record = Vec::with_capacity(BATCH_HEADERS.len());
        record.push(row.id.as_str().to_string());
        record.extend(row.metrics.cells().map(|cell| cell.render()));
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Export every artifact of a single-trial report into `dir`.
///
/// Detail tables that were not built (zero affected subjects) are
/// skipped. Returns the written paths.
pub fn export_trial_report(dir: &Path, report: &TrialReport) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create export directory {}", dir.display()))?;
    let mut written = Vec::new();
    for (suffix, detail) in [("sae", &report.sae.detail), ("oae", &report.oae.detail)] {
        if let Some(table) = detail {
            let path = dir.join(format!("{}_{suffix}.csv", report.id));
            write_detail_csv(table, create(&path)?)?;
            written.push(path);
        }
    }
    let summary_path = dir.join(format!("{}_categories.csv", report.id));
    write_category_summary_csv(report, create(&summary_path)?)?;
    written.push(summary_path);

    let aggregate_path = dir.join(format!("{}_summary.csv", report.id));
    write_aggregate_csv(&report.summary, create(&aggregate_path)?)?;
    written.push(aggregate_path);

    tracing::info!(count = written.len(), dir = %dir.display(), "exported trial artifacts");
    Ok(written)
}

/// Export the batch comparison table into `dir`.
pub fn export_batch(dir: &Path, rows: &[BatchRow]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create export directory {}", dir.display()))?;
    let path = dir.join("ae_comparison.csv");
    write_batch_csv(rows, create(&path)?)?;
    tracing::info!(rows = rows.len(), path = %path.display(), "exported batch table");
    Ok(path)
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("create {}", path.display()))
}
