use anyhow::{Context, Result};
use std::path::Path;

use crate::models::MonthlySummary;

pub(crate) const DEFAULT_EXPORT_FILE: &str = "financial-data.csv";

const HEADER: [&str; 4] = ["Month", "Income", "Expenses", "Savings"];

/// Render the monthly table as CSV: one header line, `\n` between rows, no
/// quoting and no trailing newline.
pub(crate) fn monthly_csv(rows: &[MonthlySummary]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record([
            row.month.clone(),
            row.income.to_string(),
            row.expenses.to_string(),
            row.savings.to_string(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {e}"))?;
    let mut out = String::from_utf8(bytes).context("CSV output is not UTF-8")?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Write the monthly table to `path`. Returns the number of data rows written.
pub(crate) fn export_monthly(path: &Path, rows: &[MonthlySummary]) -> Result<usize> {
    let csv = monthly_csv(rows)?;
    std::fs::write(path, csv)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    log::info!("Exported {} months to {}", rows.len(), path.display());
    Ok(rows.len())
}

#[cfg(test)]
mod tests;
