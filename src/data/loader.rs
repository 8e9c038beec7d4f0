use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{Roster, RosterRow};

/// Offset between a record's position in the file body and its displayed
/// row number: lines are 1-based and line 1 is the header, so the first
/// candidate lives on line 2.
pub const LINE_OFFSET: usize = 2;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a roster from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – comma-delimited, header row with column names
/// * `.tsv` / `.tab` – same layout, tab-delimited
pub fn load_file(path: &Path) -> Result<Roster> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_delimited(path, b','),
        "tsv" | "tab" => load_delimited(path, b'\t'),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Delimited loader
// ---------------------------------------------------------------------------

fn load_delimited(path: &Path, delimiter: u8) -> Result<Roster> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let line = i + LINE_OFFSET;
        let record = result.with_context(|| format!("roster line {line}"))?;
        rows.push(RosterRow {
            line,
            cells: record.iter().map(|c| c.to_string()).collect(),
        });
    }

    let roster = Roster::from_table(columns, rows)
        .with_context(|| format!("reading {}", path.display()))?;

    log::info!(
        "loaded {} candidates ({} columns) from {}",
        roster.len(),
        roster.columns.len(),
        path.display()
    );
    Ok(roster)
}
