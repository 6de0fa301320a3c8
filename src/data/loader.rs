use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use arrow::util::display::{ArrayFormatter, FormatOptions};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{Record, Table};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a tabular source from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` / `.pq` – schema field order defines the columns
/// * anything else      – comma-separated text with a header row
pub fn load_table(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        _ => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_table(&text).with_context(|| format!("parsing {}", path.display()))
        }
    }
}

/// Read the benchmark log as UTF-8 text.
pub fn read_log(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// Parse comma-separated text: first line is the header, every further
/// non-blank line is one [`Record`].
///
/// Empty input gives an empty table.  Rows shorter than the header are
/// padded with empty cells; longer rows are cut to the header width.
pub fn parse_table(text: &str) -> Result<Table> {
    if text.trim().is_empty() {
        return Ok(Table::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = unique_headers(
        reader
            .headers()
            .context("reading CSV headers")?
            .iter()
            .map(|h| h.trim().to_string()),
    );

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        records.push(Record::from_cells(&headers, row.iter()));
    }

    Ok(Table { headers, records })
}

/// Rename repeated column names to `name_1`, `name_2`, … so every column
/// can be addressed by name.
fn unique_headers(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut headers = Vec::new();
    for name in names {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}_{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file as text cells.  Every Arrow type is rendered through
/// Arrow's display formatter; nulls become empty cells.
fn load_parquet(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let headers = unique_headers(builder.schema().fields().iter().map(|f| f.name().clone()));
    let reader = builder.build().context("building parquet reader")?;

    let options = FormatOptions::default();
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let formatters = batch
            .columns()
            .iter()
            .map(|col| ArrayFormatter::try_new(col.as_ref(), &options))
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("formatting parquet columns")?;

        for row in 0..batch.num_rows() {
            let cells: Vec<String> = formatters
                .iter()
                .map(|f| f.value(row).to_string())
                .collect();
            records.push(Record::from_cells(&headers, cells.iter().map(String::as_str)));
        }
    }

    Ok(Table { headers, records })
}
