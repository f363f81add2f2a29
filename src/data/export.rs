//! Export writers: CSV and JSONL streaming of filtered records.
//!
//! The CSV layout matches the loader's column schema, so an exported file can
//! be loaded straight back in.

use std::collections::BTreeSet;
use std::io::Write;

use anyhow::{Context, Result};

use crate::data::model::Pendant;

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

const CSV_COLUMNS: [&str; 13] = [
    "name",
    "lat",
    "lon",
    "period",
    "origin",
    "shape",
    "material",
    "region",
    "size",
    "function",
    "preservation",
    "description",
    "collection_link",
];

/// Write the records as CSV (header + one row per record). Returns the
/// number of rows written.
pub fn write_csv<W: Write>(records: &[&Pendant], writer: &mut W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CSV_COLUMNS)
        .context("Failed to write CSV header")?;

    for p in records {
        csv_writer
            .write_record([
                p.name.clone(),
                p.lat.to_string(),
                p.lon.to_string(),
                p.period.clone(),
                p.origin.clone(),
                p.shape.clone(),
                p.material.clone(),
                p.region.clone(),
                p.size.clone(),
                p.function.clone(),
                join_labels(&p.preservation),
                p.description.clone(),
                p.collection_link.clone(),
            ])
            .with_context(|| format!("Failed to write CSV row for '{}'", p.name))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(records.len())
}

/// Join preservation labels into the loader's semicolon-separated cell form.
fn join_labels(labels: &BTreeSet<String>) -> String {
    labels.iter().cloned().collect::<Vec<_>>().join("; ")
}

// ---------------------------------------------------------------------------
// JSONL
// ---------------------------------------------------------------------------

/// Write the records as JSONL, one object per line (`century` included).
/// Returns the number of lines written.
pub fn write_jsonl<W: Write>(records: &[&Pendant], writer: &mut W) -> Result<usize> {
    for p in records {
        serde_json::to_writer(&mut *writer, p)
            .with_context(|| format!("Failed to write JSONL line for '{}'", p.name))?;
        writeln!(writer).context("Failed to write JSONL line break")?;
    }
    Ok(records.len())
}
