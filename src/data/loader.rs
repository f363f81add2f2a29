use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::error::DataError;
use super::model::Pendant;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the pendant collection from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – array of record objects (the canonical `data/pendants.json`)
/// * `.csv`  – one row per record; the `preservation` cell holds
///   semicolon-separated labels
///
/// Records come back in storage order – no filtering, no sorting, no
/// deduplication.  The file is re-read on every call.
pub fn load_file(path: &Path) -> Result<Vec<Pendant>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Century derivation
// ---------------------------------------------------------------------------

/// Derive the century from a free-text period description.
///
/// Takes the first whitespace-delimited token of `period` and parses its
/// first maximal run of decimal digits: `"13th century"` → 13,
/// `"14th century (1301-1400)"` → 14.  A first token without any digit
/// (`"early 13th century"`) is a [`DataError::MalformedPeriod`].
pub fn derive_century(period: &str) -> Result<u32, DataError> {
    let malformed = || DataError::MalformedPeriod {
        period: period.to_string(),
    };

    let token = period.split_whitespace().next().ok_or_else(malformed)?;
    let digits: String = token
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return Err(malformed());
    }
    digits.parse().map_err(|_| malformed())
}

// ---------------------------------------------------------------------------
// Raw storage records
// ---------------------------------------------------------------------------

/// A record as stored on disk.  `century` is absent by design: it is derived
/// from `period` on every load and never persisted.
#[derive(Debug, Deserialize)]
struct RawPendant {
    name: String,
    lat: f64,
    lon: f64,
    period: String,
    origin: String,
    shape: String,
    material: String,
    region: String,
    size: String,
    function: String,
    preservation: BTreeSet<String>,
    description: String,
    collection_link: String,
}

impl RawPendant {
    fn into_pendant(self) -> Result<Pendant, DataError> {
        let century = derive_century(&self.period)?;
        Ok(Pendant {
            name: self.name,
            lat: self.lat,
            lon: self.lon,
            period: self.period,
            century,
            origin: self.origin,
            shape: self.shape,
            material: self.material,
            region: self.region,
            size: self.size,
            function: self.function,
            preservation: self.preservation,
            description: self.description,
            collection_link: self.collection_link,
        })
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (the layout of `data/pendants.json`):
///
/// ```json
/// [
///   {
///     "name": "Reliquary cross pendant",
///     "lat": 50.08,
///     "lon": 14.43,
///     "period": "13th century (1201-1300)",
///     "origin": "Prague, Bohemia",
///     "shape": "cross",
///     "material": "silver",
///     "region": "Central Europe",
///     "size": "medium",
///     "function": "devotional",
///     "preservation": ["intact", "gilded"],
///     "description": "Silver-gilt cross with engraved saints.",
///     "collection_link": "https://example.org/collection/1"
///   }
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Pendant>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let raw: Vec<RawPendant> = serde_json::from_str(&text).context("parsing JSON")?;

    raw.into_iter()
        .enumerate()
        .map(|(i, rec)| {
            let name = rec.name.clone();
            rec.into_pendant()
                .with_context(|| format!("record {i} ('{name}')"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row.  Identical to [`RawPendant`] except that `preservation` is a
/// single cell of semicolon-separated labels: `"intact;gilded"`.
#[derive(Debug, Deserialize)]
struct CsvPendant {
    name: String,
    lat: f64,
    lon: f64,
    period: String,
    origin: String,
    shape: String,
    material: String,
    region: String,
    size: String,
    function: String,
    preservation: String,
    description: String,
    collection_link: String,
}

impl CsvPendant {
    fn into_raw(self) -> RawPendant {
        RawPendant {
            name: self.name,
            lat: self.lat,
            lon: self.lon,
            period: self.period,
            origin: self.origin,
            shape: self.shape,
            material: self.material,
            region: self.region,
            size: self.size,
            function: self.function,
            preservation: split_labels(&self.preservation),
            description: self.description,
            collection_link: self.collection_link,
        }
    }
}

/// CSV layout: header row with the same column names as the JSON fields.
fn load_csv(path: &Path) -> Result<Vec<Pendant>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let mut pendants = Vec::new();
    for (row_no, result) in reader.deserialize::<CsvPendant>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let name = row.name.clone();
        let pendant = row
            .into_raw()
            .into_pendant()
            .with_context(|| format!("CSV row {row_no} ('{name}')"))?;
        pendants.push(pendant);
    }
    Ok(pendants)
}

/// Split a semicolon-separated label cell into a set, dropping blanks:
/// `"intact; gilded"` → {"intact", "gilded"}.
fn split_labels(cell: &str) -> BTreeSet<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
