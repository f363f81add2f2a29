use std::collections::BTreeSet;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Pendant – one catalogued artifact
// ---------------------------------------------------------------------------

/// A single pendant record (one entry of the source collection).
///
/// The categorical attributes (`shape`, `material`, `region`, `size`,
/// `function`) are open-vocabulary strings: the valid value set is whatever
/// appears in the dataset, not a fixed enum, so new vocabulary needs no code
/// change.
///
/// `Pendant` deliberately does not implement `Deserialize`: `century` is
/// derived from `period` by the loader and never read from storage, so the
/// only way to obtain a record is through [`crate::data::loader`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pendant {
    /// Display name; not guaranteed unique.
    pub name: String,
    /// Find-spot latitude.
    pub lat: f64,
    /// Find-spot longitude.
    pub lon: f64,
    /// Free-text date range, e.g. "13th century (1201-1300)".
    pub period: String,
    /// Century derived from the first digit run in `period`'s first token.
    pub century: u32,
    /// Free-text provenance.
    pub origin: String,
    pub shape: String,
    pub material: String,
    pub region: String,
    pub size: String,
    pub function: String,
    /// Condition labels; a record may hold several, order irrelevant.
    pub preservation: BTreeSet<String>,
    pub description: String,
    pub collection_link: String,
}

// ---------------------------------------------------------------------------
// FilterOptions – distinct values for the filter UI
// ---------------------------------------------------------------------------

/// The distinct value sets across a record collection, used to populate the
/// filter controls. Every sequence is sorted ascending, byte-wise for
/// strings, so "Silver" sorts before "bronze".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub shapes: Vec<String>,
    pub materials: Vec<String>,
    pub regions: Vec<String>,
    pub sizes: Vec<String>,
    pub functions: Vec<String>,
    /// Union of all preservation labels across records.
    pub preservation_statuses: Vec<String>,
    pub centuries: Vec<u32>,
    pub min_century: u32,
    pub max_century: u32,
}
