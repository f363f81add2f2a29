use serde::Serialize;

use crate::data::model::Pendant;
use crate::web::colors::CenturyColors;

// ---------------------------------------------------------------------------
// Marker DTOs
// ---------------------------------------------------------------------------

/// One map marker, ready for the Leaflet frontend.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub century: u32,
    pub color: String,
    pub popup_html: String,
}

/// One legend row: century label and the marker colour it maps to.
#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Build markers for the given (already filtered) records.
pub fn build_markers(records: &[&Pendant], colors: &CenturyColors) -> Vec<Marker> {
    records
        .iter()
        .map(|p| Marker {
            lat: p.lat,
            lon: p.lon,
            name: p.name.clone(),
            century: p.century,
            color: colors.color_for(p.century).to_string(),
            popup_html: popup_html(p),
        })
        .collect()
}

/// Build the legend rows from the dataset-wide colour map.
pub fn build_legend(colors: &CenturyColors) -> Vec<LegendEntry> {
    colors
        .legend_entries()
        .into_iter()
        .map(|(label, color)| LegendEntry { label, color })
        .collect()
}

// ---------------------------------------------------------------------------
// Popup rendering
// ---------------------------------------------------------------------------

/// Render the popup card shown when a marker is clicked.
pub fn popup_html(p: &Pendant) -> String {
    format!(
        "\
<div style=\"width: 200px;\">
  <h4>{name}</h4>
  <p><strong>Period:</strong> {period}</p>
  <p><strong>Origin:</strong> {origin}</p>
  <p>{description}</p>
  <a href=\"{link}\" target=\"_blank\">View in Collection</a>
</div>",
        name = escape(&p.name),
        period = escape(&p.period),
        origin = escape(&p.origin),
        description = escape(&p.description),
        link = escape(&p.collection_link),
    )
}

/// Minimal HTML escaping for record text interpolated into popup markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
