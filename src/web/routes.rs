//! HTTP server – JSON API + embedded map page.
//!
//! Endpoints:
//!   GET /             → map page HTML
//!   GET /api/health   → liveness probe
//!   GET /api/options  → distinct filter values from the dataset
//!   GET /api/pendants → filtered records as JSON
//!   GET /api/markers  → filtered records as map markers, plus the legend
//!   GET /api/export   → filtered records as CSV or JSONL (`?format=`)
//!
//! Every data endpoint re-reads the dataset file, so edits to it show up on
//! the next request without a restart. They all accept the same filter
//! parameters: `century=<number>` plus the comma-separated lists `shapes=`,
//! `materials=`, `regions=`, `sizes=`, `functions=` and `preservation=`.

use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::data::export;
use crate::data::filter::{self, Criteria};
use crate::data::loader;
use crate::data::model::Pendant;
use crate::data::options;
use crate::web::colors::CenturyColors;
use crate::web::html::PENDANT_MAP_HTML;
use crate::web::markers::{self, LegendEntry, Marker};

// ── Shared state ────────────────────────────────────────────────────────────

type AppState = Arc<Config>;

// ── Entry point ─────────────────────────────────────────────────────────────

/// Bind the listen socket and serve until the task is cancelled.
pub async fn serve(config: Arc<Config>) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("Listening on http://{addr}");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Build the application router.
pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(map_page))
        .route("/api/health", get(health))
        .route("/api/options", get(filter_options))
        .route("/api/pendants", get(list_pendants))
        .route("/api/markers", get(list_markers))
        .route("/api/export", get(export_pendants))
        .layer(CorsLayer::permissive())
        .with_state(config)
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Load the dataset, or return 500 with the error message.
macro_rules! load_data {
    ($cfg:expr) => {
        match loader::load_file(&$cfg.data_path) {
            Ok(records) => records,
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": format!("{e:#}")})),
                )
                    .into_response();
            }
        }
    };
}

// ── Filter parameters ───────────────────────────────────────────────────────

/// Query parameters shared by every data endpoint.
#[derive(Debug, Default, Deserialize)]
struct FilterParams {
    century: Option<u32>,
    shapes: Option<String>,
    materials: Option<String>,
    regions: Option<String>,
    sizes: Option<String>,
    functions: Option<String>,
    preservation: Option<String>,
}

impl FilterParams {
    fn into_criteria(self) -> Criteria {
        Criteria {
            century: self.century,
            shapes: split_list(self.shapes.as_deref()),
            materials: split_list(self.materials.as_deref()),
            regions: split_list(self.regions.as_deref()),
            sizes: split_list(self.sizes.as_deref()),
            functions: split_list(self.functions.as_deref()),
            preservation_statuses: split_list(self.preservation.as_deref()),
        }
    }
}

/// Split a comma-separated parameter into a criteria set. Blank items are
/// dropped; an absent or all-blank parameter leaves the field unconstrained.
fn split_list(raw: Option<&str>) -> Option<BTreeSet<String>> {
    let raw = raw?;
    let set: BTreeSet<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    if set.is_empty() {
        None
    } else {
        Some(set)
    }
}

// ── Handlers ────────────────────────────────────────────────────────────────

async fn map_page() -> Html<&'static str> {
    Html(PENDANT_MAP_HTML)
}

// GET /api/health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

// GET /api/options
async fn filter_options(State(cfg): State<AppState>) -> impl IntoResponse {
    let records = load_data!(cfg);
    match options::extract(&records) {
        Ok(opts) => Json(opts).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

// GET /api/pendants
#[derive(Serialize)]
struct PendantsResponse {
    count: usize,
    pendants: Vec<Pendant>,
}

async fn list_pendants(
    State(cfg): State<AppState>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    let records = load_data!(cfg);
    let criteria = params.into_criteria();
    let matched: Vec<Pendant> = filter::apply(&records, &criteria)
        .into_iter()
        .cloned()
        .collect();

    Json(PendantsResponse {
        count: matched.len(),
        pendants: matched,
    })
    .into_response()
}

// GET /api/markers
#[derive(Serialize)]
struct MarkersResponse {
    count: usize,
    markers: Vec<Marker>,
    legend: Vec<LegendEntry>,
}

async fn list_markers(
    State(cfg): State<AppState>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    let records = load_data!(cfg);

    // Colours come from the full dataset, not the filtered subset, so each
    // century keeps its colour while filters change.
    let opts = match options::extract(&records) {
        Ok(opts) => opts,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response();
        }
    };
    let colors = CenturyColors::new(&opts.centuries);

    let criteria = params.into_criteria();
    let matched = filter::apply(&records, &criteria);
    let legend = markers::build_legend(&colors);
    let markers = markers::build_markers(&matched, &colors);

    Json(MarkersResponse {
        count: markers.len(),
        markers,
        legend,
    })
    .into_response()
}

// GET /api/export
#[derive(Deserialize)]
struct ExportParams {
    format: Option<String>, // "csv" or "jsonl", default "csv"
}

async fn export_pendants(
    State(cfg): State<AppState>,
    Query(params): Query<FilterParams>,
    Query(p): Query<ExportParams>,
) -> impl IntoResponse {
    let records = load_data!(cfg);
    let criteria = params.into_criteria();
    let matched = filter::apply(&records, &criteria);
    let mut buf = Vec::new();

    let (content_type, result) = match p.format.as_deref() {
        Some("jsonl") => (
            "application/x-ndjson",
            export::write_jsonl(&matched, &mut buf),
        ),
        _ => ("text/csv", export::write_csv(&matched, &mut buf)),
    };

    match result {
        Ok(_) => ([(axum::http::header::CONTENT_TYPE, content_type)], buf).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": format!("{e:#}")})),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_basic() {
        let set = split_list(Some("cross,disc")).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("cross"));
        assert!(set.contains("disc"));
    }

    #[test]
    fn test_split_list_trims_and_drops_blanks() {
        let set = split_list(Some(" cross , ,disc,")).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("cross"));
    }

    #[test]
    fn test_split_list_absent_or_blank_is_unconstrained() {
        assert!(split_list(None).is_none());
        assert!(split_list(Some("")).is_none());
        assert!(split_list(Some(" , ,")).is_none());
    }

    #[test]
    fn test_params_map_to_criteria() {
        let params = FilterParams {
            century: Some(13),
            shapes: Some("cross,heart".to_string()),
            preservation: Some("intact".to_string()),
            ..Default::default()
        };
        let criteria = params.into_criteria();

        assert_eq!(criteria.century, Some(13));
        assert_eq!(criteria.shapes.as_ref().map(|s| s.len()), Some(2));
        assert!(criteria
            .preservation_statuses
            .as_ref()
            .is_some_and(|s| s.contains("intact")));
        assert!(criteria.materials.is_none());
        assert!(criteria.regions.is_none());
    }
}
