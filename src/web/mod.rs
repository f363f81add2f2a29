//! Web layer: the axum router, marker building, marker colours, and the
//! embedded map page.

pub mod colors;
pub mod html;
pub mod markers;
pub mod routes;
