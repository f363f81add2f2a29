//! Data layer: core types, loading, option extraction, filtering, and export.
//!
//! Architecture:
//! ```text
//!  .json / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file, derive centuries → Vec<Pendant>
//!   └──────────┘
//!        │
//!        ├────────────────────┐
//!        ▼                    ▼
//!   ┌──────────┐        ┌──────────┐
//!   │ options   │        │  filter   │
//!   └──────────┘        └──────────┘
//!   distinct values      records matching
//!   for the filter UI    all active criteria
//! ```

pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod options;
pub mod filter;
