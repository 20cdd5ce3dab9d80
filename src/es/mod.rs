//! Elasticsearch integration subsystem.
//!
//! # Data Flow
//! ```text
//! provision:
//!     mapping.rs (fixed index body)
//!         → client.rs (single PUT /{index})
//!
//! emit:
//!     MetricsDocument batch
//!         → client.rs (NDJSON assembly, POST /_bulk)
//!         → types.rs (item-level error detection)
//! ```

pub mod client;
pub mod mapping;
pub mod types;

pub use client::EsClient;
pub use types::{EsError, EsResult};
