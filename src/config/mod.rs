//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables (ES_URL, ES_API_KEY, MODE, ...)
//!     → loader.rs (lookup & parse)
//!     → GeneratorConfig (defaults filled in)
//!
//! optional topology file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → replaces the built-in queue set
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - CLI flags override environment values, which override defaults
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{
    BackfillConfig, ContinuousConfig, EsConfig, GeneratorConfig, Mode, Priority, QueueConfig,
};
