//! Synthetic IBM MQ queue-metrics generator for Elasticsearch demos.

pub mod cli;
pub mod config;
pub mod es;
pub mod generator;
pub mod lifecycle;
pub mod model;
pub mod runner;

pub use config::GeneratorConfig;
pub use es::EsClient;
pub use generator::MetricsGenerator;
pub use lifecycle::Shutdown;
