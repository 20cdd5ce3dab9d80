//! Document model for emitted metrics.

pub mod document;

pub use document::MetricsDocument;
