//! Emission run modes.
//!
//! # Data Flow
//! ```text
//! backfill.rs:
//!     time window → timeline scenario → generator → batched _bulk writes
//!
//! continuous.rs:
//!     interval tick → pinned scenario → generator → one _bulk write
//!         (loop exits on shutdown signal)
//! ```

pub mod backfill;
pub mod continuous;
