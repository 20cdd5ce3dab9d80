//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (max_depth > 0, ranges ordered)
//! - Detect duplicate queue definitions
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the queue topology

use crate::config::schema::QueueConfig;
use std::collections::HashSet;
use thiserror::Error;

/// A single semantic problem found in the queue topology.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("topology defines no queues")]
    EmptyTopology,

    #[error("queue at position {0} has an empty name")]
    EmptyName(usize),

    #[error("queue '{queue}' has an empty qmgr")]
    EmptyQmgr { queue: String },

    #[error("queue '{queue}' has non-positive max_depth {max_depth}")]
    NonPositiveMaxDepth { queue: String, max_depth: i64 },

    #[error("queue '{queue}' has inverted depth range [{min}, {max}]")]
    InvertedDepthRange { queue: String, min: i64, max: i64 },

    #[error("queue '{queue}' has inverted rate range [{min}, {max}]")]
    InvertedRateRange { queue: String, min: i64, max: i64 },

    #[error("queue '{queue}' normal depth range exceeds max_depth {max_depth}")]
    DepthRangeExceedsMax { queue: String, max_depth: i64 },

    #[error("duplicate queue '{qmgr}:{queue}'")]
    Duplicate { qmgr: String, queue: String },
}

/// Validate a queue topology, collecting every problem found.
pub fn validate_topology(queues: &[QueueConfig]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    if queues.is_empty() {
        return Err(vec![ValidationError::EmptyTopology]);
    }

    for (i, q) in queues.iter().enumerate() {
        if q.name.is_empty() {
            errors.push(ValidationError::EmptyName(i));
            continue;
        }
        if q.qmgr.is_empty() {
            errors.push(ValidationError::EmptyQmgr {
                queue: q.name.clone(),
            });
        }
        if q.max_depth <= 0 {
            errors.push(ValidationError::NonPositiveMaxDepth {
                queue: q.name.clone(),
                max_depth: q.max_depth,
            });
        }
        let (dmin, dmax) = q.normal_depth_range;
        if dmin > dmax {
            errors.push(ValidationError::InvertedDepthRange {
                queue: q.name.clone(),
                min: dmin,
                max: dmax,
            });
        } else if dmax > q.max_depth {
            errors.push(ValidationError::DepthRangeExceedsMax {
                queue: q.name.clone(),
                max_depth: q.max_depth,
            });
        }
        let (rmin, rmax) = q.normal_rate_range;
        if rmin > rmax {
            errors.push(ValidationError::InvertedRateRange {
                queue: q.name.clone(),
                min: rmin,
                max: rmax,
            });
        }
        if !seen.insert((q.qmgr.clone(), q.name.clone())) {
            errors.push(ValidationError::Duplicate {
                qmgr: q.qmgr.clone(),
                queue: q.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
