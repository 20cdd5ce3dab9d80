//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! generator. Queue topology types derive Serde traits so a custom topology
//! can be deserialized from a TOML file; connection settings come from the
//! environment (see `loader.rs`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root configuration for the generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Elasticsearch connection settings.
    pub elasticsearch: EsConfig,

    /// Which mode to run when no subcommand is given.
    pub mode: Mode,

    /// Historical backfill settings.
    pub backfill: BackfillConfig,

    /// Continuous emission settings.
    pub continuous: ContinuousConfig,

    /// Queue topology to generate metrics for.
    pub queues: Vec<QueueConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            elasticsearch: EsConfig::default(),
            mode: Mode::Backfill,
            backfill: BackfillConfig::default(),
            continuous: ContinuousConfig::default(),
            queues: default_topology(),
        }
    }
}

/// Elasticsearch connection settings.
#[derive(Debug, Clone)]
pub struct EsConfig {
    /// Base URL (e.g., "https://demo.es.europe-west2.gcp.elastic-cloud.com").
    pub url: String,

    /// API key sent as `Authorization: ApiKey <key>`.
    pub api_key: String,

    /// Target index (or data stream) name.
    pub index_name: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for EsConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            index_name: "metrics-mq-demo".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Run mode selected via `MODE` or a subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Generate a historical window of documents in one pass.
    Backfill,
    /// Emit documents at a fixed interval until interrupted.
    Continuous,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backfill" => Ok(Mode::Backfill),
            "continuous" => Ok(Mode::Continuous),
            other => Err(format!(
                "unknown mode '{}' (expected 'backfill' or 'continuous')",
                other
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Backfill => write!(f, "backfill"),
            Mode::Continuous => write!(f, "continuous"),
        }
    }
}

/// Historical backfill settings.
#[derive(Debug, Clone)]
pub struct BackfillConfig {
    /// Days of history to generate, ending now.
    pub days: u32,

    /// Sample interval in minutes.
    pub interval_minutes: u32,

    /// Documents per bulk request.
    pub batch_size: usize,
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            days: 90,
            interval_minutes: 1,
            batch_size: 100,
        }
    }
}

/// Continuous emission settings.
#[derive(Debug, Clone)]
pub struct ContinuousConfig {
    /// Scenario name applied to every sample (e.g., "normal", "queue_full").
    pub scenario: String,

    /// Seconds between samples.
    pub interval_seconds: u64,
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            scenario: "normal".to_string(),
            interval_seconds: 60,
        }
    }
}

/// One queue to fabricate metrics for.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueueConfig {
    /// Queue name (e.g., "PAYMENT.REQUEST.IN").
    pub name: String,

    /// Owning queue manager.
    pub qmgr: String,

    /// Maximum queue depth (capacity).
    pub max_depth: i64,

    /// Inclusive depth range under normal load, `[min, max]`.
    pub normal_depth_range: (i64, i64),

    /// Inclusive enqueue-rate range under normal load, `[min, max]`.
    pub normal_rate_range: (i64, i64),

    /// Severity tier used for the `priority` label.
    pub priority: Priority,
}

/// Severity tier attached to each queue's documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Critical => write!(f, "critical"),
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Wrapper for deserializing a topology file (`[[queues]]` tables).
#[derive(Debug, Clone, Deserialize)]
pub struct QueueTopology {
    pub queues: Vec<QueueConfig>,
}

/// The built-in topology: a bank payments system on one queue manager.
pub fn default_topology() -> Vec<QueueConfig> {
    vec![
        QueueConfig {
            name: "PAYMENT.REQUEST.IN".to_string(),
            qmgr: "QMPAYMENTS01".to_string(),
            max_depth: 5000,
            normal_depth_range: (100, 500),
            normal_rate_range: (50, 100),
            priority: Priority::Critical,
        },
        QueueConfig {
            name: "PAYMENT.RESPONSE.OUT".to_string(),
            qmgr: "QMPAYMENTS01".to_string(),
            max_depth: 5000,
            normal_depth_range: (80, 400),
            normal_rate_range: (40, 90),
            priority: Priority::Critical,
        },
        QueueConfig {
            name: "SWIFT.MT.OUTBOUND".to_string(),
            qmgr: "QMPAYMENTS01".to_string(),
            max_depth: 3000,
            normal_depth_range: (50, 300),
            normal_rate_range: (20, 60),
            priority: Priority::High,
        },
        QueueConfig {
            name: "PAYMENT.ERROR.DLQ".to_string(),
            qmgr: "QMPAYMENTS01".to_string(),
            max_depth: 1000,
            normal_depth_range: (0, 50),
            normal_rate_range: (1, 10),
            priority: Priority::Medium,
        },
        QueueConfig {
            name: "ISO20022.TRANSFORM.IN".to_string(),
            qmgr: "QMPAYMENTS01".to_string(),
            max_depth: 2000,
            normal_depth_range: (100, 600),
            normal_rate_range: (30, 80),
            priority: Priority::High,
        },
    ]
}
