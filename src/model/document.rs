//! The Elasticsearch document emitted for each queue sample.
//!
//! Field layout mirrors what Metricbeat's Prometheus collector would produce
//! when scraping an IBM MQ exporter, so the documents drop straight into
//! standard metrics dashboards.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::QueueConfig;
use crate::generator::state::QueueSample;

/// Cluster label stamped on every document.
pub const CLUSTER_NAME: &str = "PAYMENTS_CLUSTER";

/// One synthetic metrics document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsDocument {
    #[serde(rename = "@timestamp")]
    pub timestamp: String,
    pub metricset: Metricset,
    pub service: ServiceInfo,
    pub prometheus: Prometheus,
    pub host: HostInfo,
    pub event: EventInfo,
    pub agent: AgentInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metricset {
    pub name: String,
    pub module: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    #[serde(rename = "type")]
    pub service_type: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prometheus {
    pub labels: QueueLabels,
    pub metrics: QueueMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueLabels {
    pub qmgr: String,
    pub queue: String,
    pub cluster: String,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueMetrics {
    pub ibmmq_queue_depth: i64,
    pub ibmmq_queue_max_depth: i64,
    pub ibmmq_queue_input_count: i64,
    pub ibmmq_queue_output_count: i64,
    pub ibmmq_queue_input_rate: i64,
    pub ibmmq_queue_output_rate: i64,
    pub ibmmq_queue_oldest_message_age: i64,
    pub ibmmq_queue_utilisation_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    pub name: String,
    pub hostname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInfo {
    pub dataset: String,
    pub module: String,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentInfo {
    #[serde(rename = "type")]
    pub agent_type: String,
    pub version: String,
}

impl MetricsDocument {
    /// Assemble a document from a queue definition and a computed sample.
    pub fn new(queue: &QueueConfig, sample: &QueueSample, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            metricset: Metricset {
                name: "collector".to_string(),
                module: "prometheus".to_string(),
            },
            service: ServiceInfo {
                service_type: "prometheus".to_string(),
                address: "mqserver01:9157".to_string(),
            },
            prometheus: Prometheus {
                labels: QueueLabels {
                    qmgr: queue.qmgr.clone(),
                    queue: queue.name.clone(),
                    cluster: CLUSTER_NAME.to_string(),
                    priority: queue.priority.to_string(),
                },
                metrics: QueueMetrics {
                    ibmmq_queue_depth: sample.depth,
                    ibmmq_queue_max_depth: queue.max_depth,
                    ibmmq_queue_input_count: sample.input_count,
                    ibmmq_queue_output_count: sample.output_count,
                    ibmmq_queue_input_rate: sample.input_rate,
                    ibmmq_queue_output_rate: sample.output_rate,
                    ibmmq_queue_oldest_message_age: sample.oldest_message_age,
                    ibmmq_queue_utilisation_pct: sample.utilisation_pct,
                },
            },
            host: HostInfo {
                name: "mqprod01.bank.local".to_string(),
                hostname: "mqprod01".to_string(),
            },
            event: EventInfo {
                dataset: "prometheus.collector".to_string(),
                module: "prometheus".to_string(),
                kind: "metric".to_string(),
            },
            agent: AgentInfo {
                agent_type: "metricbeat".to_string(),
                version: "8.11.0".to_string(),
            },
        }
    }
}
