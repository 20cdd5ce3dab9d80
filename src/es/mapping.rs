//! The demo index definition.
//!
//! One fixed mapping covering the fields the generator emits, plus settings
//! pinning shard/replica counts and binding the `metrics-30-days` lifecycle
//! policy.

use serde_json::{json, Value};

/// ILM policy attached to the demo index.
pub const LIFECYCLE_POLICY: &str = "metrics-30-days";

/// Request body for the index-creation PUT.
pub fn index_body() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1,
            "index.lifecycle.name": LIFECYCLE_POLICY
        },
        "mappings": {
            "properties": {
                "@timestamp": {"type": "date"},
                "prometheus": {
                    "properties": {
                        "labels": {
                            "properties": {
                                "qmgr": {"type": "keyword"},
                                "queue": {"type": "keyword"},
                                "cluster": {"type": "keyword"},
                                "priority": {"type": "keyword"}
                            }
                        },
                        "metrics": {
                            "properties": {
                                "ibmmq_queue_depth": {"type": "long"},
                                "ibmmq_queue_max_depth": {"type": "long"},
                                "ibmmq_queue_input_count": {"type": "long"},
                                "ibmmq_queue_output_count": {"type": "long"},
                                "ibmmq_queue_input_rate": {"type": "long"},
                                "ibmmq_queue_output_rate": {"type": "long"},
                                "ibmmq_queue_oldest_message_age": {"type": "long"},
                                "ibmmq_queue_utilisation_pct": {"type": "float"}
                            }
                        }
                    }
                },
                "host": {
                    "properties": {
                        "name": {"type": "keyword"},
                        "hostname": {"type": "keyword"}
                    }
                },
                "event": {
                    "properties": {
                        "dataset": {"type": "keyword"},
                        "module": {"type": "keyword"},
                        "kind": {"type": "keyword"}
                    }
                }
            }
        }
    })
}
