//! Elasticsearch wire types and error definitions.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while talking to Elasticsearch.
#[derive(Debug, Error)]
pub enum EsError {
    /// `ES_URL` did not parse as a URL.
    #[error("invalid Elasticsearch URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// Connection, TLS or timeout failure from the HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Document serialization failure while assembling a bulk body.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The API key was not a valid header value.
    #[error("invalid API key: {0}")]
    InvalidApiKey(reqwest::header::InvalidHeaderValue),

    /// The server answered with a non-success status; body attached verbatim.
    #[error("{operation} failed with HTTP {status}: {body}")]
    UnexpectedStatus {
        operation: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// A bulk request succeeded at the HTTP level but rejected items.
    #[error("bulk request rejected {failed} of {total} document(s)")]
    BulkItemsFailed { failed: usize, total: usize },
}

/// Result type for Elasticsearch operations.
pub type EsResult<T> = Result<T, EsError>;

/// Subset of the cluster root response (`GET /`).
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterInfo {
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub version: Option<ClusterVersion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterVersion {
    #[serde(default)]
    pub number: Option<String>,
}

/// Subset of the `_bulk` response needed to detect item failures.
#[derive(Debug, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<BulkItem>,
}

#[derive(Debug, Deserialize)]
pub struct BulkItem {
    #[serde(default)]
    pub create: Option<BulkItemStatus>,
}

#[derive(Debug, Deserialize)]
pub struct BulkItemStatus {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub error: Option<BulkItemError>,
}

#[derive(Debug, Deserialize)]
pub struct BulkItemError {
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub caused_by: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_response_parses_item_errors() {
        let raw = r#"{
            "took": 3,
            "errors": true,
            "items": [
                {"create": {"_index": "metrics-mq-demo", "status": 201}},
                {"create": {
                    "_index": "metrics-mq-demo",
                    "status": 400,
                    "error": {
                        "type": "mapper_parsing_exception",
                        "reason": "failed to parse field [@timestamp]"
                    }
                }}
            ]
        }"#;
        let response: BulkResponse = serde_json::from_str(raw).unwrap();
        assert!(response.errors);
        assert_eq!(response.items.len(), 2);

        let failed = response.items[1].create.as_ref().unwrap();
        assert_eq!(failed.status, 400);
        assert_eq!(
            failed.error.as_ref().unwrap().r#type.as_deref(),
            Some("mapper_parsing_exception")
        );
    }

    #[test]
    fn test_cluster_info_tolerates_missing_fields() {
        let info: ClusterInfo = serde_json::from_str("{}").unwrap();
        assert!(info.cluster_name.is_none());
        assert!(info.version.is_none());
    }

    #[test]
    fn test_error_display() {
        let err = EsError::BulkItemsFailed {
            failed: 2,
            total: 100,
        };
        assert_eq!(err.to_string(), "bulk request rejected 2 of 100 document(s)");
    }
}
