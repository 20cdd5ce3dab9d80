//! Elasticsearch HTTP client.
//!
//! # Responsibilities
//! - Authenticate every request with the configured API key
//! - Provision the demo index (PUT with the fixed mapping)
//! - Index documents through the `_bulk` API (NDJSON)
//! - Surface server errors with the response body attached
//!
//! # Design Decisions
//! - One request in flight at a time; no retry, no backoff. A failed batch
//!   is logged and dropped, matching the demo's operational contract
//! - Index-already-exists is an error for explicit provisioning, but
//!   `ensure_index` treats an existing index (or an auto-creating data
//!   stream) as ready

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

use crate::config::EsConfig;
use crate::es::mapping;
use crate::es::types::{BulkResponse, ClusterInfo, EsError, EsResult};
use crate::model::document::MetricsDocument;

/// Index-name prefixes that Elasticsearch treats as data streams, which
/// auto-create on first write.
const DATA_STREAM_PREFIXES: [&str; 3] = ["metrics-", "logs-", "traces-"];

/// Client wrapper around reqwest with the ApiKey header baked in.
#[derive(Clone, Debug)]
pub struct EsClient {
    http: reqwest::Client,
    base_url: String,
    index_name: String,
}

impl EsClient {
    /// Create a new client.
    pub fn new(config: &EsConfig) -> EsResult<Self> {
        let base_url = config.url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|source| EsError::InvalidUrl {
            url: config.url.clone(),
            source,
        })?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("ApiKey {}", config.api_key))
            .map_err(EsError::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            index_name: config.index_name.clone(),
        })
    }

    /// Target index name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Probe the cluster root endpoint and return its identity.
    pub async fn ping(&self) -> EsResult<ClusterInfo> {
        let response = self
            .http
            .get(format!("{}/", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error("cluster ping", response).await);
        }

        Ok(response.json().await?)
    }

    /// Check whether the target index exists (HEAD).
    pub async fn index_exists(&self) -> EsResult<bool> {
        let response = self
            .http
            .head(format!("{}/{}", self.base_url, self.index_name))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(Self::status_error("index existence check", response).await),
        }
    }

    /// Create the index with the demo mapping and lifecycle binding.
    ///
    /// No pre-existence check: a duplicate PUT surfaces the server's
    /// `resource_already_exists_exception` instead of silently succeeding.
    pub async fn create_index(&self) -> EsResult<()> {
        let response = self
            .http
            .put(format!("{}/{}", self.base_url, self.index_name))
            .header(CONTENT_TYPE, "application/json")
            .json(&mapping::index_body())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error("index creation", response).await);
        }

        tracing::info!(index = %self.index_name, "Index created");
        Ok(())
    }

    /// Make sure documents can be written to the target index.
    pub async fn ensure_index(&self) -> EsResult<()> {
        if self.index_exists().await? {
            tracing::info!(index = %self.index_name, "Index already exists");
            return Ok(());
        }

        if DATA_STREAM_PREFIXES
            .iter()
            .any(|p| self.index_name.starts_with(p))
        {
            tracing::info!(
                index = %self.index_name,
                "Data stream will auto-create on first write"
            );
            return Ok(());
        }

        self.create_index().await
    }

    /// Index a batch of documents through the `_bulk` API.
    pub async fn bulk(&self, documents: &[MetricsDocument]) -> EsResult<()> {
        if documents.is_empty() {
            return Ok(());
        }

        let body = build_bulk_body(&self.index_name, documents)?;
        let response = self
            .http
            .post(format!("{}/_bulk", self.base_url))
            .header(CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error("bulk index", response).await);
        }

        let result: BulkResponse = response.json().await?;
        if result.errors {
            let mut failed = 0;
            for item in &result.items {
                if let Some(status) = &item.create {
                    if let Some(error) = &status.error {
                        failed += 1;
                        tracing::error!(
                            status = status.status,
                            error_type = error.r#type.as_deref().unwrap_or("unknown"),
                            reason = error.reason.as_deref().unwrap_or("unknown"),
                            caused_by = ?error.caused_by,
                            "Bulk item rejected"
                        );
                    }
                }
            }
            return Err(EsError::BulkItemsFailed {
                failed,
                total: documents.len(),
            });
        }

        Ok(())
    }

    async fn status_error(operation: &'static str, response: reqwest::Response) -> EsError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        EsError::UnexpectedStatus {
            operation,
            status,
            body,
        }
    }
}

/// Assemble an NDJSON `_bulk` body: one `create` action line per document,
/// followed by the document itself, with a trailing newline.
pub fn build_bulk_body(
    index: &str,
    documents: &[MetricsDocument],
) -> Result<String, serde_json::Error> {
    let mut body = String::new();
    for doc in documents {
        body.push_str(&serde_json::json!({"create": {"_index": index}}).to_string());
        body.push('\n');
        body.push_str(&serde_json::to_string(doc)?);
        body.push('\n');
    }
    Ok(body)
}
