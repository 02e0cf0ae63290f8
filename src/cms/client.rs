/// Low-level client for the hosted document store API
///
/// Reads go through the filter-query endpoint
/// (`GET /v{version}/data/query/{dataset}?query=...`), writes through the
/// mutation endpoint (`POST /v{version}/data/mutate/{dataset}`). Query
/// parameters are passed as `$name=<json literal>` pairs. Failures surface
/// to the caller as a single error with no retry; the store is assumed
/// reliable and errors are user-facing.
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::CmsConfig;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct CmsClient {
    config: CmsConfig,
    http: Client,
}

/// Envelope around every query response
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Debug, Serialize)]
struct MutateRequest {
    mutations: Vec<serde_json::Value>,
}

/// Response from the mutation endpoint with `returnDocuments=true`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutateResponse {
    pub transaction_id: String,
    #[serde(default)]
    pub results: Vec<MutateResult>,
}

#[derive(Debug, Deserialize)]
pub struct MutateResult {
    pub id: String,
    #[serde(default)]
    pub document: Option<serde_json::Value>,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn base_url(&self) -> String {
        match &self.config.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io", self.config.project_id),
        }
    }

    /// Run a filter query and deserialize its `result` field
    pub async fn query<T>(&self, groq: &str, params: &[(&str, serde_json::Value)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut url = format!(
            "{}/v{}/data/query/{}?query={}",
            self.base_url(),
            self.config.api_version,
            self.config.dataset,
            urlencoding::encode(groq),
        );
        for (name, value) in params {
            url.push_str(&format!(
                "&%24{}={}",
                name,
                urlencoding::encode(&value.to_string())
            ));
        }

        debug!(
            "Executing store query (first 200 chars): {}",
            &groq[..groq.len().min(200)]
        );

        let mut request = self.http.get(&url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!("Store query request failed: {}", e);
            AppError::Cms(format!("query request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Store query returned an error");
            return Err(AppError::Cms(format!("query failed ({}): {}", status, body)));
        }

        let envelope: QueryResponse<T> = response.json().await.map_err(|e| {
            error!("Failed to decode store query response: {}", e);
            AppError::Cms(format!("query response decode failed: {}", e))
        })?;

        Ok(envelope.result)
    }

    /// Apply mutations and return the created/updated documents
    pub async fn mutate(&self, mutations: Vec<serde_json::Value>) -> Result<MutateResponse> {
        let token = self.config.token.as_ref().ok_or_else(|| {
            AppError::Cms("write token not configured; cannot mutate documents".to_string())
        })?;

        let url = format!(
            "{}/v{}/data/mutate/{}?returnDocuments=true",
            self.base_url(),
            self.config.api_version,
            self.config.dataset,
        );

        debug!(mutation_count = mutations.len(), "Applying store mutations");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&MutateRequest { mutations })
            .send()
            .await
            .map_err(|e| {
                error!("Store mutation request failed: {}", e);
                AppError::Cms(format!("mutation request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Store mutation returned an error");
            return Err(AppError::Cms(format!(
                "mutation failed ({}): {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            error!("Failed to decode store mutation response: {}", e);
            AppError::Cms(format!("mutation response decode failed: {}", e))
        })
    }

    /// Cheap connectivity probe used by the health endpoint
    pub async fn health_check(&self) -> Result<()> {
        self.query::<u64>(r#"count(*[_type == "post"])"#, &[])
            .await
            .map(|_| ())
    }
}
