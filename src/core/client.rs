// api client - single best-effort POST to the interaction service

use crate::Error;
use crate::core::DrugQuery;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://drug-interaction-api.onrender.com";

/// One medication's resolved fact sheet. Only ever produced by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugRecord {
    pub name: String,
    pub info: String,
    pub side_effects: String,
    pub warnings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precautions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_safe: Option<bool>,
}

/// The service's verdict. `safe` is authoritative; the client never
/// re-derives it from the per-drug flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionResult {
    pub drugs: Vec<DrugRecord>,
    pub safe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_response: Option<String>,
}

// error body on non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Pull a human-readable message out of an error body, falling back to a
/// generic one when the body is unparseable or carries no detail.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.detail)
        .unwrap_or_else(|| "Failed to check drug interactions".to_string())
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one query and interpret the response. No retry, no timeout,
    /// no cancellation - one attempt per call.
    pub async fn check_interactions(&self, query: &DrugQuery) -> Result<InteractionResult, Error> {
        let response = self
            .client
            .post(format!("{}/check-interactions", self.base_url))
            .json(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api(error_message(&body)));
        }

        // a malformed success body is a deserialization failure, not an
        // http failure
        let result: InteractionResult = serde_json::from_str(&body)?;
        Ok(result)
    }
}
