use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

use hrconsole_core::config::ConsoleConfig;
use hrconsole_core::models::{RecordKind, Resource};
use hrconsole_core::services::DecisionPayload;
use hrconsole_core::RecordId;

use super::types::ApiError;

/// JSON client for the HR back end.
///
/// Collections live at `{base}/{kind path}`; decisions are posted to
/// `{base}/{kind path}/{id}/approve` or `/reject`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &ConsoleConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::unknown(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::validation(format!("Invalid API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::validation("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Fetches the full collection of `R`.
    ///
    /// Accepts a bare JSON array, an object keyed by the kind's envelope key
    /// (`{"branches": [...]}`) or a `{"data": [...]}` wrapper.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let url = self.endpoint(&[R::KIND.path()])?;
        tracing::debug!(kind = %R::KIND, url = %url, "Fetching collection");
        let response = self
            .authorized(self.client.get(url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let response = ensure_success(response).await?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
        let items = extract_items(body, R::KIND)?;
        serde_json::from_value(items)
            .map_err(|e| ApiError::unknown(format!("Failed to parse {}: {}", R::KIND, e)))
    }

    pub async fn decide<V: Serialize>(
        &self,
        kind: RecordKind,
        id: &RecordId,
        payload: &DecisionPayload<V>,
    ) -> Result<(), ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&[kind.path(), id.as_str(), payload.decision.action()])?;
        tracing::debug!(kind = %kind, request_id = %id, url = %url, "Posting decision");
        let response = self
            .authorized(self.client.post(url))
            .json(&DecisionBody {
                comment: payload.comment.as_deref(),
                revised_value: payload.revised_value.as_ref(),
            })
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        ensure_success(response).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct DecisionBody<'a, V> {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    revised_value: Option<&'a V>,
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        tracing::warn!("API token missing or rejected; set HRCONSOLE_API_TOKEN");
    }
    let body = response.text().await.unwrap_or_default();
    let error = serde_json::from_str::<ApiError>(&body).unwrap_or_else(|_| {
        let reason = status.canonical_reason().unwrap_or("Request failed");
        if body.trim().is_empty() {
            ApiError::request_failed(reason)
        } else {
            ApiError::request_failed(format!("{}: {}", reason, body.trim()))
        }
    });
    Err(error.with_status(status.as_u16()))
}

fn extract_items(body: Value, kind: RecordKind) -> Result<Value, ApiError> {
    match body {
        Value::Array(_) => Ok(body),
        Value::Object(mut map) => map
            .remove(kind.envelope_key())
            .or_else(|| map.remove("data"))
            .filter(Value::is_array)
            .ok_or_else(|| {
                ApiError::unknown(format!(
                    "Response has no `{}` or `data` list",
                    kind.envelope_key()
                ))
            }),
        _ => Err(ApiError::unknown("Response is not a list")),
    }
}
