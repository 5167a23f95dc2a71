use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_core::traits::SuggestionService;
use ts_core::types::StyleSuggestion;

#[derive(Error, Debug)]
pub enum SuggestApiError {
    #[error("Suggestion API error: {0}")]
    Api(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct StyleRequest {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RewriteRequest {
    note_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RewriteResponse {
    suggestions: Vec<String>,
}

/// HTTP client for the suggestion service.
///
/// Two endpoints: `POST /v1/suggest-styles` answering with a single style
/// record, and `POST /v1/suggest-text` answering with a list of rewordings.
pub struct HttpSuggestionService {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpSuggestionService {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self::with_client(base_url, api_key, reqwest::Client::new())
    }

    /// Use a pre-built client, e.g. one carrying a request timeout.
    pub fn with_client(base_url: &str, api_key: Option<&str>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(ToString::to_string),
            client,
        }
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.post(url);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {key}"));
        }
        builder
    }
}

#[async_trait]
impl SuggestionService for HttpSuggestionService {
    type Error = SuggestApiError;

    async fn suggest_styles(
        &self,
        text: &str,
        context: Option<&str>,
    ) -> Result<StyleSuggestion, Self::Error> {
        let url = format!("{}/v1/suggest-styles", self.base_url);
        let request = StyleRequest {
            text: text.to_string(),
            context: context.map(ToString::to_string),
        };

        let response = self.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(SuggestApiError::Api(format!(
                "Status: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    async fn suggest_alternatives(
        &self,
        text: &str,
        context: Option<&str>,
    ) -> Result<Vec<String>, Self::Error> {
        let url = format!("{}/v1/suggest-text", self.base_url);
        let request = RewriteRequest {
            note_content: text.to_string(),
            context: context.map(ToString::to_string),
        };

        let response = self.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(SuggestApiError::Api(format!(
                "Status: {}",
                response.status()
            )));
        }

        let result: RewriteResponse = response.json().await?;
        Ok(result.suggestions)
    }
}
