use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use ts_core::traits::SuggestionService;
use ts_core::types::StyleSuggestion;

/// Canned suggestion service for tests and offline development.
///
/// Responses can be keyed by context; anything without a canned answer gets
/// a deterministic generated one. A failure needle makes matching requests
/// error, for exercising the all-or-nothing batch path.
pub struct MockSuggestionService {
    styles: Arc<RwLock<HashMap<String, StyleSuggestion>>>,
    alternatives: Arc<RwLock<Option<Vec<String>>>>,
    failing: Arc<RwLock<Option<String>>>,
}

impl MockSuggestionService {
    pub fn new() -> Self {
        Self {
            styles: Arc::new(RwLock::new(HashMap::new())),
            alternatives: Arc::new(RwLock::new(None)),
            failing: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn add_style_response(&self, context: &str, suggestion: StyleSuggestion) {
        let mut styles = self.styles.write().await;
        styles.insert(context.to_string(), suggestion);
    }

    pub async fn set_alternatives(&self, alternatives: Vec<String>) {
        *self.alternatives.write().await = Some(alternatives);
    }

    /// Fail any request whose context contains `needle`.
    pub async fn fail_when_context_contains(&self, needle: &str) {
        *self.failing.write().await = Some(needle.to_string());
    }

    async fn check_failure(&self, context: Option<&str>) -> Result<(), String> {
        if let Some(needle) = &*self.failing.read().await {
            if context.unwrap_or_default().contains(needle.as_str()) {
                return Err(format!("Mock upstream failure for context: {needle}"));
            }
        }
        Ok(())
    }
}

impl Default for MockSuggestionService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuggestionService for MockSuggestionService {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    async fn suggest_styles(
        &self,
        _text: &str,
        context: Option<&str>,
    ) -> Result<StyleSuggestion, Self::Error> {
        self.check_failure(context).await?;

        let styles = self.styles.read().await;
        if let Some(ctx) = context {
            if let Some(suggestion) = styles.get(ctx) {
                return Ok(suggestion.clone());
            }
        }

        Ok(StyleSuggestion {
            font_family: "Literata, serif".to_string(),
            font_size: "18px".to_string(),
            font_weight: "500".to_string(),
            color: "#1A202C".to_string(),
            emphasis: format!("Mock styling for: {}", context.unwrap_or("general text")),
        })
    }

    async fn suggest_alternatives(
        &self,
        text: &str,
        context: Option<&str>,
    ) -> Result<Vec<String>, Self::Error> {
        self.check_failure(context).await?;

        if let Some(alternatives) = &*self.alternatives.read().await {
            return Ok(alternatives.clone());
        }

        Ok((1..=3)
            .map(|i| format!("Mock alternative {i} for: {text}"))
            .collect())
    }
}
