use std::sync::Arc;

use futures_util::future::try_join_all;
use ts_core::traits::SuggestionService;
use ts_core::types::StyleSuggestion;

use crate::error::SuggestError;

/// How many candidate rewordings callers ever see.
pub const MAX_TEXT_ALTERNATIVES: usize = 3;

/// Style variants requested per batch, for variety.
pub const DEFAULT_STYLE_VARIANTS: usize = 3;

/// Policy layer in front of a [`SuggestionService`].
///
/// Owns the fan-out for style batches and the cap on text alternatives;
/// holds no other state and never touches notes.
pub struct SuggestionGateway<P: SuggestionService> {
    service: Arc<P>,
}

impl<P: SuggestionService + 'static> SuggestionGateway<P>
where
    P::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    pub fn new(service: Arc<P>) -> Self {
        Self { service }
    }

    /// Request `count` style proposals for `text` in parallel, varying only
    /// a context discriminator so the service produces distinct answers.
    ///
    /// All-or-nothing: the batch fails if any single request fails.
    pub async fn style_suggestions(
        &self,
        text: &str,
        context: &str,
        count: usize,
    ) -> Result<Vec<StyleSuggestion>, SuggestError> {
        let requests = (1..=count).map(|n| {
            let variant_context = format!("{context} (suggestion {n})");
            let service = Arc::clone(&self.service);
            async move {
                service
                    .suggest_styles(text, Some(&variant_context))
                    .await
            }
        });

        let suggestions = try_join_all(requests)
            .await
            .map_err(SuggestError::upstream)?;
        tracing::debug!(count = suggestions.len(), "Style suggestion batch complete");
        Ok(suggestions)
    }

    /// Request alternative phrasings for `text`, keeping at most
    /// [`MAX_TEXT_ALTERNATIVES`] however many the service returns.
    pub async fn text_alternatives(
        &self,
        text: &str,
        context: &str,
    ) -> Result<Vec<String>, SuggestError> {
        let mut alternatives = self
            .service
            .suggest_alternatives(text, Some(context))
            .await
            .map_err(SuggestError::upstream)?;
        alternatives.truncate(MAX_TEXT_ALTERNATIVES);
        Ok(alternatives)
    }
}
