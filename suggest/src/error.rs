use thiserror::Error;

/// The whole suggestion batch failed.
///
/// Fan-out is all-or-nothing: one failing upstream call fails the batch, so
/// callers never see a partial suggestion list. Retryable from the caller's
/// point of view; no note or session state is touched.
#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("Suggestion service failed: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SuggestError {
    pub(crate) fn upstream(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Upstream(err.into())
    }
}
