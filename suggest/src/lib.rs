//! # Suggestion Gateway
//!
//! Fan-out and truncation policy in front of the AI suggestion service,
//! plus the HTTP implementation of that service and a mock for tests.

pub mod error;
pub mod gateway;
pub mod http;
pub mod mock;

pub use error::SuggestError;
pub use gateway::{SuggestionGateway, DEFAULT_STYLE_VARIANTS, MAX_TEXT_ALTERNATIVES};
pub use http::{HttpSuggestionService, SuggestApiError};
pub use mock::MockSuggestionService;
