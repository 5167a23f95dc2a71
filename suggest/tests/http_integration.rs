use std::sync::Arc;

use serde_json::json;
use suggest::{HttpSuggestionService, SuggestApiError, SuggestionGateway};
use ts_core::traits::SuggestionService;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn style_body() -> serde_json::Value {
    json!({
        "fontFamily": "Playfair Display, serif",
        "fontSize": "24px",
        "fontWeight": "700",
        "color": "#2D3748",
        "emphasis": "strong headline presence"
    })
}

#[tokio::test]
async fn test_suggest_styles_round_trip() {
    let mock_server = MockServer::start().await;
    let api_key = "test_key";
    let service = HttpSuggestionService::new(&mock_server.uri(), Some(api_key));

    Mock::given(method("POST"))
        .and(path("/v1/suggest-styles"))
        .and(header("Authorization", &format!("Bearer {}", api_key)))
        .and(body_partial_json(json!({
            "text": "Selected words",
            "context": "My Title (suggestion 1)"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(style_body()))
        .mount(&mock_server)
        .await;

    let suggestion = service
        .suggest_styles("Selected words", Some("My Title (suggestion 1)"))
        .await
        .unwrap();

    assert_eq!(suggestion.font_family, "Playfair Display, serif");
    assert_eq!(suggestion.font_size, "24px");
    assert_eq!(suggestion.emphasis, "strong headline presence");
}

#[tokio::test]
async fn test_suggest_alternatives_posts_note_content() {
    let mock_server = MockServer::start().await;
    let service = HttpSuggestionService::new(&mock_server.uri(), None);

    Mock::given(method("POST"))
        .and(path("/v1/suggest-text"))
        .and(body_partial_json(json!({
            "noteContent": "Rewrite me",
            "context": "General note context"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestions": ["Rewrite A", "Rewrite B"]
        })))
        .mount(&mock_server)
        .await;

    let alternatives = service
        .suggest_alternatives("Rewrite me", Some("General note context"))
        .await
        .unwrap();

    assert_eq!(alternatives, vec!["Rewrite A", "Rewrite B"]);
}

#[tokio::test]
async fn test_server_error_surfaces_as_api_error() {
    let mock_server = MockServer::start().await;
    let service = HttpSuggestionService::new(&mock_server.uri(), None);

    Mock::given(method("POST"))
        .and(path("/v1/suggest-styles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = service.suggest_styles("text", None).await;
    assert!(matches!(result, Err(SuggestApiError::Api(_))));
}

#[tokio::test]
async fn test_gateway_batch_issues_three_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/suggest-styles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(style_body()))
        .expect(3)
        .mount(&mock_server)
        .await;

    let service = Arc::new(HttpSuggestionService::new(&mock_server.uri(), None));
    let gateway = SuggestionGateway::new(service);

    let batch = gateway
        .style_suggestions("Selected words", "My Title", 3)
        .await
        .unwrap();
    assert_eq!(batch.len(), 3);
}

#[tokio::test]
async fn test_gateway_batch_fails_when_one_variant_fails() {
    let mock_server = MockServer::start().await;

    // Registration order matters: the failing variant is matched first.
    Mock::given(method("POST"))
        .and(path("/v1/suggest-styles"))
        .and(body_partial_json(json!({
            "context": "My Title (suggestion 2)"
        })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/suggest-styles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(style_body()))
        .mount(&mock_server)
        .await;

    let service = Arc::new(HttpSuggestionService::new(&mock_server.uri(), None));
    let gateway = SuggestionGateway::new(service);

    let result = gateway
        .style_suggestions("Selected words", "My Title", 3)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_gateway_truncates_alternatives_from_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/suggest-text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestions": ["a", "b", "c", "d", "e"]
        })))
        .mount(&mock_server)
        .await;

    let service = Arc::new(HttpSuggestionService::new(&mock_server.uri(), None));
    let gateway = SuggestionGateway::new(service);

    let alternatives = gateway
        .text_alternatives("Some text", "General note context")
        .await
        .unwrap();
    assert_eq!(alternatives, vec!["a", "b", "c"]);
}
