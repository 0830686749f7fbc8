use serde_json::json;
use semleaf::app::{App, Shell};
use semleaf::error::Error;
use semleaf::pages::{HomePage, PhraseFormPage, SearchResultsPage};
use semleaf::routes::Route;
use semleaf::Semleaf;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_expired_session_sends_app_to_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authenticated": true,
            "email": "user@example.com"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/phrases"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = Semleaf::new(&mock_server.uri());
    let mut app = App::new(Route::Home);
    assert_eq!(
        app.start(&client).await,
        &Shell::Authenticated {
            email: "user@example.com".to_string()
        }
    );

    let mut home = HomePage::new();
    let result = home.load(&client, client.options.list_limit).await;
    assert!(app.handle(result).is_err());
    assert_eq!(app.shell(), &Shell::Login);
    assert_eq!(app.route().to_path(), "/login");
}

#[tokio::test]
async fn test_edit_form_updates_and_navigates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/phrases/edit-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "edit-id",
            "phrase": "original",
            "meanings": ["first"],
            "tags": [],
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/phrases/edit-id"))
        .and(body_json(json!({
            "phrase": "updated",
            "meanings": ["first"],
            "tags": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "edit-id",
            "phrase": "updated",
            "meanings": ["first"],
            "tags": [],
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-03T00:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Semleaf::new(&mock_server.uri());
    let mut page = PhraseFormPage::for_route(&Route::parse("/phrases/edit-id/edit")).unwrap();
    page.load(&client).await.unwrap();
    page.form_mut().phrase = "updated".to_string();

    let route = page.submit(&client).await.unwrap().unwrap();
    assert_eq!(route.to_path(), "/phrases/edit-id");
}

#[tokio::test]
async fn test_text_search_page_hits_text_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search/text"))
        .and(query_param("q", "test query"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Semleaf::new(&mock_server.uri());
    let route = Route::parse("/search?q=test%20query&mode=text");
    let mut page = SearchResultsPage::for_route(&route).unwrap();
    page.load(&client).await.unwrap();
    assert_eq!(page.status_message(), Some("No results found."));
}

#[tokio::test]
async fn test_unreachable_backend_shows_transport_error() {
    // Nothing listens on port 1
    let client = Semleaf::new("http://127.0.0.1:1");
    let mut app = App::new(Route::Home);

    let mut home = HomePage::new();
    let result = home.load(&client, 20).await;
    let err = app.handle(result).unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert_eq!(err.status(), None);
    let message = home.state().error().unwrap();
    assert!(!message.is_empty());
    assert_eq!(message, err.to_string());
    assert_eq!(app.shell(), &Shell::Checking);
    assert_eq!(app.route(), &Route::Home);
}
