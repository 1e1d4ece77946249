use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::mock_transport::MockTransport;

// =============================================================
// Request builders
// =============================================================

#[test]
fn current_user_request_attaches_bearer() {
    let request = current_user_request("tok1");
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/api/auth/me");
    assert_eq!(request.bearer.as_deref(), Some("tok1"));
    assert!(request.body.is_none());
}

#[test]
fn login_request_posts_credentials_without_bearer() {
    let request = login_request(&Credentials { email: "a@upenn.edu".to_owned(), password: "pw".to_owned() });
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/api/auth/login");
    assert!(request.bearer.is_none());
    assert_eq!(request.body, Some(json!({ "email": "a@upenn.edu", "password": "pw" })));
}

#[test]
fn register_request_includes_subscription_flag() {
    let mut registration = Registration::new("Ada", "ada@upenn.edu", "pw");
    registration.subscribed = false;
    let request = register_request(&registration);
    assert_eq!(request.path, "/api/auth/register");
    assert_eq!(
        request.body,
        Some(json!({ "name": "Ada", "email": "ada@upenn.edu", "password": "pw", "subscribed": false }))
    );
}

#[test]
fn update_profile_request_is_authenticated_put() {
    let update = ProfileUpdate { subscribed: Some(true), ..ProfileUpdate::default() };
    let request = update_profile_request("tok1", &update);
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/api/users/profile");
    assert_eq!(request.bearer.as_deref(), Some("tok1"));
    assert_eq!(request.body, Some(json!({ "subscribed": true })));
}

// =============================================================
// Error message extraction
// =============================================================

#[test]
fn error_message_prefers_server_message() {
    assert_eq!(error_message(r#"{"message":"Invalid credentials"}"#, LOGIN_FAILED), "Invalid credentials");
}

#[test]
fn error_message_falls_back_on_missing_blank_or_non_json() {
    assert_eq!(error_message("{}", LOGIN_FAILED), "Failed to login");
    assert_eq!(error_message(r#"{"message":"  "}"#, LOGIN_FAILED), "Failed to login");
    assert_eq!(error_message("<html>502</html>", REGISTER_FAILED), "Failed to register");
}

#[test]
fn validation_error_message_joins_field_errors() {
    let body = r#"{"message":"Validation failed","errors":[{"msg":"Bio is required"},{"msg":"Bio too short"}]}"#;
    assert_eq!(
        validation_error_message(body, CREATE_AUTHOR_PROFILE_FAILED),
        "Validation failed: Bio is required. Bio too short"
    );
}

#[test]
fn validation_error_message_without_errors_is_plain_message() {
    assert_eq!(validation_error_message("{}", CREATE_AUTHOR_PROFILE_FAILED), "Failed to create author profile");
}

// =============================================================
// Transport-driven helpers
// =============================================================

#[test]
fn send_json_maps_transport_failure_to_network_error_with_fallback() {
    let transport = MockTransport::new();
    transport.fail(Method::Get, AUTHOR_PROFILE_PATH, "connection refused");
    let err = block_on(fetch_author_profile(&transport, "tok1")).unwrap_err();
    assert!(matches!(err, AuthError::Network { .. }));
    assert_eq!(err.to_string(), FETCH_AUTHOR_PROFILE_FAILED);
}

#[test]
fn send_json_rejects_non_success_status() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, AUTHOR_PROFILE_PATH, 404, json!({ "message": "Author profile not found" }));
    let err = block_on(fetch_author_profile(&transport, "tok1")).unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Author profile not found");
}

#[test]
fn send_json_reports_undecodable_success_body() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, AUTHOR_PROFILE_PATH, 200, json!({ "bio": 5 }));
    let err = block_on(fetch_author_profile(&transport, "tok1")).unwrap_err();
    assert!(matches!(err, AuthError::InvalidResponse { .. }));
}

#[test]
fn create_author_profile_returns_created_profile() {
    let transport = MockTransport::new();
    transport.respond(Method::Post, AUTHOR_PROFILE_PATH, 201, json!({ "_id": "a1", "bio": "Econ major" }));
    let draft = AuthorProfileDraft { bio: "Econ major".to_owned(), profile_image: None };
    let profile = block_on(create_author_profile(&transport, "tok1", &draft)).unwrap();
    assert_eq!(profile.id, "a1");
    assert_eq!(profile.bio, "Econ major");
    let sent = transport.sent();
    assert_eq!(sent[0].bearer.as_deref(), Some("tok1"));
    assert_eq!(sent[0].body, Some(json!({ "bio": "Econ major" })));
}

#[test]
fn create_author_profile_surfaces_validation_errors() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Post,
        AUTHOR_PROFILE_PATH,
        400,
        json!({ "message": "Invalid profile", "errors": [{ "msg": "Bio is required" }] }),
    );
    let draft = AuthorProfileDraft { bio: String::new(), profile_image: None };
    let err = block_on(create_author_profile(&transport, "tok1", &draft)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid profile: Bio is required");
}

// =============================================================
// Articles
// =============================================================

#[test]
fn article_requests_are_public_gets() {
    assert_eq!(articles_request().path, "/api/articles");
    assert_eq!(article_request("dining-halls").path, "/api/articles/dining-halls");
    assert_eq!(public_author_request("ada@upenn.edu").path, "/api/authors/profile/ada@upenn.edu");
    assert_eq!(
        author_articles_request("ada@upenn.edu").path,
        "/api/articles?author=ada@upenn.edu&approved=true"
    );
    assert!(article_request("x").bearer.is_none());
}

#[test]
fn fetch_articles_sorts_newest_first() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Get,
        ARTICLES_PATH,
        200,
        json!([
            { "slug": "older", "createdAt": "2024-01-01T00:00:00Z" },
            { "slug": "newer", "createdAt": "2024-02-01T00:00:00Z" }
        ]),
    );
    let articles = block_on(fetch_articles(&transport)).unwrap();
    let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["newer", "older"]);
}

#[test]
fn fetch_articles_failure_reports_server_or_fallback_message() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, ARTICLES_PATH, 500, json!({ "message": "db down" }));
    let err = block_on(fetch_articles(&transport)).unwrap_err();
    assert_eq!(err.to_string(), "db down");

    transport.fail(Method::Get, ARTICLES_PATH, "offline");
    let err = block_on(fetch_articles(&transport)).unwrap_err();
    assert_eq!(err.to_string(), FETCH_ARTICLES_FAILED);
}

#[test]
fn fetch_article_distinguishes_missing_from_failed() {
    let transport = MockTransport::new();
    transport
        .respond(Method::Get, "/api/articles/gone", 404, json!({ "message": "nope" }))
        .respond(Method::Get, "/api/articles/broken", 500, json!({}));
    let missing = block_on(fetch_article(&transport, "gone")).unwrap_err();
    assert_eq!(missing.to_string(), ARTICLE_NOT_FOUND);
    let failed = block_on(fetch_article(&transport, "broken")).unwrap_err();
    assert_eq!(failed.to_string(), FETCH_ARTICLE_FAILED);
}

#[test]
fn fetch_public_author_reports_not_found() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/api/authors/profile/bob@upenn.edu", 404, json!({ "message": "no profile" }));
    let err = block_on(fetch_public_author(&transport, "bob@upenn.edu")).unwrap_err();
    assert_eq!(err.to_string(), AUTHOR_NOT_FOUND);
    assert_eq!(err.status(), Some(404));
}

#[test]
fn fetch_author_articles_degrades_to_empty_list() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/api/articles?author=ada@upenn.edu&approved=true", 500, json!({}));
    assert!(block_on(fetch_author_articles(&transport, "ada@upenn.edu")).is_empty());
}
