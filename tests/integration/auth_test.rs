//! Integration tests for the login flow and token gate.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use uuid::Uuid;

use netadmin_entity::Principal;
use netadmin_entity::user::UserRole;

#[tokio::test]
async fn test_admin_login_then_list_users() {
    let app = helpers::TestApp::new();
    let admin = app
        .create_test_user("admin@example.com", "secret123", UserRole::Admin)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "secret123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "admin");
    assert_eq!(response.body["principal"]["role"], "admin");
    assert!(response.body["expires_at"].is_string());
    let token = response.body["token"].as_str().unwrap().to_string();

    let whoami = app
        .request("GET", "/api/auth/whoami", None, Some(&token))
        .await;
    assert_eq!(whoami.status, StatusCode::OK);
    assert_eq!(whoami.body["principal"]["subject_id"], admin.id.to_string());
    assert_eq!(whoami.body["principal"]["email"], "admin@example.com");

    let users = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(users.status, StatusCode::OK);
    let users = users.body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_failures_share_one_shape() {
    let app = helpers::TestApp::new();
    app.create_test_user("admin@example.com", "secret123", UserRole::Admin)
        .await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "admin@example.com", "password": "nope" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "ghost@example.com", "password": "secret123" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.body["error"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_rejects_malformed_body() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "admin" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_empty_credentials_are_invalid_credentials() {
    let app = helpers::TestApp::new();
    app.create_test_user("admin@example.com", "secret123", UserRole::Admin)
        .await;

    for body in [
        serde_json::json!({ "email": "admin@example.com", "password": "" }),
        serde_json::json!({ "email": "", "password": "" }),
    ] {
        let response = app
            .request("POST", "/api/auth/login", Some(body), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "INVALID_CREDENTIALS");
    }
}

#[tokio::test]
async fn test_missing_bearer_is_unauthenticated_everywhere() {
    let app = helpers::TestApp::new();
    let id = Uuid::new_v4();

    let protected = [
        ("GET", "/api/auth/whoami".to_string()),
        ("GET", "/api/auth/me".to_string()),
        ("GET", "/api/users".to_string()),
        ("POST", "/api/users".to_string()),
        ("GET", format!("/api/users/{id}")),
        ("DELETE", format!("/api/users/{id}")),
        ("GET", "/api/access-points".to_string()),
        ("POST", "/api/access-points".to_string()),
        ("GET", format!("/api/access-points/{id}")),
        ("DELETE", format!("/api/access-points/{id}")),
    ];

    for (method, path) in &protected {
        let response = app.request(method, path, None, None).await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{method} {path} without a token"
        );
        assert_eq!(response.body["error"], "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_garbage_and_foreign_tokens_are_unauthenticated() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/auth/whoami", None, Some("not.a.jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/api/auth/whoami")
        .header(header::AUTHORIZATION, "Basic YWRtaW46c2VjcmV0")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let foreign_key = netadmin_auth::SigningKey::from_secret("some-other-deployment-secret-value");
    let foreign = netadmin_auth::JwtEncoder::new(&foreign_key, Duration::hours(1))
        .issue(&Principal {
            subject_id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
        })
        .unwrap();
    let response = app
        .request("GET", "/api/users", None, Some(&foreign.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthenticated() {
    let app = helpers::TestApp::new();
    let principal = Principal {
        subject_id: Uuid::new_v4(),
        email: "admin@example.com".to_string(),
        role: UserRole::Admin,
    };

    let issued_long_ago = Utc::now() - Duration::hours(25);
    let expired = app.encoder.issue_at(&principal, issued_long_ago).unwrap();

    let response = app
        .request("GET", "/api/auth/whoami", None, Some(&expired.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_deleted_account_token_valid_until_expiry() {
    let app = helpers::TestApp::new();
    app.create_test_user("admin@example.com", "secret123", UserRole::Admin)
        .await;
    let user = app
        .create_test_user("temp@example.com", "secret123", UserRole::User)
        .await;

    let admin_token = app.login("admin@example.com", "secret123").await;
    let user_token = app.login("temp@example.com", "secret123").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{}", user.id),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/auth/whoami", None, Some(&user_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
