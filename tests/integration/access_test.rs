//! Integration tests for role enforcement on the user and access point
//! resources.

mod helpers;

use axum::http::StatusCode;

use netadmin_entity::user::UserRole;

#[tokio::test]
async fn test_user_role_cannot_create_users() {
    let app = helpers::TestApp::new();
    app.create_test_user("operator@example.com", "secret123", UserRole::User)
        .await;
    let token = app.login("operator@example.com", "secret123").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "Mallory",
                "email": "mallory@example.com",
                "password": "secret123",
                "role": "admin",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");

    // Nothing was created.
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "mallory@example.com",
                "password": "secret123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_role_is_forbidden_from_every_admin_route() {
    let app = helpers::TestApp::new();
    let user = app
        .create_test_user("operator@example.com", "secret123", UserRole::User)
        .await;
    let token = app.login("operator@example.com", "secret123").await;

    for (method, path) in [
        ("GET", "/api/users".to_string()),
        ("GET", format!("/api/users/{}", user.id)),
        ("DELETE", format!("/api/users/{}", user.id)),
    ] {
        let response = app.request(method, &path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {path}");
    }

    let response = app
        .request(
            "POST",
            "/api/access-points",
            Some(serde_json::json!({ "name": "Lobby", "mac_address": "aa:bb:cc:dd:ee:ff" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_manages_users() {
    let app = helpers::TestApp::new();
    app.create_test_user("admin@example.com", "secret123", UserRole::Admin)
        .await;
    let token = app.login("admin@example.com", "secret123").await;

    let created = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "Ana",
                "email": "ana@example.com",
                "password": "secret123",
                "phone": "+55 11 99999-0000",
                "cpf": "123.456.789-09",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["role"], "user");
    assert!(created.body.get("password_hash").is_none());
    let id = created.body["id"].as_str().unwrap().to_string();

    // The new account can sign in with the password it was created with.
    let user_token = app.login("ana@example.com", "secret123").await;
    assert!(!user_token.is_empty());

    let duplicate = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "Ana again",
                "email": "ANA@example.com",
                "password": "secret123",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let weak = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "Bob",
                "email": "bob@example.com",
                "password": "123",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(weak.status, StatusCode::BAD_REQUEST);

    let fetched = app
        .request("GET", &format!("/api/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["email"], "ana@example.com");

    let deleted = app
        .request("DELETE", &format!("/api/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let missing = app
        .request("GET", &format!("/api/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_access_points_read_by_any_user_written_by_admin() {
    let app = helpers::TestApp::new();
    app.create_test_user("admin@example.com", "secret123", UserRole::Admin)
        .await;
    app.create_test_user("operator@example.com", "secret123", UserRole::User)
        .await;
    let admin = app.login("admin@example.com", "secret123").await;
    let operator = app.login("operator@example.com", "secret123").await;

    let created = app
        .request(
            "POST",
            "/api/access-points",
            Some(serde_json::json!({
                "name": "Lobby",
                "mac_address": "AA-BB-CC-DD-EE-FF",
                "location": "Ground floor",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["mac_address"], "aa:bb:cc:dd:ee:ff");
    assert_eq!(created.body["status"], "active");
    let id = created.body["id"].as_str().unwrap().to_string();

    let listed = app
        .request("GET", "/api/access-points", None, Some(&operator))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let fetched = app
        .request("GET", &format!("/api/access-points/{id}"), None, Some(&operator))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "Lobby");

    let duplicate = app
        .request(
            "POST",
            "/api/access-points",
            Some(serde_json::json!({ "name": "Copy", "mac_address": "aa:bb:cc:dd:ee:ff" })),
            Some(&admin),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let bad_mac = app
        .request(
            "POST",
            "/api/access-points",
            Some(serde_json::json!({ "name": "Bad", "mac_address": "not-a-mac" })),
            Some(&admin),
        )
        .await;
    assert_eq!(bad_mac.status, StatusCode::BAD_REQUEST);

    let forbidden = app
        .request("DELETE", &format!("/api/access-points/{id}"), None, Some(&operator))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let deleted = app
        .request("DELETE", &format!("/api/access-points/{id}"), None, Some(&admin))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
}
