//! End-to-end tests: the session client against a live server.

mod helpers;

use std::sync::Arc;

use chrono::{Duration, Utc};
use reqwest::Method;

use netadmin_client::{
    ClientError, HttpAuthApi, MemoryTokenStore, Route, SessionClient, SessionState, TokenStore,
};
use netadmin_entity::user::UserRole;

async fn connect(app: &helpers::TestApp, store: Arc<MemoryTokenStore>) -> SessionClient {
    let base_url = app.spawn().await;
    let api = HttpAuthApi::new(&base_url).unwrap();
    SessionClient::new(Arc::new(api), store)
}

#[tokio::test]
async fn test_login_persists_token_and_reaches_admin_routes() {
    let app = helpers::TestApp::new();
    app.create_test_user("admin@example.com", "secret123", UserRole::Admin)
        .await;
    let store = Arc::new(MemoryTokenStore::new());
    let client = connect(&app, store.clone()).await;

    let principal = client.login("admin@example.com", "secret123").await.unwrap();

    assert_eq!(principal.role, UserRole::Admin);
    assert_eq!(client.route().await, Route::Dashboard);
    assert_eq!(
        store.load().unwrap().as_deref(),
        client.state().await.token()
    );

    let users = client.users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "admin@example.com");
}

#[tokio::test]
async fn test_wrong_password_leaves_session_untouched() {
    let app = helpers::TestApp::new();
    app.create_test_user("admin@example.com", "secret123", UserRole::Admin)
        .await;
    let store = Arc::new(MemoryTokenStore::new());
    let client = connect(&app, store.clone()).await;

    let err = client.login("admin@example.com", "nope").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidCredentials));

    let err = client.login("ghost@example.com", "secret123").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidCredentials));

    assert_eq!(client.state().await, SessionState::Unauthenticated);
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn test_forbidden_keeps_the_session() {
    let app = helpers::TestApp::new();
    app.create_test_user("viewer@example.com", "secret123", UserRole::User)
        .await;
    let client = connect(&app, Arc::new(MemoryTokenStore::new())).await;
    client.login("viewer@example.com", "secret123").await.unwrap();

    let request = client
        .authorized(Method::POST, "/api/users")
        .await
        .unwrap()
        .json(serde_json::json!({
            "username": "Mallory",
            "email": "mallory@example.com",
            "password": "secret123",
        }));
    let err = client.send(request).await.unwrap_err();

    assert!(matches!(err, ClientError::Forbidden));
    assert!(client.state().await.is_authenticated());
    assert!(client.access_points().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_restore_accepts_valid_token_and_rejects_expired_one() {
    let app = helpers::TestApp::new();
    let user = app
        .create_test_user("viewer@example.com", "secret123", UserRole::User)
        .await;

    let valid = app.token_for(&user.principal());
    let client = connect(&app, Arc::new(MemoryTokenStore::with_token(valid))).await;
    match client.restore().await {
        SessionState::Authenticated { principal, .. } => {
            assert_eq!(principal, user.principal());
        }
        other => panic!("expected authenticated, got {other:?}"),
    }

    let expired = app
        .encoder
        .issue_at(&user.principal(), Utc::now() - Duration::hours(25))
        .unwrap()
        .token;
    let store = Arc::new(MemoryTokenStore::with_token(expired));
    let client = connect(&app, store.clone()).await;

    assert!(matches!(
        client.restore().await,
        SessionState::Unauthenticated
    ));
    assert_eq!(client.route().await, Route::Login);
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn test_401_for_another_token_keeps_session() {
    let app = helpers::TestApp::new();
    let user = app
        .create_test_user("viewer@example.com", "secret123", UserRole::User)
        .await;
    let store = Arc::new(MemoryTokenStore::with_token(app.token_for(&user.principal())));
    let client = connect(&app, store.clone()).await;
    assert!(client.restore().await.is_authenticated());

    let request = client
        .authorized(Method::GET, "/api/access-points")
        .await
        .unwrap();
    let forged = netadmin_client::AuthorizedRequest {
        token: format!("{}x", request.token),
        ..request
    };
    let err = client.send(forged).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
    assert!(client.state().await.is_authenticated());

    client.logout().await;
    assert!(matches!(
        client.access_points().await,
        Err(ClientError::Unauthenticated)
    ));
    assert_eq!(client.navigate(Route::Users).await, Route::Login);
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn test_held_token_rejected_by_server_signs_out() {
    let app = helpers::TestApp::new();
    let user = app
        .create_test_user("viewer@example.com", "secret123", UserRole::User)
        .await;

    // Valid for roughly two more seconds.
    let expiring = app
        .encoder
        .issue_at(
            &user.principal(),
            Utc::now() - Duration::hours(24) + Duration::seconds(2),
        )
        .unwrap()
        .token;
    let store = Arc::new(MemoryTokenStore::with_token(expiring));
    let client = connect(&app, store.clone()).await;
    assert!(client.restore().await.is_authenticated());

    tokio::time::sleep(std::time::Duration::from_secs(3)).await;

    let err = client.access_points().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
    assert_eq!(client.state().await, SessionState::Unauthenticated);
    assert_eq!(client.route().await, Route::Login);
    assert_eq!(store.load().unwrap(), None);
}
