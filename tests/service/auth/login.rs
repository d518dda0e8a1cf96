//! Tests for AuthService::login.
//!
//! Verifies that accepted credentials end up in the session store, that rejected ones
//! leave it untouched, and that an unreachable server is reported as such.

use khademni::{
    error::{client::CANNOT_CONNECT_MESSAGE, ErrorKind},
    model::auth::{LoginDto, Role},
    navigation::{EMPLOYER_DASHBOARD_PATH, WORKER_DASHBOARD_PATH},
    service::AuthService,
    session::{SessionStorage, ROLE_KEY, TOKEN_KEY},
};
use khademni_test_utils::{constant::TEST_TOKEN, prelude::*};
use mockito::Matcher;
use serde_json::json;

/// Tests the worker login scenario end to end.
///
/// The server answers `{token: "abc", role: "worker"}`; afterwards the store reports
/// that token and role, and the session points at the worker dashboard.
///
/// Expected: Ok with a worker session stored
#[tokio::test]
async fn stores_worker_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/auth/login")
                .match_body(Matcher::Json(json!({"username": "w1", "password": "p"})))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"token":"abc","role":"worker"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let credentials = LoginDto {
        username: "w1".to_string(),
        password: "p".to_string(),
    };
    let session = test.auth_service().login(&credentials).await?;

    assert!(test.session.is_authenticated());
    assert_eq!(test.session.token().as_deref(), Some("abc"));
    assert_eq!(test.session.role(), Some(Role::Worker));
    assert_eq!(session.dashboard_path(), WORKER_DASHBOARD_PATH);
    assert_eq!(test.storage.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(test.storage.get(ROLE_KEY).as_deref(), Some("worker"));
    test.assert_mocks();

    Ok(())
}

/// Tests that the stored role is whatever the server returned.
///
/// Expected: Ok with an employer session pointing at the employer dashboard
#[tokio::test]
async fn stores_server_returned_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(Role::Employer, 1)
        .build()
        .await?;

    let session = test.auth_service().login(&auth_factory::mock_login()).await?;

    assert_eq!(session.role, Some(Role::Employer));
    assert_eq!(session.token.as_deref(), Some(TEST_TOKEN));
    assert_eq!(test.session.role(), Some(Role::Employer));
    assert_eq!(session.dashboard_path(), EMPLOYER_DASHBOARD_PATH);
    test.assert_mocks();

    Ok(())
}

/// Tests rejected credentials.
///
/// A 401 is reported with the fixed message and no session is written.
///
/// Expected: Err with an auth error, store still empty
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/auth/login")
                .with_status(401)
                .with_body("Bad credentials")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.auth_service().login(&auth_factory::mock_login()).await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Auth);
    assert_eq!(err.status, 401);
    assert!(!test.session.is_authenticated());
    assert!(test.storage.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests that a failed login keeps an existing session.
///
/// Expected: Err, previous session still stored
#[tokio::test]
async fn keeps_previous_session_on_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::Employer)
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/auth/login")
                .with_status(500)
                .with_body(r#"{"error":"Internal error"}"#)
                .create()
        })
        .build()
        .await?;

    let result = test.auth_service().login(&auth_factory::mock_login()).await;

    assert_eq!(result.unwrap_err().message, "Internal error");
    assert_eq!(test.session.token().as_deref(), Some(TEST_TOKEN));
    assert_eq!(test.session.role(), Some(Role::Employer));

    Ok(())
}

/// Tests an answer carrying a role this client doesn't know.
///
/// Expected: Err with a server error, nothing stored
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/auth/login")
                .with_status(200)
                .with_body(r#"{"token":"abc","role":"admin"}"#)
                .create()
        })
        .build()
        .await?;

    let result = test.auth_service().login(&auth_factory::mock_login()).await;

    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.status, 200);
    assert!(!test.session.is_authenticated());

    Ok(())
}

/// Tests an answer carrying an empty token.
///
/// The caller must never be told it is logged in while the store says otherwise.
///
/// Expected: Err with a server error, nothing stored
#[tokio::test]
async fn rejects_empty_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/auth/login")
                .with_status(200)
                .with_body(r#"{"token":"","role":"worker"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.auth_service().login(&auth_factory::mock_login()).await;

    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.status, 200);
    assert!(!test.session.is_authenticated());
    assert!(test.storage.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests that the returned session is the one the store holds.
///
/// Expected: Ok, returned session equal to the store's session
#[tokio::test]
async fn returned_session_matches_store() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(Role::Worker, 1)
        .build()
        .await?;

    let session = test.auth_service().login(&auth_factory::mock_login()).await?;

    assert!(session.is_authenticated());
    assert_eq!(session, test.session.session());
    test.assert_mocks();

    Ok(())
}

/// Tests login against an unreachable server.
///
/// Expected: Err with status 0 and the connection message
#[tokio::test]
async fn reports_unreachable_server() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let auth_service = AuthService::new(test.unreachable_client());
    let result = auth_service.login(&auth_factory::mock_login()).await;

    let err = result.unwrap_err();
    assert_eq!(err.status, 0);
    assert_eq!(err.message, CANNOT_CONNECT_MESSAGE);
    assert!(!test.session.is_authenticated());

    Ok(())
}
