//! Tests for error normalization over real HTTP responses.

use khademni::{
    api::ApiRequest,
    error::{
        client::{CANNOT_CONNECT_MESSAGE, FORBIDDEN_MESSAGE, NOT_FOUND_MESSAGE, UNAUTHORIZED_MESSAGE},
        ErrorKind,
    },
};
use khademni_test_utils::prelude::*;

/// Expect a JSON object's message field to be surfaced for a server error
#[tokio::test]
async fn uses_server_message_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/jobs")
                .with_status(500)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"Database is down"}"#)
                .create()
        })
        .build()
        .await?;

    let result = test.client().request_empty(ApiRequest::get("/api/jobs")).await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "Database is down");
    test.assert_mocks();

    Ok(())
}

/// Expect a plain text body to be used verbatim
#[tokio::test]
async fn uses_plain_text_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/auth/signup")
                .with_status(400)
                .with_body("Username already taken")
                .create()
        })
        .build()
        .await?;

    let result = test
        .client()
        .request_empty(ApiRequest::post("/api/auth/signup"))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.status, 400);
    assert_eq!(err.message, "Username already taken");

    Ok(())
}

/// Expect the generic message naming the status when the body is empty
#[tokio::test]
async fn falls_back_to_status_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| server.mock("GET", "/api/jobs").with_status(502).create())
        .build()
        .await?;

    let err = test
        .client()
        .request_empty(ApiRequest::get("/api/jobs"))
        .await
        .unwrap_err();

    assert_eq!(err.message, "Request failed with status 502");

    Ok(())
}

/// Expect 401, 403 and 404 to override whatever the body says
#[tokio::test]
async fn fixed_messages_override_body() -> Result<(), TestError> {
    let cases = [
        (401, ErrorKind::Auth, UNAUTHORIZED_MESSAGE),
        (403, ErrorKind::Auth, FORBIDDEN_MESSAGE),
        (404, ErrorKind::NotFound, NOT_FOUND_MESSAGE),
    ];

    for (status, kind, message) in cases {
        let test = TestBuilder::new()
            .with_mock_endpoint(move |server| {
                server
                    .mock("GET", "/api/jobs")
                    .with_status(status)
                    .with_body(r#"{"message":"server said something else"}"#)
                    .create()
            })
            .build()
            .await?;

        let err = test
            .client()
            .request_empty(ApiRequest::get("/api/jobs"))
            .await
            .unwrap_err();

        assert_eq!(err.status, status as u16);
        assert_eq!(err.kind, kind);
        assert_eq!(err.message, message);
    }

    Ok(())
}

/// Expect an unreachable server to produce status 0 and the connection message
#[tokio::test]
async fn reports_unreachable_server() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let err = test
        .unreachable_client()
        .request_empty(ApiRequest::get("/api/jobs"))
        .await
        .unwrap_err();

    assert_eq!(err.status, 0);
    assert_eq!(err.kind, ErrorKind::Transport);
    assert_eq!(err.message, CANNOT_CONNECT_MESSAGE);

    Ok(())
}
