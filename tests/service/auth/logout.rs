//! Tests for AuthService::logout.

use khademni::model::auth::Role;
use khademni_test_utils::prelude::*;
use mockito::Matcher;

/// Tests logging out of an active session.
///
/// Outside a browser there is no page to reload, so logout reports that the caller
/// has to route to the landing page itself.
///
/// Expected: session cleared, no redirect performed
#[tokio::test]
async fn clears_active_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_session(Role::Worker).build().await?;

    let redirected = test.auth_service().logout();

    assert!(!redirected);
    assert!(!test.session.is_authenticated());
    assert_eq!(test.session.role(), None);
    assert!(test.storage.is_empty());

    Ok(())
}

/// Tests logging out without a session.
///
/// Expected: no panic, still logged out
#[tokio::test]
async fn succeeds_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    test.auth_service().logout();

    assert!(!test.session.is_authenticated());

    Ok(())
}

/// Tests that logout is visible through every handle on the session.
///
/// Expected: the job service's next authorized call carries no token
#[tokio::test]
async fn clears_session_shared_with_services() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::Employer)
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/jobs/my-jobs")
                .match_header("authorization", Matcher::Regex(r"^Bearer\s*$".to_string()))
                .with_status(401)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let services = test.services();

    services.auth.logout();
    let result = services.jobs.list_my_jobs().await;

    assert_eq!(result.unwrap_err().status, 401);
    assert!(!services.session.is_authenticated());
    test.assert_mocks();

    Ok(())
}
