//! Tests for JobService::apply_for_job.

use khademni::{
    error::{client::CANNOT_CONNECT_MESSAGE, ErrorKind},
    model::auth::Role,
    service::JobService,
};
use khademni_test_utils::prelude::*;

/// Tests applying to a job as a worker.
///
/// Expected: Ok, POST with an empty JSON object sent once
#[tokio::test]
async fn applies_for_job() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::Worker)
        .with_apply_endpoint(3, 1)
        .build()
        .await?;

    test.job_service().apply_for_job(3).await?;

    test.assert_mocks();

    Ok(())
}

/// Tests two applications in flight at once.
///
/// Requests are independent; both reach the server and both succeed.
///
/// Expected: Ok for both, endpoint hit twice
#[tokio::test]
async fn concurrent_applications_are_independent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::Worker)
        .with_apply_endpoint(3, 2)
        .build()
        .await?;
    let jobs = test.job_service();

    let (first, second) = tokio::join!(jobs.apply_for_job(3), jobs.apply_for_job(3));

    assert!(first.is_ok());
    assert!(second.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Tests applying twice when the server refuses duplicates.
///
/// Expected: Err carrying the server's message
#[tokio::test]
async fn surfaces_duplicate_application() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::Worker)
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/jobs/3/apply")
                .with_status(400)
                .with_body(r#"{"message":"You already applied to this job"}"#)
                .create()
        })
        .build()
        .await?;

    let err = test.job_service().apply_for_job(3).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.message, "You already applied to this job");

    Ok(())
}

/// Tests applying against an unreachable server.
///
/// Expected: Err with status 0 and the connection message
#[tokio::test]
async fn reports_unreachable_server() -> Result<(), TestError> {
    let test = TestBuilder::new().with_session(Role::Worker).build().await?;

    let result = JobService::new(test.unreachable_client())
        .apply_for_job(3)
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.status, 0);
    assert_eq!(err.message, CANNOT_CONNECT_MESSAGE);

    Ok(())
}
