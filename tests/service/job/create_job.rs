//! Tests for JobService::create_job.
//!
//! Blank titles and descriptions are rejected before anything is sent; everything else
//! is the server's call.

use khademni::{
    api::ApiClient,
    error::{client::CANNOT_CONNECT_MESSAGE, ErrorKind},
    model::{
        auth::Role,
        job::{CreateJobDto, JobStatus},
    },
    service::{
        job::{DESCRIPTION_REQUIRED_MESSAGE, TITLE_REQUIRED_MESSAGE},
        JobService,
    },
    session::SessionStore,
};
use khademni_test_utils::{constant::TEST_TOKEN, prelude::*};
use mockito::Matcher;
use serde_json::json;

/// Tests posting a job.
///
/// Expected: Ok with the job as stored by the server
#[tokio::test]
async fn returns_created_job() -> Result<(), TestError> {
    let created = job_factory::mock_job(9);
    let test = TestBuilder::new()
        .with_session(Role::Employer)
        .with_post_job_endpoint(created.clone(), 1)
        .build()
        .await?;

    let result = test
        .job_service()
        .create_job(&job_factory::mock_create_job(9))
        .await?;

    assert_eq!(result, created);
    test.assert_mocks();

    Ok(())
}

/// Tests the body sent for a new job.
///
/// Expected: Ok, body carries title, description and the lowercase status
#[tokio::test]
async fn sends_job_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::Employer)
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/jobs")
                .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
                .match_body(Matcher::Json(json!({
                    "title": "Painter",
                    "description": "Paint two rooms",
                    "status": "open",
                })))
                .with_status(201)
                .with_body(r#"{"id":3,"title":"Painter","description":"Paint two rooms","status":"open"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let job = CreateJobDto {
        title: "Painter".to_string(),
        description: "Paint two rooms".to_string(),
        status: JobStatus::Open,
    };
    let created = test.job_service().create_job(&job).await?;

    assert_eq!(created.id, 3);
    assert_eq!(created.employer_id, None);
    test.assert_mocks();

    Ok(())
}

/// Tests that an empty title never reaches the server.
///
/// Expected: Err with a validation error, no request recorded
#[tokio::test]
async fn rejects_empty_title_without_request() -> Result<(), TestError> {
    let transport = RecordingTransport::responding(201, "");
    let jobs = JobService::new(ApiClient::new(
        "http://api.test",
        transport.clone(),
        SessionStore::in_memory(),
    ));

    let job = CreateJobDto {
        title: String::new(),
        description: "x".to_string(),
        status: JobStatus::Open,
    };
    let err = jobs.create_job(&job).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.status, 0);
    assert_eq!(err.message, TITLE_REQUIRED_MESSAGE);
    assert_eq!(transport.request_count(), 0);

    Ok(())
}

/// Tests that a whitespace-only description never reaches the server.
///
/// Expected: Err with a validation error, no request recorded
#[tokio::test]
async fn rejects_blank_description_without_request() -> Result<(), TestError> {
    let transport = RecordingTransport::responding(201, "");
    let jobs = JobService::new(ApiClient::new(
        "http://api.test",
        transport.clone(),
        SessionStore::in_memory(),
    ));

    let job = CreateJobDto {
        title: "Gardener".to_string(),
        description: "   ".to_string(),
        status: JobStatus::Open,
    };
    let err = jobs.create_job(&job).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, DESCRIPTION_REQUIRED_MESSAGE);
    assert_eq!(transport.request_count(), 0);

    Ok(())
}

/// Tests a job the server rejects.
///
/// Expected: Err carrying the server's validation message
#[tokio::test]
async fn surfaces_server_rejection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::Employer)
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/jobs")
                .with_status(422)
                .with_body(r#"{"message":"Title is too long"}"#)
                .create()
        })
        .build()
        .await?;

    let err = test
        .job_service()
        .create_job(&job_factory::mock_create_job(1))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.status, 422);
    assert_eq!(err.message, "Title is too long");

    Ok(())
}

/// Tests posting against an unreachable server.
///
/// Expected: Err with status 0 and the connection message
#[tokio::test]
async fn reports_unreachable_server() -> Result<(), TestError> {
    let test = TestBuilder::new().with_session(Role::Employer).build().await?;

    let result = JobService::new(test.unreachable_client())
        .create_job(&job_factory::mock_create_job(1))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.status, 0);
    assert_eq!(err.message, CANNOT_CONNECT_MESSAGE);

    Ok(())
}
