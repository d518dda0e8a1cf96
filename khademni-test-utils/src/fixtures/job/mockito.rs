//! Mock endpoints for the jobs API.
//!
//! Endpoints that require a session match the bearer header exactly, so a request
//! carrying the wrong token (or none) gets mockito's default 501 instead.

use khademni::model::job::{ApplicationDto, JobDto};
use mockito::Mock;

use crate::fixtures::job::JobFixtures;

impl<'a> JobFixtures<'a> {
    /// Create a mock `GET /api/jobs` endpoint returning `jobs`.
    pub fn create_jobs_endpoint(&mut self, jobs: Vec<JobDto>, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/api/jobs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&jobs).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /api/jobs/my-jobs` endpoint returning `jobs` to `token`.
    pub fn create_my_jobs_endpoint(
        &mut self,
        token: &str,
        jobs: Vec<JobDto>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/api/jobs/my-jobs")
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&jobs).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /api/jobs` endpoint answering with `created`.
    pub fn create_post_job_endpoint(
        &mut self,
        token: &str,
        created: JobDto,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/jobs")
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .match_header("content-type", "application/json")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&created).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `DELETE /api/jobs/{job_id}` endpoint with an empty 204 answer.
    pub fn create_delete_job_endpoint(
        &mut self,
        token: &str,
        job_id: i64,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("DELETE", format!("/api/jobs/{}", job_id).as_str())
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .with_status(204)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /api/jobs/{job_id}/apply` endpoint.
    pub fn create_apply_endpoint(&mut self, token: &str, job_id: i64, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", format!("/api/jobs/{}/apply", job_id).as_str())
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .match_body("{}")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Application submitted"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /api/jobs/{job_id}/applications` endpoint returning `applications`.
    pub fn create_applications_endpoint(
        &mut self,
        token: &str,
        job_id: i64,
        applications: Vec<ApplicationDto>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/api/jobs/{}/applications", job_id).as_str())
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&applications).unwrap())
            .expect(expected_requests)
            .create()
    }
}
