use std::future::Future;

use dioxus_logger::tracing;
use serde_json::json;

use crate::{
    api::{ApiClient, ApiRequest, DefaultTransport, Transport},
    error::ClientError,
    model::job::{ApplicationDto, CreateJobDto, JobDto},
};

const JOBS_ENDPOINT: &str = "/api/jobs";
const MY_JOBS_ENDPOINT: &str = "/api/jobs/my-jobs";

pub const TITLE_REQUIRED_MESSAGE: &str = "Job title is required.";
pub const DESCRIPTION_REQUIRED_MESSAGE: &str = "Job description is required.";

/// Result of a delete that went through its confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; no request was sent.
    Cancelled,
}

/// Job listing, posting, deletion and applications.
///
/// Role checks are left to the server: authorized calls forward whatever token the
/// session holds and surface the server's answer.
#[derive(Debug, Clone)]
pub struct JobService<T = DefaultTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> JobService<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// Lists every open job. Does not require a session.
    pub async fn list_jobs(&self) -> Result<Vec<JobDto>, ClientError> {
        tracing::info!("Fetching all open jobs");

        let jobs: Vec<JobDto> = self.client.request(ApiRequest::get(JOBS_ENDPOINT)).await?;

        tracing::info!("Retrieved {} open jobs", jobs.len());
        Ok(jobs)
    }

    /// Lists the jobs posted by the logged-in employer.
    pub async fn list_my_jobs(&self) -> Result<Vec<JobDto>, ClientError> {
        tracing::info!("Fetching jobs posted by the current employer");

        let jobs: Vec<JobDto> = self
            .client
            .request(ApiRequest::get(MY_JOBS_ENDPOINT).authorized())
            .await?;

        tracing::info!("Retrieved {} posted jobs", jobs.len());
        Ok(jobs)
    }

    /// Posts a new job.
    ///
    /// Title and description must be non-blank; otherwise a validation error is returned
    /// and nothing is sent. Any further validation is the server's.
    ///
    /// # Returns
    /// - `Ok(JobDto)` - The job as stored by the server
    /// - `Err(ClientError)` - Local validation failed, or the server rejected the job
    pub async fn create_job(&self, job: &CreateJobDto) -> Result<JobDto, ClientError> {
        if job.title.trim().is_empty() {
            return Err(ClientError::validation(TITLE_REQUIRED_MESSAGE));
        }
        if job.description.trim().is_empty() {
            return Err(ClientError::validation(DESCRIPTION_REQUIRED_MESSAGE));
        }

        tracing::info!(title = %job.title, "Creating job");

        let request = ApiRequest::post(JOBS_ENDPOINT).authorized().json(job)?;
        let created: JobDto = self.client.request(request).await?;

        tracing::info!(job_id = created.id, "Job created");
        Ok(created)
    }

    /// Deletes a job once `confirm` resolves to `true`.
    ///
    /// `confirm` is awaited before anything is sent, so a declined confirmation never
    /// reaches the server.
    ///
    /// # Arguments
    /// - `job_id` - ID of the job to delete
    /// - `confirm` - The user's answer to the confirmation prompt
    ///
    /// # Returns
    /// - `Ok(DeleteOutcome::Deleted)` - Server deleted the job
    /// - `Ok(DeleteOutcome::Cancelled)` - User declined, no request sent
    /// - `Err(ClientError)` - Server refused or could not be reached
    pub async fn delete_job(
        &self,
        job_id: i64,
        confirm: impl Future<Output = bool>,
    ) -> Result<DeleteOutcome, ClientError> {
        if !confirm.await {
            tracing::debug!(job_id, "Job deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        tracing::info!(job_id, "Deleting job");

        self.client
            .request_empty(ApiRequest::delete(format!("{}/{}", JOBS_ENDPOINT, job_id)).authorized())
            .await?;

        tracing::info!(job_id, "Job deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Applies the logged-in worker to a job.
    pub async fn apply_for_job(&self, job_id: i64) -> Result<(), ClientError> {
        tracing::info!(job_id, "Applying for job");

        let request = ApiRequest::post(format!("{}/{}/apply", JOBS_ENDPOINT, job_id))
            .authorized()
            .json(&json!({}))?;
        self.client.request_empty(request).await?;

        tracing::info!(job_id, "Application submitted");
        Ok(())
    }

    /// Lists applications to one of the employer's jobs.
    ///
    /// An empty list is a successful answer, not an error.
    pub async fn list_applications(&self, job_id: i64) -> Result<Vec<ApplicationDto>, ClientError> {
        tracing::info!(job_id, "Fetching applications");

        let applications: Vec<ApplicationDto> = self
            .client
            .request(ApiRequest::get(format!("{}/{}/applications", JOBS_ENDPOINT, job_id)).authorized())
            .await?;

        tracing::info!(job_id, "Retrieved {} applications", applications.len());
        Ok(applications)
    }
}
