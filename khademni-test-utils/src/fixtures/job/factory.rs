//! Factory functions for job postings and applications.

use khademni::model::job::{
    ApplicantDto, ApplicationDto, ApplicationStatus, CreateJobDto, JobDto, JobStatus,
};

/// Create an open job with test values.
///
/// # Arguments
/// - `job_id` - ID the backend assigned to the job
///
/// # Returns
/// - `JobDto` - A job posting with test data
pub fn mock_job(job_id: i64) -> JobDto {
    JobDto {
        id: job_id,
        title: format!("Job {}", job_id),
        description: "Fix a leaking kitchen sink".to_string(),
        status: JobStatus::Open,
        employer_id: Some(1),
    }
}

/// Create the form posting the job [`mock_job`] returns.
pub fn mock_create_job(job_id: i64) -> CreateJobDto {
    let job = mock_job(job_id);

    CreateJobDto {
        title: job.title,
        description: job.description,
        status: job.status,
    }
}

/// Create a pending application with an embedded applicant.
///
/// # Arguments
/// - `application_id` - ID of the application
/// - `job_id` - ID of the job applied to
/// - `worker_id` - ID of the applying worker
pub fn mock_application(application_id: i64, job_id: i64, worker_id: i64) -> ApplicationDto {
    ApplicationDto {
        id: application_id,
        job_id,
        worker_id,
        status: ApplicationStatus::Pending,
        worker: Some(ApplicantDto {
            id: worker_id,
            username: format!("worker{}", worker_id),
            email: Some(format!("worker{}@example.com", worker_id)),
        }),
    }
}
