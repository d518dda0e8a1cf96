//! Declarative test builder.
//!
//! Configure the session and the mock endpoints a test needs, then call `build()`.
//! Everything is queued and applied in `build()`, so calls can be chained in any order.

use khademni::model::{
    auth::Role,
    job::{ApplicationDto, JobDto},
};
use mockito::Mock;

use crate::{constant::TEST_TOKEN, error::TestError, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    session: Option<(String, Role)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    login_endpoints: Vec<(Role, usize)>,
    signup_endpoints: Vec<(Role, usize)>,
    jobs_endpoints: Vec<(Vec<JobDto>, usize)>,
    my_jobs_endpoints: Vec<(Vec<JobDto>, usize)>,
    post_job_endpoints: Vec<(JobDto, usize)>,
    delete_job_endpoints: Vec<(i64, usize)>,
    apply_endpoints: Vec<(i64, usize)>,
    applications_endpoints: Vec<(i64, Vec<ApplicationDto>, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no session and no endpoints.
    pub fn new() -> Self {
        Self {
            session: None,
            mock_builders: Vec::new(),
            login_endpoints: Vec::new(),
            signup_endpoints: Vec::new(),
            jobs_endpoints: Vec::new(),
            my_jobs_endpoints: Vec::new(),
            post_job_endpoints: Vec::new(),
            delete_job_endpoints: Vec::new(),
            apply_endpoints: Vec::new(),
            applications_endpoints: Vec::new(),
        }
    }

    /// Start logged in with [`TEST_TOKEN`] and the given role.
    ///
    /// Authorized endpoint shortcuts only match requests carrying [`TEST_TOKEN`].
    pub fn with_session(mut self, role: Role) -> Self {
        self.session = Some((TEST_TOKEN.to_string(), role));
        self
    }

    /// Add a login endpoint handing out [`TEST_TOKEN`] with `role`.
    ///
    /// # Arguments
    /// - `role` - Role the backend reports for the account
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_login_endpoint(mut self, role: Role, expected_requests: usize) -> Self {
        self.login_endpoints.push((role, expected_requests));
        self
    }

    /// Add a signup endpoint handing out [`TEST_TOKEN`] with `role`.
    pub fn with_signup_endpoint(mut self, role: Role, expected_requests: usize) -> Self {
        self.signup_endpoints.push((role, expected_requests));
        self
    }

    /// Add the public job listing endpoint.
    pub fn with_jobs_endpoint(mut self, jobs: Vec<JobDto>, expected_requests: usize) -> Self {
        self.jobs_endpoints.push((jobs, expected_requests));
        self
    }

    /// Add the employer's own job listing endpoint.
    pub fn with_my_jobs_endpoint(mut self, jobs: Vec<JobDto>, expected_requests: usize) -> Self {
        self.my_jobs_endpoints.push((jobs, expected_requests));
        self
    }

    /// Add the job creation endpoint, answering with `created`.
    pub fn with_post_job_endpoint(mut self, created: JobDto, expected_requests: usize) -> Self {
        self.post_job_endpoints.push((created, expected_requests));
        self
    }

    pub fn with_delete_job_endpoint(mut self, job_id: i64, expected_requests: usize) -> Self {
        self.delete_job_endpoints.push((job_id, expected_requests));
        self
    }

    pub fn with_apply_endpoint(mut self, job_id: i64, expected_requests: usize) -> Self {
        self.apply_endpoints.push((job_id, expected_requests));
        self
    }

    /// Add the application listing endpoint of `job_id`.
    pub fn with_applications_endpoint(
        mut self,
        job_id: i64,
        applications: Vec<ApplicationDto>,
        expected_requests: usize,
    ) -> Self {
        self.applications_endpoints
            .push((job_id, applications, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Use this for error responses and anything the shortcuts don't cover.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup: store the session, then create every mock endpoint.
    ///
    /// Custom endpoints are created first so tests can register several mocks for the
    /// same path and rely on mockito's matching order.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Mock server with all endpoints registered
    /// - `Err(TestError::ConfigError)` - The mock server address was rejected
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        if let Some((token, role)) = &self.session {
            setup.login_as(token, *role);
        }

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (role, expected) in self.login_endpoints {
            mocks.push(setup.auth().create_login_endpoint(TEST_TOKEN, role, expected));
        }

        for (role, expected) in self.signup_endpoints {
            mocks.push(setup.auth().create_signup_endpoint(TEST_TOKEN, role, expected));
        }

        for (jobs, expected) in self.jobs_endpoints {
            mocks.push(setup.job().create_jobs_endpoint(jobs, expected));
        }

        for (jobs, expected) in self.my_jobs_endpoints {
            mocks.push(setup.job().create_my_jobs_endpoint(TEST_TOKEN, jobs, expected));
        }

        for (created, expected) in self.post_job_endpoints {
            mocks.push(setup.job().create_post_job_endpoint(TEST_TOKEN, created, expected));
        }

        for (job_id, expected) in self.delete_job_endpoints {
            mocks.push(setup.job().create_delete_job_endpoint(TEST_TOKEN, job_id, expected));
        }

        for (job_id, expected) in self.apply_endpoints {
            mocks.push(setup.job().create_apply_endpoint(TEST_TOKEN, job_id, expected));
        }

        for (job_id, applications, expected) in self.applications_endpoints {
            mocks.push(
                setup
                    .job()
                    .create_applications_endpoint(TEST_TOKEN, job_id, applications, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
