use khademni::{
    api::{ApiClient, DefaultTransport},
    config::Config,
    model::auth::Role,
    service::{AuthService, JobService, Services},
    session::{MemoryStorage, SessionStore},
};
use mockito::{Mock, Server, ServerGuard};

use crate::{constant::UNREACHABLE_API_URL, error::TestError};

/// A mock backend plus a client wired to it.
///
/// The session lives in a [`MemoryStorage`] kept on the setup, so tests can inspect the
/// raw entries a flow wrote without going through [`SessionStore`].
pub struct TestSetup {
    pub server: ServerGuard,
    pub storage: MemoryStorage,
    pub session: SessionStore,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        // Ensure the mock server address passes the same validation as a configured one
        Config::new(&server.url())?;

        let storage = MemoryStorage::new();
        let session = SessionStore::new(storage.clone());

        Ok(TestSetup {
            server,
            storage,
            session,
            mocks: Vec::new(),
        })
    }

    /// Client against the mock server, sharing this setup's session.
    pub fn client(&self) -> ApiClient<DefaultTransport> {
        ApiClient::new(self.server.url(), DefaultTransport::default(), self.session.clone())
    }

    /// Client against an address nothing listens on, sharing this setup's session.
    pub fn unreachable_client(&self) -> ApiClient<DefaultTransport> {
        ApiClient::new(
            UNREACHABLE_API_URL,
            DefaultTransport::default(),
            self.session.clone(),
        )
    }

    pub fn services(&self) -> Services<DefaultTransport> {
        Services::new(self.client())
    }

    pub fn auth_service(&self) -> AuthService<DefaultTransport> {
        AuthService::new(self.client())
    }

    pub fn job_service(&self) -> JobService<DefaultTransport> {
        JobService::new(self.client())
    }

    /// Stores a session as if a login had already happened.
    pub fn login_as(&self, token: &str, role: Role) {
        self.session.set_session(token, role);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks created by the TestBuilder to verify
    /// they were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
