//! Flows the views call into.
//!
//! Services own no state of their own: they call the [`ApiClient`], update the
//! [`SessionStore`] where a flow requires it, and hand results or [`ClientError`]s back to
//! the caller unchanged.
//!
//! [`ClientError`]: crate::error::ClientError

pub mod auth;
pub mod job;

use crate::{
    api::{ApiClient, DefaultTransport, Transport},
    config::Config,
    session::SessionStore,
};

pub use auth::AuthService;
pub use job::{DeleteOutcome, JobService};

/// Everything the views need, built once at startup and shared through context.
#[derive(Debug, Clone)]
pub struct Services<T = DefaultTransport> {
    pub session: SessionStore,
    pub auth: AuthService<T>,
    pub jobs: JobService<T>,
}

impl Services<DefaultTransport> {
    pub fn from_config(config: &Config) -> Self {
        let session = SessionStore::for_config(config);

        Self::new(ApiClient::from_config(config, session))
    }
}

impl<T: Transport + Clone> Services<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            session: client.session().clone(),
            auth: AuthService::new(client.clone()),
            jobs: JobService::new(client),
        }
    }
}
