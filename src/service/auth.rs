use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, ApiRequest, DefaultTransport, Transport},
    error::ClientError,
    model::auth::{AuthResponseDto, LoginDto, SignupDto},
    navigation::{self, LANDING_PATH},
    session::Session,
};

const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Signup, login and logout.
///
/// A successful signup or login persists the returned token and role before returning,
/// so the caller can navigate straight to [`Session::dashboard_path`]. A failure leaves
/// the stored session untouched.
#[derive(Debug, Clone)]
pub struct AuthService<T = DefaultTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> AuthService<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// Registers a new account and logs it in.
    ///
    /// # Arguments
    /// - `registration` - Username, email, password and the requested role
    ///
    /// # Returns
    /// - `Ok(Session)` - Account created, session stored
    /// - `Err(ClientError)` - Server rejected the registration or could not be reached
    pub async fn signup(&self, registration: &SignupDto) -> Result<Session, ClientError> {
        tracing::info!(
            username = %registration.username,
            role = %registration.role,
            "Signing up"
        );

        let request = ApiRequest::post(SIGNUP_ENDPOINT).json(registration)?;
        let response: AuthResponseDto = self.client.request(request).await?;

        Ok(self.store(response))
    }

    /// Logs an existing account in.
    ///
    /// # Returns
    /// - `Ok(Session)` - Credentials accepted, session stored
    /// - `Err(ClientError)` - Credentials rejected or server unreachable
    pub async fn login(&self, credentials: &LoginDto) -> Result<Session, ClientError> {
        tracing::info!(username = %credentials.username, "Logging in");

        let request = ApiRequest::post(LOGIN_ENDPOINT).json(credentials)?;
        let response: AuthResponseDto = self.client.request(request).await?;

        Ok(self.store(response))
    }

    /// Clears the session and reloads the landing page.
    ///
    /// Returns whether the full-page redirect happened; outside a browser it cannot, and
    /// the caller is expected to route to the landing page itself.
    pub fn logout(&self) -> bool {
        self.client.session().clear();
        tracing::info!("Logged out");

        navigation::hard_redirect(LANDING_PATH)
    }

    pub fn session(&self) -> Session {
        self.client.session().session()
    }

    /// Persists the response and returns the session as the store now reports it.
    fn store(&self, response: AuthResponseDto) -> Session {
        let store = self.client.session();
        store.set_session(&response.token, response.role);

        tracing::info!(role = %response.role, "Authenticated");

        store.session()
    }
}
