//! Access layer for the marketplace backend.
//!
//! [`ApiClient`] resolves [`ApiRequest`]s against the configured base URL, attaches the
//! bearer token from the [`SessionStore`] when asked to, and turns every failure into a
//! [`ClientError`] using the normalization in [`ClientError::from_response`]. Callers
//! only ever see decoded DTOs or a `ClientError`.

pub mod request;
pub mod transport;

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{config::Config, error::ClientError, session::SessionStore};

pub use request::{ApiRequest, Method};
pub use transport::{
    DefaultTransport, HttpRequest, HttpResponse, Transport, TransportError,
};

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

#[derive(Debug, Clone)]
pub struct ApiClient<T = DefaultTransport> {
    base_url: String,
    transport: T,
    session: SessionStore,
}

impl ApiClient<DefaultTransport> {
    pub fn from_config(config: &Config, session: SessionStore) -> Self {
        Self::new(&config.api_url, DefaultTransport::default(), session)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T, session: SessionStore) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Builds the bearer header from the current session token.
    ///
    /// Without a token the header is still produced, with an empty token, so the server
    /// is the one rejecting the request. This is never a substitute for authorization.
    pub fn build_auth_header(&self) -> BTreeMap<String, String> {
        let token = self.session.token().unwrap_or_else(|| {
            tracing::warn!("No session token found, sending request with an empty bearer token");
            String::new()
        });

        BTreeMap::from([(
            AUTHORIZATION_HEADER.to_string(),
            format!("Bearer {}", token),
        )])
    }

    /// Sends the request and decodes the JSON success body.
    pub async fn request<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ClientError> {
        let response = self.execute(request).await?;

        serde_json::from_str(&response.body).map_err(|e| ClientError::decode(response.status, e))
    }

    /// Sends the request and discards the success body.
    pub async fn request_empty(&self, request: ApiRequest) -> Result<(), ClientError> {
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: ApiRequest) -> Result<HttpResponse, ClientError> {
        let ApiRequest {
            method,
            path,
            body,
            authorized,
        } = request;

        let mut headers = BTreeMap::new();
        if body.is_some() {
            headers.insert(
                CONTENT_TYPE_HEADER.to_string(),
                "application/json".to_string(),
            );
        }
        if authorized {
            headers.extend(self.build_auth_header());
        }

        let http_request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        };

        tracing::debug!("{} {}", method, path);

        let response = self
            .transport
            .send(http_request)
            .await
            .map_err(ClientError::transport)?;

        if response.is_success() {
            return Ok(response);
        }

        let err = ClientError::from_response(response.status, &response.body);
        tracing::warn!(
            status = response.status,
            "{} {} failed: {}",
            method,
            path,
            err
        );

        Err(err)
    }
}
