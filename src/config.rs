use std::path::PathBuf;

use url::Url;

use crate::error::ConfigError;

pub const API_URL_VAR: &str = "API_URL";
pub const SESSION_FILE_VAR: &str = "SESSION_FILE";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_SESSION_FILE: &str = ".khademni-session.json";

/// Startup configuration for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the marketplace backend, without a trailing slash.
    pub api_url: String,
    /// Where the desktop build persists the session. Unused in the browser.
    pub session_file: PathBuf,
}

impl Config {
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_api_url(api_url)?,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        })
    }

    /// Reads the configuration from the environment.
    ///
    /// `API_URL` is looked up at runtime first and then at compile time, since a browser
    /// build has no process environment. Without either the local backend is used.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var(API_URL_VAR)
            .ok()
            .or_else(|| option_env!("API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let session_file = std::env::var(SESSION_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Ok(Self {
            api_url: parse_api_url(&api_url)?,
            session_file,
        })
    }

    pub fn with_session_file(mut self, session_file: impl Into<PathBuf>) -> Self {
        self.session_file = session_file.into();
        self
    }
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvValue {
        var: API_URL_VAR.to_string(),
        reason: format!("{} (got {:?})", reason, raw),
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&format!("invalid URL: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid("expected an http:// or https:// URL")),
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host"));
    }

    // Request paths are appended to the base as-is
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed"));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
