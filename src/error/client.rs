use std::fmt::Display;

use dioxus_logger::tracing;
use serde_json::Value;
use thiserror::Error;

use crate::model::api::ErrorDto;

pub const CANNOT_CONNECT_MESSAGE: &str = "Cannot connect to server.";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized, please login again.";
pub const FORBIDDEN_MESSAGE: &str = "Insufficient permissions.";
pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";

/// Category of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never reached the server.
    Transport,
    /// The server rejected the credentials (401) or the role (403).
    Auth,
    /// The server answered 404.
    NotFound,
    /// A local check failed before any request was issued.
    Validation,
    /// Any other failure reported by the server, including undecodable success bodies.
    Server,
}

/// The single error shape handed from the API client, through the services, to the views.
///
/// `status` is the HTTP status code, or `0` when no response was received
/// (transport failures, local validation, and request bodies that could not be encoded).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ClientError {
    pub kind: ErrorKind,
    pub status: u16,
    pub message: String,
}

impl ClientError {
    /// Builds the error reported when the server could not be reached at all.
    pub fn transport(cause: impl Display) -> Self {
        tracing::warn!("Failed to reach server: {}", cause);

        Self {
            kind: ErrorKind::Transport,
            status: 0,
            message: CANNOT_CONNECT_MESSAGE.to_string(),
        }
    }

    /// Builds the error for a local pre-submission check.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            status: 0,
            message: message.into(),
        }
    }

    /// Builds the error for a request body that could not be encoded. Nothing was sent.
    pub fn encode(cause: impl Display) -> Self {
        Self {
            kind: ErrorKind::Server,
            status: 0,
            message: format!("Failed to encode request body: {}", cause),
        }
    }

    /// Builds the error for a success response whose body could not be decoded.
    pub fn decode(status: u16, cause: impl Display) -> Self {
        Self {
            kind: ErrorKind::Server,
            status,
            message: format!("Failed to parse server response: {}", cause),
        }
    }

    /// Normalizes a non-success HTTP response.
    ///
    /// The fixed messages for 401, 403 and 404 take priority over anything the server
    /// put in the body. For every other status the body is used when it carries a
    /// message: a JSON string, a JSON object with a `message` or `error` field, or
    /// plain text. Otherwise a generic message naming the status is returned.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => Self {
                kind: ErrorKind::Auth,
                status,
                message: UNAUTHORIZED_MESSAGE.to_string(),
            },
            403 => Self {
                kind: ErrorKind::Auth,
                status,
                message: FORBIDDEN_MESSAGE.to_string(),
            },
            404 => Self {
                kind: ErrorKind::NotFound,
                status,
                message: NOT_FOUND_MESSAGE.to_string(),
            },
            _ => Self {
                kind: ErrorKind::Server,
                status,
                message: server_message(body)
                    .unwrap_or_else(|| format!("Request failed with status {}", status)),
            },
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }
}

fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(message)) => Some(message),
        Ok(value @ Value::Object(_)) => serde_json::from_value::<ErrorDto>(value)
            .ok()
            .and_then(ErrorDto::into_message),
        Ok(_) => None,
        // Not JSON at all, the server answered with plain text
        Err(_) => Some(body.to_string()),
    };

    message.filter(|message| !message.trim().is_empty())
}
