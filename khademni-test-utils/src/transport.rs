//! In-process transport for tests that must observe exactly what was sent.

use std::{cell::RefCell, rc::Rc};

use khademni::api::{HttpRequest, HttpResponse, Transport, TransportError};

/// Records every request and answers each one with the same canned outcome.
///
/// Clones share the record, so a test can keep one handle while the client owns another.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    outcome: Result<HttpResponse, TransportError>,
}

impl RecordingTransport {
    /// Answers every request with `status` and `body`.
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self {
            requests: Rc::default(),
            outcome: Ok(HttpResponse {
                status,
                body: body.into(),
            }),
        }
    }

    /// Fails every request as if the connection could not be made.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            requests: Rc::default(),
            outcome: Err(TransportError(message.into())),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.outcome.clone()
    }
}
