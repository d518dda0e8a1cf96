use dioxus_logger::tracing;
use reqwasm::http::Request;

use crate::api::{
    request::Method,
    transport::{HttpRequest, HttpResponse, Transport, TransportError},
};

/// Fetch API transport for the browser build.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwasmTransport;

impl Transport for ReqwasmTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_else(|e| {
            tracing::warn!("Failed to read response body: {}", e);
            String::new()
        });

        Ok(HttpResponse { status, body })
    }
}
