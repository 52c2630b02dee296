//! In-memory transport for unit tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;

use crate::transport::{Transport, TransportError, TransportRequest, TransportResponse};

/// Answers each URL with a fixed response and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, TransportResponse>,
    calls: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            TransportResponse {
                status: StatusCode::from_u16(status).unwrap(),
                headers: HeaderMap::new(),
                body: body.as_bytes().to_vec(),
            },
        );
        self
    }

    pub fn route_with_header(mut self, url: &str, status: u16, header: (&'static str, &str), body: &[u8]) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(header.0),
            HeaderValue::from_str(header.1).unwrap(),
        );
        self.routes.insert(
            url.to_string(),
            TransportResponse {
                status: StatusCode::from_u16(status).unwrap(),
                headers,
                body: body.to_vec(),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<TransportRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called_urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|r| r.url).collect()
    }
}

impl Transport for ScriptedTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        let response = self
            .routes
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| panic!("no scripted response for {}", request.url));
        self.calls.lock().unwrap().push(request);
        async move { Ok(response) }
    }
}
