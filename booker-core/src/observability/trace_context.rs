//! Request correlation for outbound calls to the booking service.
//!
//! Every request gets a fresh `x-request-id` so a failing assertion can be
//! matched against the service's own logs, and every exchange is logged with
//! its status and latency.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Header name for request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Insert a freshly generated request ID and return it.
pub fn inject_request_id(headers: &mut HeaderMap) -> String {
    let request_id = Uuid::new_v4().to_string();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    request_id
}

/// A request builder that tags the request with a request ID and logs the exchange.
pub struct TracedRequest {
    method: Method,
    url: String,
    request: reqwest::RequestBuilder,
}

impl TracedRequest {
    pub fn new(method: Method, url: &str, request: reqwest::RequestBuilder) -> Self {
        Self {
            method,
            url: url.to_string(),
            request,
        }
    }

    /// Add a header to the request.
    pub fn header(self, key: &str, value: &str) -> Self {
        Self {
            request: self.request.header(key, value),
            ..self
        }
    }

    /// Add JSON body to the request.
    pub fn json<T: serde::Serialize + ?Sized>(self, json: &T) -> Self {
        Self {
            request: self.request.json(json),
            ..self
        }
    }

    /// Send the request once, returning the response and the time until its headers arrived.
    pub async fn send_timed(self) -> Result<(reqwest::Response, Duration), reqwest::Error> {
        let mut headers = HeaderMap::new();
        let request_id = inject_request_id(&mut headers);

        let started = Instant::now();
        let result = self.request.headers(headers).send().await;
        let elapsed = started.elapsed();

        match &result {
            Ok(response) => tracing::debug!(
                method = %self.method,
                url = %self.url,
                request_id = %request_id,
                status = response.status().as_u16(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Booking API responded"
            ),
            Err(e) => tracing::error!(
                method = %self.method,
                url = %self.url,
                request_id = %request_id,
                "Failed to reach booking API: {}",
                e
            ),
        }

        result.map(|response| (response, elapsed))
    }
}

/// Extension trait for reqwest::Client to create traced requests.
pub trait TracedClientExt {
    fn traced_get(&self, url: &str) -> TracedRequest;
    fn traced_post(&self, url: &str) -> TracedRequest;
    fn traced_put(&self, url: &str) -> TracedRequest;
    fn traced_patch(&self, url: &str) -> TracedRequest;
    fn traced_delete(&self, url: &str) -> TracedRequest;
}

impl TracedClientExt for reqwest::Client {
    fn traced_get(&self, url: &str) -> TracedRequest {
        TracedRequest::new(Method::GET, url, self.get(url))
    }

    fn traced_post(&self, url: &str) -> TracedRequest {
        TracedRequest::new(Method::POST, url, self.post(url))
    }

    fn traced_put(&self, url: &str) -> TracedRequest {
        TracedRequest::new(Method::PUT, url, self.put(url))
    }

    fn traced_patch(&self, url: &str) -> TracedRequest {
        TracedRequest::new(Method::PATCH, url, self.patch(url))
    }

    fn traced_delete(&self, url: &str) -> TracedRequest {
        TracedRequest::new(Method::DELETE, url, self.delete(url))
    }
}
