use crate::Result;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::time::Duration;

/// A fully read response: status, headers, latency and the raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    elapsed: Duration,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, elapsed: Duration, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            elapsed,
            body,
        }
    }

    /// Drain a reqwest response. Body read failures are transport errors.
    pub(crate) async fn read(response: reqwest::Response, elapsed: Duration) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(Self::new(status, headers, elapsed, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Time from sending the request until the response headers arrived.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(self.bytes())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            Duration::from_millis(12),
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn exposes_text_and_status() {
        let resp = response(201, "Created");

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(resp.status_code(), 201);
        assert_eq!(resp.text(), "Created");
        assert_eq!(resp.elapsed(), Duration::from_millis(12));
    }

    #[test]
    fn json_decodes_body() {
        let resp = response(200, r#"[{"bookingid": 1}, {"bookingid": 7}]"#);
        let value: Value = resp.json().unwrap();

        assert_eq!(value[1]["bookingid"], 7);
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let resp = response(404, "Not Found");
        let err = resp.json::<Value>().unwrap_err();

        assert!(!err.is_transport());
    }
}
