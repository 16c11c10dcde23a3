//! Shared helpers for the stub-server tests

#![allow(dead_code)]

use elevenlabs_client::ElevenLabsClient;
use wiremock::{Match, MockServer, Request};

pub const TEST_KEY: &str = "test-key-7f3a";

/// Client pointed at `server`, authenticated with [`TEST_KEY`].
pub fn client_for(server: &MockServer) -> ElevenLabsClient {
    ElevenLabsClient::builder()
        .api_key(TEST_KEY)
        .base_url(server.uri())
        .build()
        .expect("client")
}

/// Matches requests that carry no body.
pub struct EmptyBody;

impl Match for EmptyBody {
    fn matches(&self, request: &Request) -> bool {
        request.body.is_empty()
    }
}

/// Matches `multipart/form-data` requests whose body contains `needle`.
pub struct MultipartContaining(pub &'static str);

impl Match for MultipartContaining {
    fn matches(&self, request: &Request) -> bool {
        let is_multipart = request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data; boundary="));
        is_multipart && String::from_utf8_lossy(&request.body).contains(self.0)
    }
}
