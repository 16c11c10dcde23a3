//! Request description handed to the pipeline

use std::borrow::Cow;

use reqwest::Method;
use serde::Serialize;

use crate::error::ClientError;
use crate::execution::multipart::MultipartForm;

/// Request body shapes used by vendor operations.
pub enum RequestBody {
    /// No body (`GET`, `DELETE`, and action-style `POST`s)
    Empty,
    /// Pre-serialized JSON
    Json(Vec<u8>),
    /// `multipart/form-data`; the content type carries the form's boundary
    Multipart(reqwest::multipart::Form),
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Json(bytes) => write!(f, "Json({} bytes)", bytes.len()),
            Self::Multipart(form) => write!(f, "Multipart(boundary={})", form.boundary()),
        }
    }
}

/// One vendor call: method, base-relative path, optional query and body.
#[derive(Debug)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: RequestBody,
}

impl ApiRequest {
    /// Start a request. `path` is relative to the configured base URL and
    /// must start with `/`.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// Serialize `body` as the JSON payload.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = RequestBody::Json(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Use a multipart form as the payload.
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form.into_form());
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter when present.
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }
}

/// Percent-encode an identifier for use as a single path segment.
pub fn path_segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
