//! Error types
//!
//! The client never retries and never interprets vendor error payloads. Every
//! failure is returned to the caller in one of a handful of shapes:
//! - transport failures from `reqwest`, surfaced unmodified
//! - non-2xx responses, carrying the HTTP status and the raw body text
//! - decode failures on 2xx bodies, surfaced unmodified
//! - local file I/O failures (multipart uploads, dictionary downloads)
//!
//! ```rust,ignore
//! use elevenlabs_client::ClientError;
//!
//! let err = ClientError::api(422, r#"{"detail":"bad input"}"#);
//! assert_eq!(err.to_string(), r#"api error (status 422): {"detail":"bad input"}"#);
//! assert!(!err.is_not_found());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::ElevenLabsClient`] operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network unreachable, TLS failure, timeout, or body read failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The vendor answered with a non-2xx status.
    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// A 2xx body that does not match the expected record shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Local file could not be read for upload or written after download.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// No API key was supplied and `ELEVENLABS_API_KEY` is unset or empty.
    #[error("missing API key: pass one explicitly or set ELEVENLABS_API_KEY")]
    MissingApiKey,

    /// Invalid client configuration (base URL, proxy, headers).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The operation was aborted through a cancellation token.
    #[error("request cancelled")]
    Cancelled,
}

impl ClientError {
    /// Build a vendor API error from a status and raw body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// HTTP status of a vendor API error, or of a transport error that carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body of a vendor API error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True for a vendor 404.
    ///
    /// The client reports the raw error either way; resource handlers use this
    /// to decide whether a read should drop the resource from state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// True when the vendor rejected the request (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(400..=499))
    }

    /// True when the vendor failed to handle the request (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(500..=599))
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by the coverage auditor.
#[derive(Error, Debug)]
pub enum AuditError {
    /// A spec or source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OpenAPI document is not valid JSON.
    #[error("failed to parse OpenAPI document: {0}")]
    SpecParse(#[from] serde_json::Error),

    /// The OpenAPI document is JSON but lacks the expected structure.
    #[error("invalid OpenAPI document: {0}")]
    InvalidSpec(String),

    /// A client source file is not valid Rust.
    #[error("failed to parse {}: {message}", path.display())]
    SourceParse { path: PathBuf, message: String },
}
