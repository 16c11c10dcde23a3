//! # elevenlabs-client
//!
//! Typed client for the ElevenLabs REST API, used by the declarative provider's
//! resources and data sources, plus the `api-coverage` auditor that compares the
//! vendor OpenAPI document against the operations this client issues.
//!
#![deny(unsafe_code)]

//! ## Layout
//!
//! - [`client`]: one method per vendor operation, grouped by subdomain.
//! - [`execution`]: the shared request pipeline (auth, body encoding, status
//!   classification, decoding) and the HTTP transport builder.
//! - [`types`]: plain-data records the vendor returns and accepts.
//! - [`audit`]: offline coverage analysis (OpenAPI document vs. client source).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elevenlabs_client::ElevenLabsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ElevenLabsClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     for voice in client.list_voices().await?.voices {
//!         println!("{} {}", voice.voice_id, voice.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod audit;
pub mod client;
pub mod config;
pub mod error;
pub mod execution;
pub mod telemetry;
pub mod types;

pub use client::ElevenLabsClient;
pub use config::{ClientConfig, ElevenLabsBuilder, HttpConfig};
pub use error::ClientError;

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Production endpoint used when no base URL override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "xi-api-key";
