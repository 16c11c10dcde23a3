//! Execution Layer
//!
//! The request pipeline every vendor operation goes through: build an
//! [`request::ApiRequest`], hand it to [`pipeline::HttpPipeline`], get back a
//! decoded record, raw bytes, or nothing.

pub mod http;
pub mod multipart;
pub mod pipeline;
pub mod request;

pub use multipart::MultipartForm;
pub use pipeline::HttpPipeline;
pub use request::{ApiRequest, RequestBody, path_segment};
