//! API coverage auditor
//!
//! Answers one question: which operations declared in the vendor OpenAPI
//! document are never issued by the client? Both sides are reduced to
//! `(METHOD, canonical path)` keys ([`canon::canonicalize`]) and compared.
//!
//! The analysis is purely static. Call sites that the evaluator in
//! [`extract`] cannot fold are skipped, so the report errs toward listing an
//! operation as missing rather than failing.

pub mod canon;
pub mod extract;
pub mod openapi;
pub mod report;

use std::collections::BTreeSet;
use std::path::PathBuf;

pub use canon::{apply_prefix, canonicalize};
pub use openapi::{OperationFilter, SpecOperation};
pub use report::{CoverageReport, OperationKey};

use crate::error::AuditError;

/// Inputs of one audit run.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// OpenAPI document (JSON)
    pub spec: PathBuf,
    /// Client source file or directory
    pub client: PathBuf,
    pub filter: OperationFilter,
    /// Prepended to client paths that lack it
    pub path_prefix: String,
    /// Request constructor to look for, e.g. `ApiRequest::new`
    pub constructor: String,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            spec: PathBuf::from("openapi_pretty.json"),
            client: PathBuf::from("src/client"),
            filter: OperationFilter::default(),
            path_prefix: "/v1".to_string(),
            constructor: "ApiRequest::new".to_string(),
        }
    }
}

/// Load the document, scan the client, and compare.
pub fn run(options: &AuditOptions) -> Result<CoverageReport, AuditError> {
    let doc = openapi::load_spec(&options.spec)?;
    let spec_ops = openapi::spec_operations(&doc, &options.filter)?;

    let files = extract::source_files(&options.client)?;
    let parsed = extract::parse_sources(&files)?;
    let calls = extract::extract_calls(&parsed, &options.constructor);

    let client_keys: BTreeSet<OperationKey> = calls
        .iter()
        .map(|call| {
            let path = apply_prefix(&options.path_prefix, &canonicalize(&call.url));
            (call.method.clone(), path)
        })
        .collect();

    tracing::info!(
        spec_operations = spec_ops.len(),
        client_calls = calls.len(),
        files = files.len(),
        "coverage inputs loaded"
    );
    Ok(CoverageReport::compute(&spec_ops, &client_keys))
}
