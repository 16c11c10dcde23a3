//! OpenAPI operation listing

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;

use super::canon::canonicalize;
use crate::error::AuditError;

/// Tag assigned to operations that declare none.
pub const UNTAGGED: &str = "untagged";

/// Path-item keys that are not HTTP methods.
const NON_OPERATION_KEYS: &[&str] = &["parameters", "servers", "summary", "description", "$ref"];

/// One operation declared in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecOperation {
    /// Uppercase HTTP method
    pub method: String,
    /// Path as written in the document
    pub path: String,
    pub canonical_path: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
}

impl SpecOperation {
    /// Declared tags, or [`UNTAGGED`] when there are none.
    pub fn effective_tags(&self) -> Vec<&str> {
        if self.tags.is_empty() {
            vec![UNTAGGED]
        } else {
            self.tags.iter().map(String::as_str).collect()
        }
    }
}

/// Method and tag filters. Empty sets do not filter.
#[derive(Debug, Clone, Default)]
pub struct OperationFilter {
    methods: BTreeSet<String>,
    include_tags: BTreeSet<String>,
    exclude_tags: BTreeSet<String>,
}

impl OperationFilter {
    pub fn new<I, J, K, S, T, U>(methods: I, include_tags: J, exclude_tags: K) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        K: IntoIterator<Item = U>,
        S: AsRef<str>,
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Self {
            methods: normalize(methods, str::to_ascii_uppercase),
            include_tags: normalize(include_tags, str::to_ascii_lowercase),
            exclude_tags: normalize(exclude_tags, str::to_ascii_lowercase),
        }
    }

    /// Parse the comma-separated CLI form of each set.
    pub fn from_csv(methods: &str, include_tags: &str, exclude_tags: &str) -> Self {
        Self::new(split_csv(methods), split_csv(include_tags), split_csv(exclude_tags))
    }

    pub fn accepts(&self, op: &SpecOperation) -> bool {
        if !self.methods.is_empty() && !self.methods.contains(&op.method) {
            return false;
        }
        let tags: Vec<String> = op
            .effective_tags()
            .into_iter()
            .map(str::to_ascii_lowercase)
            .collect();
        if !self.include_tags.is_empty() && !tags.iter().any(|t| self.include_tags.contains(t)) {
            return false;
        }
        !tags.iter().any(|t| self.exclude_tags.contains(t))
    }
}

fn normalize<I, S>(values: I, case: fn(&str) -> String) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| case(v.as_ref().trim()))
        .filter(|v| !v.is_empty())
        .collect()
}

/// Split a comma-separated list, dropping empty entries.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse the document at `path`.
pub fn load_spec(path: &Path) -> Result<Value, AuditError> {
    let text = std::fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// List every operation in `doc` that passes `filter`.
pub fn spec_operations(doc: &Value, filter: &OperationFilter) -> Result<Vec<SpecOperation>, AuditError> {
    let paths = doc
        .get("paths")
        .and_then(Value::as_object)
        .ok_or_else(|| AuditError::InvalidSpec("missing `paths` object".to_string()))?;

    let mut ops = Vec::new();
    for (path, item) in paths {
        let Some(item) = item.as_object() else {
            tracing::debug!(path = %path, "skipping non-object path item");
            continue;
        };
        for (key, operation) in item {
            if key.starts_with("x-") || NON_OPERATION_KEYS.contains(&key.as_str()) {
                continue;
            }
            let op = SpecOperation {
                method: key.to_ascii_uppercase(),
                path: path.clone(),
                canonical_path: canonicalize(path),
                summary: operation
                    .get("summary")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                tags: operation
                    .get("tags")
                    .and_then(Value::as_array)
                    .map(|tags| {
                        tags.iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            };
            if filter.accepts(&op) {
                ops.push(op);
            }
        }
    }
    tracing::debug!(count = ops.len(), "spec operations considered");
    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "openapi": "3.1.0",
            "paths": {
                "/v1/voices": {
                    "get": {"summary": "List voices", "tags": ["voices"]},
                    "parameters": [],
                    "x-fern-ignore": true
                },
                "/v1/voices/{voice_id}": {
                    "delete": {"summary": "Delete voice", "tags": ["voices"]},
                    "summary": "Voice"
                },
                "/v1/models": {
                    "get": {"summary": "List models"}
                },
                "/v1/convai/agents": {
                    "get": {"tags": ["Agents", "ConvAI"]},
                    "x-codegen": {"get": {}}
                }
            }
        })
    }

    #[test]
    fn non_method_keys_are_skipped() {
        let ops = spec_operations(&doc(), &OperationFilter::default()).unwrap();
        assert_eq!(ops.len(), 4);
        assert!(ops.iter().all(|op| ["GET", "DELETE"].contains(&op.method.as_str())));
        let delete = ops.iter().find(|op| op.method == "DELETE").unwrap();
        assert_eq!(delete.canonical_path, "/v1/voices/*");
        assert_eq!(delete.summary.as_deref(), Some("Delete voice"));
    }

    #[test]
    fn untagged_pseudo_tag_can_be_included() {
        let filter = OperationFilter::from_csv("", "UNTAGGED", "");
        let ops = spec_operations(&doc(), &filter).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].path, "/v1/models");
    }

    #[test]
    fn filters_are_case_insensitive() {
        let filter = OperationFilter::from_csv("get", "voices,convai", "agents");
        let ops = spec_operations(&doc(), &filter).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].path, "/v1/voices");
    }

    #[test]
    fn missing_paths_is_invalid() {
        let err = spec_operations(&json!({"openapi": "3.1.0"}), &OperationFilter::default()).unwrap_err();
        assert!(matches!(err, AuditError::InvalidSpec(_)));
    }

    #[test]
    fn csv_drops_blank_entries() {
        assert_eq!(split_csv(" GET, ,post,"), vec!["GET", "post"]);
        assert!(split_csv("").is_empty());
    }
}
