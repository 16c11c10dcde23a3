//! Coverage computation and text rendering

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use super::openapi::SpecOperation;

/// `(METHOD, canonical path)`
pub type OperationKey = (String, String);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageReport {
    /// Distinct spec keys considered
    pub total: usize,
    /// Distinct client keys detected
    pub detected: usize,
    pub covered: usize,
    /// One operation per uncovered key, sorted by method then path
    pub missing: Vec<SpecOperation>,
    /// Uncovered count per tag, highest count first, ties by name
    pub missing_by_tag: Vec<(String, usize)>,
}

impl CoverageReport {
    pub fn compute(spec_ops: &[SpecOperation], client_keys: &BTreeSet<OperationKey>) -> Self {
        let mut by_key: BTreeMap<OperationKey, &SpecOperation> = BTreeMap::new();
        for op in spec_ops {
            by_key
                .entry((op.method.clone(), op.canonical_path.clone()))
                .or_insert(op);
        }

        let mut missing: Vec<SpecOperation> = by_key
            .iter()
            .filter(|(key, _)| !client_keys.contains(*key))
            .map(|(_, op)| (*op).clone())
            .collect();
        missing.sort_by(|a, b| a.method.cmp(&b.method).then_with(|| a.path.cmp(&b.path)));

        let mut tag_counts: BTreeMap<String, usize> = BTreeMap::new();
        for op in &missing {
            for tag in op.effective_tags() {
                *tag_counts.entry(tag.to_string()).or_default() += 1;
            }
        }
        let mut missing_by_tag: Vec<(String, usize)> = tag_counts.into_iter().collect();
        missing_by_tag.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            total: by_key.len(),
            detected: client_keys.len(),
            covered: by_key.len() - missing.len(),
            missing,
            missing_by_tag,
        }
    }

    /// Covered share of spec operations, in percent. An empty selection is
    /// fully covered.
    pub fn coverage_percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.covered as f64 * 100.0 / self.total as f64
        }
    }

    /// Human-readable report; `details` appends the full missing list.
    pub fn render(&self, details: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Spec operations considered: {}", self.total);
        let _ = writeln!(out, "Client operations detected: {}", self.detected);
        let _ = writeln!(out, "Covered: {}", self.covered);
        let _ = writeln!(out, "Coverage: {:.1}%", self.coverage_percent());

        if !self.missing_by_tag.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Missing by tag:");
            for (tag, count) in &self.missing_by_tag {
                let _ = writeln!(out, "  {tag}: {count}");
            }
        }

        if details && !self.missing.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Missing operations:");
            for op in &self.missing {
                match &op.summary {
                    Some(summary) => {
                        let _ = writeln!(out, "  {:<7} {}  ({})", op.method, op.path, summary);
                    }
                    None => {
                        let _ = writeln!(out, "  {:<7} {}", op.method, op.path);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::canon::canonicalize;

    fn op(method: &str, path: &str, tags: &[&str]) -> SpecOperation {
        SpecOperation {
            method: method.to_string(),
            path: path.to_string(),
            canonical_path: canonicalize(path),
            summary: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn key(method: &str, path: &str) -> OperationKey {
        (method.to_string(), path.to_string())
    }

    #[test]
    fn tags_sorted_by_count_then_name() {
        let ops = vec![
            op("GET", "/v1/models", &[]),
            op("GET", "/v1/dubbing", &["dubbing"]),
            op("DELETE", "/v1/dubbing/{id}", &["dubbing"]),
            op("GET", "/v1/user", &["user"]),
            op("GET", "/v1/voices", &["voices"]),
        ];
        let client = BTreeSet::from([key("GET", "/v1/voices")]);
        let report = CoverageReport::compute(&ops, &client);

        assert_eq!(report.total, 5);
        assert_eq!(report.covered, 1);
        assert_eq!(
            report.missing_by_tag,
            vec![
                ("dubbing".to_string(), 2),
                ("untagged".to_string(), 1),
                ("user".to_string(), 1),
            ]
        );
        let order: Vec<_> = report.missing.iter().map(|o| (o.method.as_str(), o.path.as_str())).collect();
        assert_eq!(
            order,
            vec![
                ("DELETE", "/v1/dubbing/{id}"),
                ("GET", "/v1/dubbing"),
                ("GET", "/v1/models"),
                ("GET", "/v1/user"),
            ]
        );
    }

    #[test]
    fn duplicate_spec_keys_count_once() {
        let ops = vec![
            op("GET", "/v1/voices/{voice_id}", &["voices"]),
            op("GET", "/v1/voices/{id}", &["voices"]),
        ];
        let report = CoverageReport::compute(&ops, &BTreeSet::new());
        assert_eq!(report.total, 1);
        assert_eq!(report.missing.len(), 1);
    }

    #[test]
    fn render_prints_one_decimal() {
        let ops = vec![
            op("GET", "/voices", &["voices"]),
            op("POST", "/voices/add", &["voices"]),
            op("DELETE", "/voices/{voice_id}", &["voices"]),
        ];
        let client = BTreeSet::from([key("GET", "/voices"), key("POST", "/voices/add")]);
        let report = CoverageReport::compute(&ops, &client);
        let text = report.render(true);
        assert!(text.contains("Coverage: 66.7%"));
        assert!(text.contains("DELETE  /voices/{voice_id}"));

        let brief = report.render(false);
        assert!(!brief.contains("Missing operations:"));
        assert!(brief.contains("voices: 1"));
    }

    #[test]
    fn empty_selection_is_fully_covered() {
        let report = CoverageReport::compute(&[], &BTreeSet::new());
        assert_eq!(report.render(false).lines().nth(3), Some("Coverage: 100.0%"));
    }
}
