//! Pronunciation dictionary records
//!
//! Dictionaries are versioned: every rule mutation yields a new
//! `latest_version_id`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::common::WorkspaceAccess;

/// A pronunciation rule, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PronunciationRule {
    /// Replace a string with another spelling before synthesis.
    Alias {
        string_to_replace: String,
        alias: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        case_sensitive: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        word_boundaries: Option<bool>,
    },
    /// Pronounce a string using an explicit phoneme transcription.
    Phoneme {
        string_to_replace: String,
        phoneme: String,
        alphabet: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        case_sensitive: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        word_boundaries: Option<bool>,
    },
}

impl PronunciationRule {
    pub fn alias(string_to_replace: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Alias {
            string_to_replace: string_to_replace.into(),
            alias: alias.into(),
            case_sensitive: None,
            word_boundaries: None,
        }
    }

    pub fn phoneme(
        string_to_replace: impl Into<String>,
        phoneme: impl Into<String>,
        alphabet: impl Into<String>,
    ) -> Self {
        Self::Phoneme {
            string_to_replace: string_to_replace.into(),
            phoneme: phoneme.into(),
            alphabet: alphabet.into(),
            case_sensitive: None,
            word_boundaries: None,
        }
    }

    /// The text this rule matches; also the key used to remove it.
    pub fn string_to_replace(&self) -> &str {
        match self {
            Self::Alias {
                string_to_replace, ..
            }
            | Self::Phoneme {
                string_to_replace, ..
            } => string_to_replace,
        }
    }
}

/// Dictionary metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PronunciationDictionary {
    pub id: String,
    pub latest_version_id: String,
    pub latest_version_rules_num: u64,
    pub name: String,
    pub description: Option<String>,
    pub created_by: String,
    pub creation_time_unix: i64,
    pub archived_time_unix: Option<i64>,
    pub permission_on_resource: Option<String>,
}

impl PronunciationDictionary {
    pub fn is_archived(&self) -> bool {
        self.archived_time_unix.is_some()
    }
}

/// Response of both creation endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddPronunciationDictionaryResponse {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub creation_time_unix: i64,
    pub version_id: String,
    pub version_rules_num: u64,
    pub description: Option<String>,
    pub permission_on_resource: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddDictionaryFromRulesRequest {
    pub name: String,
    pub rules: Vec<PronunciationRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_access: Option<WorkspaceAccess>,
}

/// Import a `.pls` lexicon file (multipart).
#[derive(Debug, Clone, Default)]
pub struct AddDictionaryFromFileRequest {
    pub name: String,
    pub file: Option<PathBuf>,
    pub description: Option<String>,
    pub workspace_access: Option<WorkspaceAccess>,
}

/// Filters and paging for the dictionary list.
#[derive(Debug, Clone, Default)]
pub struct ListDictionariesQuery {
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
    pub sort_direction: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PronunciationDictionariesPage {
    pub pronunciation_dictionaries: Vec<PronunciationDictionary>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// New version produced by a rule mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DictionaryRulesResponse {
    pub id: String,
    pub version_id: String,
    pub version_rules_num: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateDictionaryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rules_are_tagged_by_type() {
        let rules = vec![
            PronunciationRule::alias("UN", "United Nations"),
            PronunciationRule::phoneme("tomato", "/təˈmeɪtoʊ/", "ipa"),
        ];
        assert_eq!(
            serde_json::to_value(&rules).unwrap(),
            json!([
                {"type": "alias", "string_to_replace": "UN", "alias": "United Nations"},
                {"type": "phoneme", "string_to_replace": "tomato", "phoneme": "/təˈmeɪtoʊ/", "alphabet": "ipa"}
            ])
        );
    }

    #[test]
    fn rule_round_trip_keeps_variant() {
        let rule: PronunciationRule = serde_json::from_value(json!({
            "type": "alias", "string_to_replace": "AI", "alias": "A I", "case_sensitive": true
        }))
        .unwrap();
        assert_eq!(rule.string_to_replace(), "AI");
        assert!(matches!(rule, PronunciationRule::Alias { case_sensitive: Some(true), .. }));
    }

    #[test]
    fn archive_update_sends_only_archived() {
        let req = UpdateDictionaryRequest {
            archived: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"archived": true}));
    }
}
