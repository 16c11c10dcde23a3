//! Path canonicalization
//!
//! Both sides of the comparison are reduced to the same key shape so that
//! `/voices/{voice_id}` from the OpenAPI document and `/voices/{voice_id}`,
//! `/voices/{id}` or `/voices/*` from the client source all compare equal.

use lazy_static::lazy_static;
use regex::Regex;

/// Host stripped from URLs written without a scheme.
pub const VENDOR_HOST: &str = "api.elevenlabs.io";

lazy_static! {
    static ref SCHEME_AND_HOST: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/?#]*").unwrap();
    static ref REPEATED_SLASHES: Regex = Regex::new(r"/{2,}").unwrap();
    static ref BRACE_PARAM: Regex = Regex::new(r"\{[^{}]*\}").unwrap();
}

/// Reduce a URL or path template to its comparison key.
///
/// Steps, in order: strip `scheme://host`; strip a leading vendor host;
/// drop the query and fragment; ensure a leading `/`; collapse repeated
/// slashes; drop a trailing slash (except for `/`); replace every
/// `{param}` with `*`. The result is a fixed point: canonicalizing it again
/// yields the same string.
pub fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scheme = SCHEME_AND_HOST.replace(trimmed, "");
    let mut path: &str = &without_scheme;
    if let Some(rest) = path.strip_prefix(VENDOR_HOST) {
        path = rest;
    }
    if let Some(end) = path.find(['?', '#']) {
        path = &path[..end];
    }

    let mut out = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        out.push('/');
    }
    out.push_str(path);

    let collapsed = REPEATED_SLASHES.replace_all(&out, "/");
    let mut out = collapsed.into_owned();
    while out.len() > 1 && out.ends_with('/') {
        out.pop();
    }

    // Nested braces expose a new innermost `{..}` after each pass.
    loop {
        let replaced = BRACE_PARAM.replace_all(&out, "*");
        if replaced == out {
            return out;
        }
        out = replaced.into_owned();
    }
}

/// Prepend `prefix` to a canonical client path unless it already carries it.
///
/// Client paths are relative to a versioned base URL (`/voices`), while the
/// OpenAPI document lists absolute ones (`/v1/voices`).
pub fn apply_prefix(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() || prefix == "/" {
        return path.to_string();
    }
    let prefix = canonicalize(prefix);
    if path == prefix || path.starts_with(&format!("{prefix}/")) {
        return path.to_string();
    }
    if path == "/" {
        return prefix;
    }
    format!("{prefix}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url_is_reduced_to_path_template() {
        assert_eq!(
            canonicalize("https://api.elevenlabs.io/v1/voices/{id}/samples/{sid}/?x=1"),
            "/v1/voices/*/samples/*"
        );
    }

    #[test]
    fn parameter_names_do_not_matter() {
        assert_eq!(canonicalize("/voices/{voice_id}"), "/voices/*");
        assert_eq!(canonicalize("/voices/{voiceID}"), "/voices/*");
        assert_eq!(canonicalize("/voices/*"), "/voices/*");
        assert_eq!(canonicalize("/voices/{a{b}}"), "/voices/*");
    }

    #[test]
    fn host_without_scheme_and_missing_slash() {
        assert_eq!(canonicalize("api.elevenlabs.io/v1/models"), "/v1/models");
        assert_eq!(canonicalize("voices"), "/voices");
        assert_eq!(canonicalize("//voices///add//"), "/voices/add");
    }

    #[test]
    fn root_keeps_its_slash() {
        assert_eq!(canonicalize("/"), "/");
        assert_eq!(canonicalize(""), "/");
        assert_eq!(canonicalize("https://example.com"), "/");
        assert_eq!(canonicalize("https://example.com/?q=1"), "/");
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let samples = [
            "https://api.elevenlabs.io/v1/voices/{id}/samples/{sid}/?x=1",
            "api.elevenlabs.io//v1//convai/agents/{agent_id}/",
            "/pronunciation-dictionaries/{id}/{version_id}/download#frag",
            "http://localhost:8080",
            "relative/{a}{b}/path/",
            "/",
            "",
            "/studio/projects/*/chapters/*",
            "/voices/{a{b}}",
            "/voices/{{x}}/{y{z{w}}}",
        ];
        for sample in samples {
            let once = canonicalize(sample);
            assert_eq!(canonicalize(&once), once, "not a fixed point for {sample:?}");
        }
    }

    #[test]
    fn prefix_is_added_once() {
        assert_eq!(apply_prefix("/v1", "/voices"), "/v1/voices");
        assert_eq!(apply_prefix("/v1", "/v1/voices"), "/v1/voices");
        assert_eq!(apply_prefix("/v1", "/v1"), "/v1");
        assert_eq!(apply_prefix("/v1", "/"), "/v1");
        assert_eq!(apply_prefix("v1/", "/voices"), "/v1/voices");
        assert_eq!(apply_prefix("", "/voices"), "/voices");
        // Another versioned path that merely starts with the same characters.
        assert_eq!(apply_prefix("/v1", "/v10/x"), "/v1/v10/x");
    }
}
