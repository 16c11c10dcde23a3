//! HTTP transport helpers

pub mod client;
pub mod interceptor;

/// Mask a secret for display, keeping a short prefix and suffix.
///
/// Values of 16 characters or fewer are fully masked.
pub fn mask_sensitive_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 16 {
        return "*".repeat(chars.len().max(3));
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Render headers for debug logging with credentials masked.
pub fn format_headers_for_logging(headers: &reqwest::header::HeaderMap) -> String {
    let mut rendered: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            let lower = name.as_str().to_ascii_lowercase();
            let value = if value.is_sensitive()
                || lower.contains("key")
                || lower.contains("authorization")
                || lower.contains("token")
            {
                mask_sensitive_value(value.to_str().unwrap_or("<binary>"))
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            format!("{}: {value}", name.as_str())
        })
        .collect();
    rendered.sort();
    rendered.join(", ")
}
