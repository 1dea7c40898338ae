//! URL utilities for consistent endpoint handling

/// Normalize a URL by trimming surrounding whitespace
///
/// The path is kept as typed; `/api/chat` and `/api/chat/` are different routes
/// on some servers.
///
/// # Examples
///
/// ```
/// use dastur::utils::url::normalize_url;
///
/// assert_eq!(normalize_url("http://127.0.0.1:8000/api/chat"), "http://127.0.0.1:8000/api/chat");
/// assert_eq!(normalize_url(" http://127.0.0.1:8000/api/chat/ "), "http://127.0.0.1:8000/api/chat/");
/// ```
pub fn normalize_url(url: &str) -> String {
    url.trim().to_string()
}

/// Validate and normalize a chat endpoint URL
///
/// Only `http` and `https` endpoints with a host are accepted.
///
/// # Examples
///
/// ```
/// use dastur::utils::url::parse_endpoint;
///
/// assert_eq!(
///     parse_endpoint(" https://example.com/api/chat/").unwrap(),
///     "https://example.com/api/chat/"
/// );
/// assert!(parse_endpoint("ftp://example.com").is_err());
/// ```
pub fn parse_endpoint(url: &str) -> Result<String, String> {
    let normalized = normalize_url(url);
    let rest = normalized
        .strip_prefix("http://")
        .or_else(|| normalized.strip_prefix("https://"))
        .ok_or_else(|| format!("endpoint must start with http:// or https://: {url}"))?;

    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() {
        return Err(format!("endpoint is missing a host: {url}"));
    }

    Ok(normalized)
}
