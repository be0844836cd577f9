use url::Url;

/// Extracts a single query parameter value from a URL.
pub fn get_query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// The `slug` query parameter, trimmed. Whitespace-only slugs are rejected
/// along with missing ones.
pub fn slug_param(url: &Url) -> Option<String> {
    get_query_param(url, "slug")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
