use once_cell::sync::Lazy;
use regex::Regex;

use super::types::OgData;

// Best-effort tag matching, not an HTML parser. The patterns assume
// attribute order `property` then `content` and quoted values; reversed
// attribute order, unquoted variants, comments, and escaped entities are
// outside what they recognize.

fn content_pattern(property: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)<meta[^>]+property=["']{property}["'][^>]+content=["']([^"']+)["'][^>]*>"#
    ))
    .expect("tag pattern compiles")
}

fn numeric_pattern(property: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)<meta[^>]+property=["']{property}["'][^>]+content=["'](\d+)["'][^>]*>"#
    ))
    .expect("tag pattern compiles")
}

static OG_TITLE: Lazy<Regex> = Lazy::new(|| content_pattern("og:title"));
static OG_IMAGE: Lazy<Regex> = Lazy::new(|| content_pattern("og:image"));
static OG_URL: Lazy<Regex> = Lazy::new(|| content_pattern("og:url"));
static OG_IMAGE_WIDTH: Lazy<Regex> = Lazy::new(|| numeric_pattern("og:image:width"));
static OG_IMAGE_HEIGHT: Lazy<Regex> = Lazy::new(|| numeric_pattern("og:image:height"));
static TITLE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<title>([^<]+)</title>").expect("tag pattern compiles"));

fn first_capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Scrapes Open Graph tags from raw HTML text.
///
/// Each field takes the first case-insensitive match anywhere in the
/// document. Only the title falls back to the `<title>` tag text. Numeric
/// fields are absent (never zero) when missing or non-numeric.
pub fn extract(html: &str) -> OgData {
    OgData {
        title: first_capture(&OG_TITLE, html).or_else(|| first_capture(&TITLE_TAG, html)),
        image: first_capture(&OG_IMAGE, html),
        url: first_capture(&OG_URL, html),
        width: first_capture(&OG_IMAGE_WIDTH, html).and_then(|s| s.parse().ok()),
        height: first_capture(&OG_IMAGE_HEIGHT, html).and_then(|s| s.parse().ok()),
    }
}
