use serde::Serialize;

/// Shown as the embed title when the page offers neither an `og:title` nor
/// a `<title>`.
pub const FALLBACK_TITLE: &str = "AGI Comics";

/// Open Graph fields scraped from a page. Best-effort; any field may be
/// absent. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OgData {
    pub title: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Minimal photo-type oEmbed payload.
#[derive(Debug, Clone, Serialize)]
pub struct OEmbed {
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub provider_name: String,
    pub provider_url: String,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
}

impl OEmbed {
    /// Folds scraped tags into a payload that always carries something
    /// renderable: `title` falls back to the fixed site title, `url` to the
    /// originally requested target. Width and height are emitted only as a
    /// pair; `author_url` mirrors the page's canonical `og:url`.
    pub fn from_page(og: &OgData, target: &str, provider_name: &str, provider_url: &str) -> Self {
        let (width, height) = match (og.width, og.height) {
            (Some(w), Some(h)) => (Some(w), Some(h)),
            _ => (None, None),
        };

        OEmbed {
            version: "1.0".to_string(),
            kind: "photo".to_string(),
            provider_name: provider_name.to_string(),
            provider_url: provider_url.to_string(),
            title: og.title.clone().unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            url: og.image.clone().unwrap_or_else(|| target.to_string()),
            width,
            height,
            author_url: og.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = "https://example.com/comics/42";

    fn full_og() -> OgData {
        OgData {
            title: Some("Strip #42".to_string()),
            image: Some("https://cdn.example.com/42.png".to_string()),
            url: Some("https://example.com/comics/42/".to_string()),
            width: Some(800),
            height: Some(600),
        }
    }

    fn build(og: &OgData) -> OEmbed {
        OEmbed::from_page(og, TARGET, "AGI Comics", "https://example.com/")
    }

    #[test]
    fn carries_all_scraped_fields() {
        let embed = build(&full_og());
        assert_eq!(embed.version, "1.0");
        assert_eq!(embed.kind, "photo");
        assert_eq!(embed.title, "Strip #42");
        assert_eq!(embed.url, "https://cdn.example.com/42.png");
        assert_eq!(embed.width, Some(800));
        assert_eq!(embed.height, Some(600));
        assert_eq!(
            embed.author_url.as_deref(),
            Some("https://example.com/comics/42/")
        );
    }

    #[test]
    fn title_falls_back_to_site_title() {
        let embed = build(&OgData::default());
        assert_eq!(embed.title, FALLBACK_TITLE);
    }

    #[test]
    fn url_falls_back_to_requested_target() {
        let mut og = full_og();
        og.image = None;
        let embed = build(&og);
        assert_eq!(embed.url, TARGET);
    }

    #[test]
    fn width_without_height_is_dropped() {
        let mut og = full_og();
        og.height = None;
        let embed = build(&og);
        assert_eq!(embed.width, None);
        assert_eq!(embed.height, None);
    }

    #[test]
    fn height_without_width_is_dropped() {
        let mut og = full_og();
        og.width = None;
        let embed = build(&og);
        assert_eq!(embed.width, None);
        assert_eq!(embed.height, None);
    }

    #[test]
    fn author_url_absent_without_canonical_url() {
        let mut og = full_og();
        og.url = None;
        let embed = build(&og);
        assert_eq!(embed.author_url, None);
    }

    #[test]
    fn serializes_with_renamed_type_field() {
        let value = serde_json::to_value(build(&full_og())).unwrap();
        assert_eq!(value["type"], "photo");
        assert_eq!(value["version"], "1.0");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn serialization_omits_absent_optionals() {
        let value = serde_json::to_value(build(&OgData::default())).unwrap();
        assert!(value.get("width").is_none());
        assert!(value.get("height").is_none());
        assert!(value.get("author_url").is_none());
        assert_eq!(value["url"], TARGET);
    }
}
