use url::Url;
use worker::*;

use crate::config::Provider;
use crate::respond;
use crate::scraper;
use crate::utils::query::get_query_param;

/// oEmbed endpoint: `/oembed?url=...`
///
/// Fetches the target page, scrapes its Open Graph tags, and answers with a
/// minimal photo-type oEmbed payload.
pub async fn handle(url: &Url, env: &Env) -> Result<Response> {
    let target = get_query_param(url, "url").unwrap_or_default();
    if target.is_empty() {
        return respond::error_code("missing url", 400);
    }

    let provider = Provider::from_env(env);

    match scraper::fetch_oembed(&target, &provider).await {
        Ok(Some(embed)) => respond::json(&embed, 200),
        Ok(None) => respond::error_code("fetch_failed", 502),
        Err(e) => {
            console_log!("[oembed] fetch error for {}: {:?}", target, e);
            respond::exception(&e)
        }
    }
}
