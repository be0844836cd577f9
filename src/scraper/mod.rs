pub mod opengraph;
pub mod types;

use worker::*;

use crate::config::Provider;
use self::types::OEmbed;

const FETCH_UA: &str =
    "Mozilla/5.0 (compatible; AgiComicsEmbed/1.0; +https://dileeplearning.github.io/agicomics/)";

/// Fetches the target page and folds its Open Graph tags into an oEmbed
/// payload.
///
/// `Ok(None)` means the target answered with a non-2xx status; transport
/// and body-read faults surface as `Err`. Redirects are followed (the
/// platform default). The body is scraped in full, no truncation.
pub async fn fetch_oembed(target: &str, provider: &Provider) -> Result<Option<OEmbed>> {
    let headers = Headers::new();
    headers.set("User-Agent", FETCH_UA)?;
    headers.set("Accept", "text/html,application/xhtml+xml")?;

    let mut init = RequestInit::new();
    init.with_method(Method::Get).with_headers(headers);

    let request = Request::new_with_init(target, &init)?;
    let mut resp = Fetch::Request(request).send().await?;

    let status = resp.status_code();
    if !(200..300).contains(&status) {
        console_log!("[scraper] upstream status={} for {}", status, target);
        return Ok(None);
    }

    let html = resp.text().await?;
    console_log!("[scraper] status={} html_len={} for {}", status, html.len(), target);

    let og = opengraph::extract(&html);
    Ok(Some(OEmbed::from_page(&og, target, &provider.name, &provider.url)))
}
