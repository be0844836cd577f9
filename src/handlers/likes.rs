use serde::Serialize;
use worker::*;

use crate::counter;
use crate::respond;

#[derive(Debug, Serialize)]
struct LikeCount {
    slug: String,
    count: u64,
}

fn like_count(slug: &str, count: u64) -> LikeCount {
    LikeCount {
        slug: slug.to_string(),
        count,
    }
}

/// Current like count for a slug. Route: `/likes?slug=...`
pub async fn read(env: &Env, slug: &str) -> Result<Response> {
    let kv = env.kv(counter::KV_BINDING)?;

    match counter::read(&kv, slug).await {
        Ok(count) => respond::json(&like_count(slug, count), 200),
        Err(e) => {
            console_log!("[likes] read failed for {}: {:?}", slug, e);
            respond::exception(&e)
        }
    }
}

/// Records one like event and returns the post-increment count.
/// Route: `/hit?slug=...`
pub async fn hit(env: &Env, slug: &str) -> Result<Response> {
    let kv = env.kv(counter::KV_BINDING)?;

    match counter::increment(&kv, slug).await {
        Ok(count) => {
            console_log!("[likes] hit slug={} count={}", slug, count);
            respond::json(&like_count(slug, count), 200)
        }
        Err(e) => {
            console_log!("[likes] increment failed for {}: {:?}", slug, e);
            respond::exception(&e)
        }
    }
}
