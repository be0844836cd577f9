use worker::kv::KvStore;
use worker::Result;

/// KV namespace binding holding the per-slug counters.
pub const KV_BINDING: &str = "LIKES";

fn counter_key(slug: &str) -> String {
    format!("slug:{slug}")
}

/// Absent, malformed, or out-of-range stored values all read as zero.
pub fn parse_count(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// Next count plus its stored encoding, from the current raw value.
fn bump(raw: Option<String>) -> (u64, String) {
    let count = parse_count(raw) + 1;
    (count, count.to_string())
}

/// Current count for a slug. Never writes.
pub async fn read(kv: &KvStore, slug: &str) -> Result<u64> {
    let value = kv.get(&counter_key(slug)).text().await?;
    Ok(parse_count(value))
}

/// Read-then-write increment by one, returning the new count.
///
/// The store has no compare-and-swap, so concurrent increments to the same
/// slug can race and lose updates.
pub async fn increment(kv: &KvStore, slug: &str) -> Result<u64> {
    let key = counter_key(slug);
    let (count, encoded) = bump(kv.get(&key).text().await?);

    kv.put(&key, encoded)?.execute().await?;

    Ok(count)
}
