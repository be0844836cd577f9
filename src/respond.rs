use serde::Serialize;
use worker::*;

/// CORS contract shared by every response this worker produces, success or
/// error. `no-store` keeps intermediaries from caching counter reads.
fn cors_headers() -> Result<Headers> {
    let headers = Headers::new();
    headers.set("Access-Control-Allow-Origin", "*")?;
    headers.set("Access-Control-Allow-Methods", "GET,OPTIONS")?;
    headers.set("Access-Control-Allow-Headers", "content-type")?;
    headers.set("Cache-Control", "no-store")?;
    Ok(headers)
}

/// Empty-bodied answer to an OPTIONS preflight.
pub fn preflight() -> Result<Response> {
    Ok(Response::empty()?.with_headers(cors_headers()?))
}

pub fn json<T: Serialize>(payload: &T, status: u16) -> Result<Response> {
    let body = serde_json::to_string(payload)
        .map_err(|e| Error::RustError(format!("JSON serialization error: {e}")))?;

    let headers = cors_headers()?;
    headers.set("Content-Type", "application/json; charset=utf-8")?;

    Ok(Response::ok(body)?.with_headers(headers).with_status(status))
}

/// Machine-readable error body: `{"error": code}`.
pub fn error_code(code: &str, status: u16) -> Result<Response> {
    json(&serde_json::json!({ "error": code }), status)
}

/// Unexpected fault, with its text carried for diagnostics.
pub fn exception(err: &Error) -> Result<Response> {
    json(
        &serde_json::json!({ "error": "exception", "message": err.to_string() }),
        500,
    )
}

pub fn not_found() -> Result<Response> {
    Ok(Response::error("Not Found", 404)?.with_headers(cors_headers()?))
}
