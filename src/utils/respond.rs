use url::Url;
use worker::*;

use crate::scraper::fetch::FetchError;

/// Fully open CORS policy: this is a public, stateless read API.
fn cors() -> Cors {
    Cors::new()
        .with_origins(["*"])
        .with_methods(vec![Method::Get, Method::Options])
        .with_allowed_headers(["*"])
}

/// 200 JSON response with CORS headers.
pub fn json<T: serde::Serialize>(body: &T) -> Result<Response> {
    Response::from_json(body)?.with_cors(&cors())
}

/// `{success: false, error}` JSON response with the given status.
pub fn error(status: u16, message: &str) -> Result<Response> {
    Response::from_json(&serde_json::json!({
        "success": false,
        "error": message,
    }))?
    .with_status(status)
    .with_cors(&cors())
}

/// Maps a fetch failure to its HTTP status: timeouts are 408, everything
/// else (non-2xx upstream, transport faults) is surfaced as a 502 carrying
/// the upstream failure message.
pub fn fetch_error(err: &FetchError) -> Result<Response> {
    let status = match err {
        FetchError::Timeout => 408,
        FetchError::UpstreamStatus(_) | FetchError::Transport(_) => 502,
    };
    error(status, &err.to_string())
}

/// Extracts a single query parameter, treating an empty value as absent.
pub fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
