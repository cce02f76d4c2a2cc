use std::time::Duration;

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use thiserror::Error;
use worker::*;

const FETCH_TIMEOUT_SECS: u64 = 30;

const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Why a page fetch failed. Handlers map these onto HTTP status codes.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream request timed out after 30s")]
    Timeout,
    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),
    #[error("upstream request failed: {0}")]
    Transport(String),
}

/// Full browser-emulating header set for post/reel page fetches.
pub fn post_headers() -> Result<Headers> {
    let headers = Headers::new();
    headers.set("User-Agent", CHROME_UA)?;
    headers.set(
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    )?;
    headers.set("Accept-Language", "en-US,en;q=0.9")?;
    headers.set("Accept-Encoding", "gzip, deflate, br")?;
    headers.set("DNT", "1")?;
    headers.set("Connection", "keep-alive")?;
    headers.set("Upgrade-Insecure-Requests", "1")?;
    Ok(headers)
}

/// Minimal header set for profile page fetches.
pub fn profile_headers() -> Result<Headers> {
    let headers = Headers::new();
    headers.set("User-Agent", CHROME_UA)?;
    Ok(headers)
}

/// Performs a single GET for a page body. One attempt, no retry.
///
/// The request races a 30-second delay; on expiry the in-flight fetch is
/// aborted and the call resolves to `FetchError::Timeout`. Non-2xx statuses
/// and transport failures also map to `FetchError` so a slow or blocked
/// upstream never reaches the extraction pipeline.
pub async fn fetch_page(url: &str, headers: Headers) -> std::result::Result<String, FetchError> {
    let mut init = RequestInit::new();
    init.with_method(Method::Get).with_headers(headers);
    let request =
        Request::new_with_init(url, &init).map_err(|e| FetchError::Transport(e.to_string()))?;

    let controller = AbortController::default();
    let signal = controller.signal();
    let mut fetch = Fetch::Request(request);

    let request_fut = fetch.send_with_signal(&signal);
    let timeout = Delay::from(Duration::from_secs(FETCH_TIMEOUT_SECS));
    pin_mut!(request_fut);
    pin_mut!(timeout);

    let mut resp = match select(request_fut, timeout).await {
        Either::Left((result, _)) => {
            result.map_err(|e| FetchError::Transport(e.to_string()))?
        }
        Either::Right(((), _)) => {
            console_log!("[fetch] timeout after {}s for {}", FETCH_TIMEOUT_SECS, url);
            controller.abort();
            return Err(FetchError::Timeout);
        }
    };

    let status = resp.status_code();
    if !(200..300).contains(&status) {
        console_log!("[fetch] status={} for {}", status, url);
        return Err(FetchError::UpstreamStatus(status));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    console_log!("[fetch] status={} body_len={} for {}", status, body.len(), url);
    Ok(body)
}
