use worker::*;

use crate::scraper;
use crate::scraper::fetch;
use crate::utils::instagram::extract_shortcode;
use crate::utils::respond;

const DOWNLOAD_HINT: &str =
    "Right-click the video and choose \"Save video as...\" to download it";

/// `GET /api/download?url=<post or reel URL>`
///
/// Classifies the URL, fetches the post page once, and runs the extraction
/// pipeline over the body. Unsupported URL shapes are rejected before any
/// outbound request is made.
pub async fn handle(req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    let req_url = req.url().map_err(|e| Error::RustError(e.to_string()))?;

    let Some(target) = respond::query_param(&req_url, "url") else {
        return respond::error(400, "url query parameter is required");
    };

    let Some(shortcode) = extract_shortcode(&target) else {
        return respond::error(400, "Unsupported URL: only Instagram reel and post links are accepted");
    };
    console_log!("[download] shortcode={} url={}", shortcode, target);

    let page_url = format!("https://www.instagram.com/p/{shortcode}/");
    let html = match fetch::fetch_page(&page_url, fetch::post_headers()?).await {
        Ok(html) => html,
        Err(e) => {
            console_log!("[download] fetch failed for {}: {}", shortcode, e);
            return respond::fetch_error(&e);
        }
    };

    match scraper::extract_post(&html) {
        Some(media) => {
            console_log!("[download] extracted video for {}", shortcode);
            let mut body = serde_json::to_value(&media)
                .map_err(|e| Error::RustError(e.to_string()))?;
            body["success"] = serde_json::Value::Bool(true);
            body["type"] = serde_json::Value::from("reel");
            body["downloadUrl"] = serde_json::Value::from(media.video_url);
            body["message"] = serde_json::Value::from(DOWNLOAD_HINT);
            respond::json(&body)
        }
        None => {
            console_log!("[download] no strategy matched for {}", shortcode);
            respond::error(404, "Video not found: the post may be private or not contain a video")
        }
    }
}
