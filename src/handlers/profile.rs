use worker::*;

use crate::scraper;
use crate::scraper::fetch;
use crate::utils::respond;

/// `GET /api/profile/:username`
///
/// Any non-empty username is forwarded as-is; existence is decided by the
/// fetch and extraction outcome, not by shape validation.
pub async fn handle(_req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let username = ctx.param("username").cloned().unwrap_or_default();
    if username.is_empty() {
        return respond::error(400, "username is required");
    }
    console_log!("[profile] username={}", username);

    let page_url = format!("https://www.instagram.com/{username}/");
    let html = match fetch::fetch_page(&page_url, fetch::profile_headers()?).await {
        Ok(html) => html,
        Err(e) => {
            console_log!("[profile] fetch failed for {}: {}", username, e);
            return respond::fetch_error(&e);
        }
    };

    match scraper::extract_profile(&html, &username) {
        Some(profile) => {
            console_log!("[profile] extracted profile for {}", username);
            let mut body = serde_json::to_value(&profile)
                .map_err(|e| Error::RustError(e.to_string()))?;
            body["success"] = serde_json::Value::Bool(true);
            respond::json(&body)
        }
        None => {
            console_log!("[profile] no strategy matched for {}", username);
            respond::error(404, "Profile picture not found: the profile may be private or not exist")
        }
    }
}
