use worker::*;

use crate::utils::respond;

pub fn handle(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    respond::json(&serde_json::json!({
        "message": "Instagram Downloader API",
        "status": "active",
        "docs": "/api/test",
    }))
}
