use worker::*;

use crate::utils::respond;

pub fn handle(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    respond::json(&serde_json::json!({
        "status": "ok",
        "timestamp": Date::now().as_millis(),
    }))
}
