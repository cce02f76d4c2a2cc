use worker::*;

mod handlers;
mod scraper;
mod utils;

#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    // Strip trailing slash (except root) so /api/download/ matches /api/download
    let url = req.url()?;
    let path = url.path().to_string();

    let req = if path.len() > 1 && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/');
        let mut new_url = url.clone();
        new_url.set_path(trimmed);
        Request::new_with_init(
            new_url.as_str(),
            &RequestInit {
                method: req.method(),
                headers: req.headers().clone(),
                ..Default::default()
            },
        )?
    } else {
        req
    };

    // Outermost safety net: anything a handler lets escape becomes a 500
    // carrying only the error message.
    match build_router().run(req, env).await {
        Ok(resp) => Ok(resp),
        Err(e) => {
            console_log!("[worker] unhandled error: {:?}", e);
            utils::respond::error(500, &e.to_string())
        }
    }
}

fn build_router() -> Router<'static, ()> {
    Router::new()
        .get("/", handlers::home::handle)
        .get("/health", handlers::health::handle)
        .get("/api/test", handlers::test::handle)
        .get_async("/api/download", |req, ctx| async move {
            handlers::download::handle(req, ctx).await
        })
        .get_async("/api/profile/:username", |req, ctx| async move {
            handlers::profile::handle(req, ctx).await
        })
}
