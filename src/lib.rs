use worker::*;

mod config;
mod counter;
mod handlers;
mod respond;
mod scraper;
mod utils;

use utils::query::slug_param;

/// Endpoint classification by path suffix. The worker may be mounted under
/// an arbitrary route prefix, so only the tail of the path matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Oembed,
    Likes,
    Hit,
    NotFound,
}

fn route_for_path(path: &str) -> Route {
    if path.ends_with("/oembed") {
        Route::Oembed
    } else if path.ends_with("/likes") {
        Route::Likes
    } else if path.ends_with("/hit") {
        Route::Hit
    } else {
        Route::NotFound
    }
}

#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    // Preflight short-circuits before any path or parameter inspection
    if req.method() == Method::Options {
        return respond::preflight();
    }

    let url = req.url()?;
    let path = url.path().to_string();

    match route_for_path(&path) {
        Route::Oembed => handlers::oembed::handle(&url, &env).await,
        route => {
            // Every non-oembed endpoint operates on a slug
            let Some(slug) = slug_param(&url) else {
                return respond::error_code("missing slug", 400);
            };

            match route {
                Route::Likes => handlers::likes::read(&env, &slug).await,
                Route::Hit => handlers::likes::hit(&env, &slug).await,
                _ => {
                    console_log!("[router] no route for {}", path);
                    respond::not_found()
                }
            }
        }
    }
}
