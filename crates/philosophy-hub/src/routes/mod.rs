//! Route definitions for the site.
//!
//! ## Routes
//!
//! - `GET /` - Home page
//! - `GET /philosophers` - Philosopher list
//! - `GET /philosophers/{name}` - Philosopher profile (any name, sets cookie)
//! - `GET /philosophies` - Philosophy catalog by category
//! - `GET /philosophies/{name}` - Philosophy details (404 when unknown)
//! - `GET /articles` - Articles
//! - `GET /quotes` - Quotes
//! - `POST /form` - Favourite philosopher submission (sets cookie)
//! - `GET /test500` - Always answers with the 500 page
//! - `GET /trigger-404` - Always answers with the 404 page
//!
//! ## Pipeline
//!
//! Static assets are tried first and short-circuit everything else. Other
//! requests pass through the request-context middleware, then the fault
//! renderer and panic catcher, then exactly one route or the 404 fallback.

mod diagnostics;
mod fallback;
mod favorite;
mod home;
mod philosophers;
mod philosophies;
mod reading;

use axum::Router;
use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderValue, Uri};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::context::request_context;
use crate::error::{panic_fault, render_faults};
use crate::state::AppState;

/// Cache lifetime for static assets (1 day).
const STATIC_CACHE_CONTROL: &str = "public, max-age=86400";

/// Build the complete site router, static assets included.
pub fn router(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();
    with_static_assets(&public_dir, pages(state))
}

/// All page routes, in declaration order.
fn pages(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(home::home_page))
        .route("/philosophers", get(philosophers::list))
        .route("/philosophers/{name}", get(philosophers::profile))
        .route("/philosophies", get(philosophies::list))
        .route("/philosophies/{name}", get(philosophies::details))
        .route("/articles", get(reading::articles))
        .route("/quotes", get(reading::quotes))
        .route("/form", post(favorite::submit))
        .route("/test500", get(diagnostics::test_500))
        .route("/trigger-404", get(fallback::not_found));

    with_request_pipeline(routes, state)
}

/// Wrap routes with the 404 fallback, fault handling and request context.
///
/// A known path requested with the wrong method is treated as unmatched.
fn with_request_pipeline(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::not_found)
        .layer(CatchPanicLayer::custom(panic_fault))
        .layer(middleware::from_fn_with_state(state.clone(), render_faults))
        .layer(middleware::from_fn(request_context))
        .with_state(state)
}

/// Serve files from `public_dir` ahead of `pages`.
///
/// Misses and non-GET methods fall through to `pages`. Asset responses get
/// a one-day cache lifetime; pages set their own `Cache-Control`.
fn with_static_assets(public_dir: &str, pages: Router) -> Router {
    let assets = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(pages);

    Router::new()
        .fallback_service(assets)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(STATIC_CACHE_CONTROL),
        ))
}

/// The request URL as the client sent it: path plus query.
fn request_url(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
