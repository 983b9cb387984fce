//! Philosopher list and profile routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use crate::catalog::PHILOSOPHERS;
use crate::context::{RequestContext, remember_philosopher};
use crate::render;
use crate::state::AppState;

/// `GET /philosophers` - the fixed philosopher list.
pub async fn list(State(state): State<AppState>, ctx: RequestContext) -> Response {
    render::html_response(
        StatusCode::OK,
        render::philosophers::render_list(
            PHILOSOPHERS,
            &state.portraits,
            &state.config.site_name,
            &ctx,
        ),
    )
}

/// `GET /philosophers/{name}` - profile page for any name.
///
/// The name is echoed as given and remembered in the last-philosopher
/// cookie. It is not checked against the list, so this never 404s.
pub async fn profile(
    State(state): State<AppState>,
    ctx: RequestContext,
    jar: CookieJar,
    Path(name): Path<String>,
) -> (CookieJar, Response) {
    let jar = remember_philosopher(jar, &name);
    let page = render::philosophers::render_profile(
        &name,
        &state.portraits,
        &state.config.site_name,
        &ctx,
    );
    (jar, render::html_response(StatusCode::OK, page))
}
