//! Home page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::context::RequestContext;
use crate::render;
use crate::state::AppState;

/// Render the home page.
pub async fn home_page(State(state): State<AppState>, ctx: RequestContext) -> Response {
    render::html_response(
        StatusCode::OK,
        render::home::render(&state.config.site_name, &ctx),
    )
}
