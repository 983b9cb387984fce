//! Articles and quotes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::context::RequestContext;
use crate::render;
use crate::state::AppState;

pub async fn articles(State(state): State<AppState>, ctx: RequestContext) -> Response {
    render::html_response(
        StatusCode::OK,
        render::reading::render_articles(&state.config.site_name, &ctx),
    )
}

pub async fn quotes(State(state): State<AppState>, ctx: RequestContext) -> Response {
    render::html_response(
        StatusCode::OK,
        render::reading::render_quotes(&state.config.site_name, &ctx),
    )
}
