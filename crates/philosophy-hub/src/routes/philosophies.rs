//! Philosophy catalog routes.

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::context::RequestContext;
use crate::error::HubError;
use crate::render;
use crate::state::AppState;

/// `GET /philosophies` - catalog grouped by category.
pub async fn list(State(state): State<AppState>, ctx: RequestContext) -> Response {
    render::html_response(
        StatusCode::OK,
        render::philosophies::render_list(&state.catalog, &state.config.site_name, &ctx),
    )
}

/// `GET /philosophies/{name}` - one philosophy, or 404 when not cataloged.
pub async fn details(
    State(state): State<AppState>,
    ctx: RequestContext,
    OriginalUri(uri): OriginalUri,
    Path(name): Path<String>,
) -> Result<Response, HubError> {
    let found = state.catalog.find(&name).ok_or_else(|| HubError::NotFound {
        title: "Philosophy Not Found",
        url: super::request_url(&uri),
    })?;

    Ok(render::html_response(
        StatusCode::OK,
        render::philosophies::render_details(&found, &state.config.site_name, &ctx),
    ))
}
