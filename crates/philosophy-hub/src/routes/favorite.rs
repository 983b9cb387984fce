//! Favourite-philosopher form submission.

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::context::{RequestContext, remember_philosopher};
use crate::error::HubError;
use crate::render;
use crate::state::AppState;

/// Message returned when the form arrives without a philosopher.
pub const MISSING_PHILOSOPHER: &str = "Please enter a philosopher.";

/// Urlencoded body of `POST /form`.
#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    philosopher: Option<String>,
}

/// `POST /form` - remember the submitted philosopher and confirm it.
///
/// A missing, empty or unreadable body is a client error.
pub async fn submit(
    State(state): State<AppState>,
    ctx: RequestContext,
    jar: CookieJar,
    form: Result<Form<FavoriteForm>, FormRejection>,
) -> Result<(CookieJar, Response), HubError> {
    let name = match form {
        Ok(Form(FavoriteForm {
            philosopher: Some(name),
        })) if !name.is_empty() => name,
        Ok(_) => return Err(HubError::InvalidForm(MISSING_PHILOSOPHER.to_string())),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable form body");
            return Err(HubError::InvalidForm(MISSING_PHILOSOPHER.to_string()));
        }
    };

    let jar = remember_philosopher(jar, &name);
    let page = render::favorite::render(&name, &state.config.site_name, &ctx);
    Ok((jar, render::html_response(StatusCode::OK, page)))
}
