//! Error types for the site.
//!
//! Errors are rendered as HTML error pages rather than JSON, except a
//! rejected form submission which answers with a short plain-text message.
//!
//! Internal faults are not rendered here: the response only carries a
//! [`Fault`] extension, and the [`render_faults`] middleware turns it into the
//! 500 page, since only it knows whether the site runs in production.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt::Write;

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::render;
use crate::state::AppState;

/// Site error type returned by route handlers.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// A submitted form was missing a required value.
    #[error("invalid form submission: {0}")]
    InvalidForm(String),

    /// Nothing to show for the requested URL.
    #[error("not found: {url}")]
    NotFound {
        /// Page title for the 404 page.
        title: &'static str,
        /// Original request URL (path and query).
        url: String,
    },

    /// Any fault raised while handling the request.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Details of an internal fault, handed from the failing handler to the
/// 500 renderer through response extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub message: String,
    pub trace: String,
}

impl Fault {
    fn respond(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidForm(message) => {
                tracing::debug!(message = %message, "rejected form submission");
                (
                    StatusCode::BAD_REQUEST,
                    [
                        (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                        (header::CACHE_CONTROL, "no-cache"),
                    ],
                    message,
                )
                    .into_response()
            }
            Self::NotFound { title, url } => {
                tracing::debug!(url = %url, "not found");
                render::html_response(StatusCode::NOT_FOUND, render::errors::not_found(title, &url))
            }
            Self::Internal(err) => {
                tracing::error!(error = ?err, "SERVER ERROR");
                Fault {
                    message: err.to_string(),
                    trace: fault_trace(&err),
                }
                .respond()
            }
        }
    }
}

/// Cause chain plus a stack backtrace.
///
/// Uses the backtrace captured with the error when there is one, otherwise
/// captures one here regardless of `RUST_BACKTRACE`.
fn fault_trace(err: &anyhow::Error) -> String {
    let mut trace = err.to_string();

    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        trace.push_str("\n\nCaused by:");
        for (i, cause) in causes.enumerate() {
            let _ = write!(trace, "\n    {i}: {cause}");
        }
    }

    let captured = err.backtrace();
    let _ = if captured.status() == BacktraceStatus::Captured {
        write!(trace, "\n\nStack backtrace:\n{captured}")
    } else {
        write!(trace, "\n\nStack backtrace:\n{}", Backtrace::force_capture())
    };

    trace
}

/// Panic handler for `CatchPanicLayer`: a panicking handler is reported as
/// an internal fault.
pub fn panic_fault(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };

    tracing::error!(panic = %message, "SERVER ERROR: handler panicked");

    Fault {
        trace: format!("panicked: {message}"),
        message,
    }
    .respond()
}

/// Middleware rendering the 500 page for any response carrying a [`Fault`].
///
/// In production the page shows a generic message and no trace.
pub async fn render_faults(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<Fault>() {
        Some(fault) => render::html_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            render::errors::server_error(&fault, state.config.environment),
        ),
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_form() {
        let err = HubError::InvalidForm("Please enter a philosopher.".to_string());
        assert_eq!(
            err.to_string(),
            "invalid form submission: Please enter a philosopher."
        );
    }

    #[test]
    fn error_display_not_found() {
        let err = HubError::NotFound {
            title: "Page Not Found",
            url: "/nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "not found: /nowhere");
    }

    #[test]
    fn error_into_response_invalid_form_is_plain_text() {
        let response = HubError::InvalidForm("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn error_into_response_not_found() {
        let response = HubError::NotFound {
            title: "Page Not Found",
            url: "/x".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_into_response_internal_carries_fault() {
        let response = HubError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let fault = response.extensions().get::<Fault>().unwrap();
        assert_eq!(fault.message, "boom");
        assert!(fault.trace.starts_with("boom"));
        assert!(fault.trace.contains("Stack backtrace:"));
    }

    #[test]
    fn error_into_response_invalid_form_is_not_cached() {
        let response = HubError::InvalidForm("nope".to_string()).into_response();
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
    }

    #[test]
    fn fault_trace_lists_causes() {
        let err = anyhow::anyhow!("disk unreadable").context("loading page");
        let trace = fault_trace(&err);
        assert!(trace.starts_with("loading page"));
        assert!(trace.contains("Caused by:\n    0: disk unreadable"));
        assert!(trace.len() > "loading page".len() + "Stack backtrace:".len());
    }

    #[test]
    fn panic_payloads_become_faults() {
        let response = panic_fault(Box::new("static str panic"));
        let fault = response.extensions().get::<Fault>().unwrap();
        assert_eq!(fault.message, "static str panic");

        let response = panic_fault(Box::new(String::from("owned panic")));
        let fault = response.extensions().get::<Fault>().unwrap();
        assert_eq!(fault.message, "owned panic");

        let response = panic_fault(Box::new(42_u8));
        let fault = response.extensions().get::<Fault>().unwrap();
        assert_eq!(fault.message, "handler panicked");
    }
}
