//! 404 and 500 pages.

use maud::{Markup, html};

use super::components::error_shell;
use crate::config::Environment;
use crate::error::Fault;

/// Message shown instead of fault details in production.
pub const GENERIC_FAULT_MESSAGE: &str = "Something went wrong.";

/// Render the not-found page for `url`.
pub fn not_found(title: &str, url: &str) -> Markup {
    error_shell(
        title,
        html! {
            p { "Nothing lives at " code { (url) } "." }
        },
    )
}

/// Render the server error page.
///
/// In production only a generic message is shown; otherwise the fault
/// message and its trace.
pub fn server_error(fault: &Fault, environment: Environment) -> Markup {
    let body = if environment.is_production() {
        html! {
            p { (GENERIC_FAULT_MESSAGE) }
        }
    } else {
        html! {
            p { (fault.message) }
            pre class="trace" { (fault.trace) }
        }
    };

    error_shell("Server Error", body)
}
