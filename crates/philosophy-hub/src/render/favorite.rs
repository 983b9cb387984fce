//! Confirmation page for the favourite-philosopher form.

use maud::{Markup, html};

use super::components::{page_shell, segment_href};
use crate::context::RequestContext;

const TITLE: &str = "Your Favorite Philosopher";

/// Render the confirmation for a submitted favourite.
pub fn render(name: &str, site_name: &str, ctx: &RequestContext) -> Markup {
    let body = html! {
        div class="card" {
            h1 class="page-title" { (TITLE) }
            p class="lead" { "You chose " strong { (name) } "." }
            p { "We will remember it for the next fifteen minutes." }
            a class="back" href=(segment_href("/philosophers/", name)) { "Visit " (name) }
        }
    };

    page_shell(TITLE, site_name, ctx, body)
}
