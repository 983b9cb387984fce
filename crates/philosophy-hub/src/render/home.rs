//! Home page with the favourite-philosopher form.

use maud::{Markup, html};

use super::components::page_shell;
use crate::context::RequestContext;

/// Render the home page.
pub fn render(site_name: &str, ctx: &RequestContext) -> Markup {
    let body = html! {
        div class="card" {
            h1 class="page-title" { "Welcome to " (site_name) }
            p class="lead" {
                "A small guide to the thinkers and schools of thought that shaped how we reason, live and govern ourselves."
            }
            ul {
                li { a href="/philosophers" { "Meet the philosophers" } }
                li { a href="/philosophies" { "Explore the philosophies" } }
                li { a href="/articles" { "Read the articles" } }
                li { a href="/quotes" { "Browse the quotes" } }
            }
        }

        div class="card" style="margin-top:1.25rem" {
            h2 { "Who is your favourite philosopher?" }
            form class="form" method="post" action="/form" {
                input type="text" name="philosopher" placeholder="e.g. Epictetus" required;
                button type="submit" { "Submit" }
            }
        }
    };

    page_shell(site_name, site_name, ctx, body)
}
