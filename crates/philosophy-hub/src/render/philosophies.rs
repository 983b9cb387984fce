//! Philosophy catalog and detail pages.

use maud::{Markup, html};

use super::components::{page_shell, segment_href};
use crate::catalog::{Catalog, PhilosophyMatch};
use crate::context::RequestContext;

/// Render the catalog grouped by category.
pub fn render_list(catalog: &Catalog, site_name: &str, ctx: &RequestContext) -> Markup {
    let body = html! {
        h1 class="page-title" { "Philosophies" }
        @for category in catalog.categories() {
            section class="category" {
                h2 { (category.name) }
                ul {
                    @for p in category.philosophies {
                        li { a href=(segment_href("/philosophies/", p.name)) { (p.name) } }
                    }
                }
            }
        }
    };

    page_shell("Philosophies", site_name, ctx, body)
}

/// Render one philosophy with its category and description.
pub fn render_details(found: &PhilosophyMatch, site_name: &str, ctx: &RequestContext) -> Markup {
    let name = found.philosophy.name;

    let body = html! {
        div class="card" {
            span class="badge" { (found.category) }
            h1 class="page-title" { (name) }
            p class="description" { (found.philosophy.description) }
            a class="back" href="/philosophies" { "All philosophies" }
        }
    };

    page_shell(name, site_name, ctx, body)
}
