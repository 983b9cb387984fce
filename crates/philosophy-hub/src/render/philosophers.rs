//! Philosopher list and profile pages.

use maud::{Markup, html};

use super::components::{page_shell, portrait, segment_href};
use crate::catalog::{self, PhilosopherEntry, Portraits};
use crate::context::RequestContext;

/// Render the grid of all listed philosophers.
pub fn render_list(
    philosophers: &[PhilosopherEntry],
    portraits: &Portraits,
    site_name: &str,
    ctx: &RequestContext,
) -> Markup {
    let body = html! {
        h1 class="page-title" { "Philosophers" }
        div class="grid" {
            @for p in philosophers {
                a class="grid-item" href=(segment_href("/philosophers/", p.name)) {
                    (portrait(p.name, portraits.get(p)))
                    span { (p.name) }
                }
            }
        }
    };

    page_shell("Philosophers", site_name, ctx, body)
}

/// Render a philosopher profile.
///
/// Any name is accepted; a portrait is shown only for listed philosophers.
pub fn render_profile(
    name: &str,
    portraits: &Portraits,
    site_name: &str,
    ctx: &RequestContext,
) -> Markup {
    let entry = catalog::find_philosopher(name);

    let body = html! {
        div class="card" {
            @if let Some(entry) = entry {
                (portrait(entry.name, portraits.get(entry)))
            }
            h1 class="page-title" { (name) }
            p class="lead" {
                "You are reading about " (name) ". "
                "This page is remembered as your last visited philosopher."
            }
            a class="back" href="/philosophers" { "All philosophers" }
        }
    };

    page_shell(name, site_name, ctx, body)
}
