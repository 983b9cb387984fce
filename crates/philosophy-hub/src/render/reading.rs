//! Static reading pages: articles and quotes.

use maud::{Markup, html};

use super::components::{page_shell, segment_href};
use crate::context::RequestContext;

struct Article {
    title: &'static str,
    summary: &'static str,
    philosophy: &'static str,
}

const ARTICLES: &[Article] = &[
    Article {
        title: "The Dichotomy of Control",
        summary: "Epictetus divides the world into what is up to us and what is not. A short look at why that single distinction carries so much of Stoic practice.",
        philosophy: "Stoicism",
    },
    Article {
        title: "Pleasure Without Excess",
        summary: "Epicurus is remembered as a hedonist, yet his garden served bread and water. What he actually meant by pleasure, and why friendship mattered most.",
        philosophy: "Epicureanism",
    },
    Article {
        title: "Acting Without Forcing",
        summary: "Wu wei, often translated as non-action, is closer to acting in step with circumstances. Notes on the Tao Te Ching and the Zhuangzi.",
        philosophy: "Taoism",
    },
    Article {
        title: "Experience First",
        summary: "Locke's blank slate and Hume's bundle of perceptions: how the empiricists rebuilt knowledge from the senses upward.",
        philosophy: "Empiricism",
    },
];

/// Render the articles page.
pub fn render_articles(site_name: &str, ctx: &RequestContext) -> Markup {
    let body = html! {
        h1 class="page-title" { "Articles" }
        @for article in ARTICLES {
            div class="article card" {
                h2 { (article.title) }
                p { (article.summary) }
                a href=(segment_href("/philosophies/", article.philosophy)) {
                    "More on " (article.philosophy)
                }
            }
        }
    };

    page_shell("Articles", site_name, ctx, body)
}

const QUOTES: &[(&str, &str)] = &[
    ("The unexamined life is not worth living.", "Socrates"),
    (
        "You have power over your mind, not outside events. Realize this, and you will find strength.",
        "Marcus Aurelius",
    ),
    (
        "We are what we repeatedly do. Excellence, then, is not an act, but a habit.",
        "Aristotle",
    ),
    (
        "It is not things that disturb us, but our judgements about things.",
        "Epictetus",
    ),
    ("The journey of a thousand miles begins with a single step.", "Laozi"),
    (
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
    ),
    ("I think, therefore I am.", "Rene Descartes"),
    ("He who has a why to live can bear almost any how.", "Friedrich Nietzsche"),
];

/// Render the quotes page.
pub fn render_quotes(site_name: &str, ctx: &RequestContext) -> Markup {
    let body = html! {
        h1 class="page-title" { "Daily Quotes" }
        @for (quote, author) in QUOTES {
            blockquote {
                (quote)
                cite {
                    a href=(segment_href("/philosophers/", author)) { (author) }
                }
            }
        }
    };

    page_shell("Daily Quotes", site_name, ctx, body)
}
