//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::context::{DeviceClass, RequestContext};

/// Inline CSS for all site pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f7f5f0;--fg:#1d1b16;--fg2:#4f4a3f;--fg3:#8a8272;--accent:#8a3b12;--accent-hover:#6b2d0c;--surface:#fffdf8;--border:rgba(138,59,18,.18);--serif:Georgia,"Times New Roman",serif}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:760px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}
h1,h2,h3{font-family:var(--serif);letter-spacing:-.01em}

.site-header{width:100%;max-width:760px;display:flex;align-items:center;justify-content:space-between;flex-wrap:wrap;gap:.75rem;margin-bottom:1.5rem}
.site-name{font-family:var(--serif);font-size:1.4rem;font-weight:700;color:var(--fg)}
.site-name:hover{text-decoration:none;color:var(--accent)}
.nav{display:flex;gap:1rem;flex-wrap:wrap;font-size:.95rem}

.card{padding:1.5rem;border:1px solid var(--border);border-radius:10px;background:var(--surface)}
.page-title{font-size:2rem;margin-bottom:1rem}
.lead{font-size:1.1rem;color:var(--fg2);margin-bottom:1.25rem}

.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(150px,1fr));gap:1rem}
.grid-item{display:flex;flex-direction:column;align-items:center;gap:.5rem;padding:.75rem;border:1px solid var(--border);border-radius:8px;background:var(--surface);text-align:center;color:var(--fg)}
.grid-item:hover{border-color:var(--accent);text-decoration:none}
.portrait{width:120px;height:120px;border-radius:50%;object-fit:cover;background:var(--border)}
.portrait-initial{display:flex;align-items:center;justify-content:center;font-family:var(--serif);font-size:2.75rem;font-weight:700;color:var(--accent)}

.category{margin-bottom:1.75rem}
.category h2{font-size:1.3rem;margin-bottom:.5rem}
.category ul{list-style:none;display:flex;flex-wrap:wrap;gap:.5rem}
.category li a{display:inline-block;padding:.3rem .8rem;border:1px solid var(--border);border-radius:100px;background:var(--surface)}
.badge{display:inline-block;color:var(--fg3);font-size:.78rem;padding:.2rem .6rem;border-radius:100px;font-weight:500;text-transform:uppercase;letter-spacing:.02em;border:1px solid var(--border);margin-bottom:.75rem}
.description{font-size:1.1rem;line-height:1.75;color:var(--fg)}

.article{margin-bottom:1.5rem}
.article h2{font-size:1.25rem;margin-bottom:.35rem}
.article p{color:var(--fg2)}
blockquote{font-family:var(--serif);font-size:1.2rem;border-left:3px solid var(--accent);padding:.25rem 0 .25rem 1rem;margin:1.25rem 0}
blockquote cite{display:block;font-family:inherit;font-size:.9rem;font-style:normal;color:var(--fg3);margin-top:.35rem}

.form{display:flex;gap:.5rem;flex-wrap:wrap;margin-top:1rem}
.form input{flex:1;min-width:200px;padding:.5rem .75rem;border:1px solid var(--border);border-radius:6px;font-size:1rem;background:#fff}
.form button{padding:.5rem 1.1rem;border:none;border-radius:6px;background:var(--accent);color:#fff;font-size:1rem;cursor:pointer}
.form button:hover{background:var(--accent-hover)}

.back{display:inline-block;margin-top:1.25rem}

.footer{text-align:center;margin-top:1.5rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);width:100%;max-width:760px;display:flex;flex-direction:column;align-items:center;gap:.25rem}

@media(prefers-color-scheme:dark){
:root{--bg:#14120e;--fg:#ece6d9;--fg2:#bdb4a2;--fg3:#7d7564;--accent:#e08a4f;--accent-hover:#f0a36d;--surface:#1c1914;--border:rgba(224,138,79,.22)}
.form input{background:#1c1914;color:var(--fg)}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#f7f5f0;color:#1d1b16;padding:1rem}
.error-page{text-align:center;max-width:640px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page code{font-family:ui-monospace,Menlo,monospace;word-break:break-all}
.error-page pre{text-align:left;font-size:.8rem;background:#fff;border:1px solid #e0d8c8;border-radius:6px;padding:.75rem 1rem;overflow-x:auto;margin-bottom:1rem;white-space:pre-wrap}
.error-page a{color:#8a3b12}
@media(prefers-color-scheme:dark){
body{background:#14120e;color:#ece6d9}
.error-page p{color:#aaa}
.error-page pre{background:#1c1914;border-color:#3a3328}
.error-page a{color:#e08a4f}
}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles only. No scripts; images and forms stay on this origin.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' data:; form-action 'self'; frame-ancestors 'none'";

/// Bytes escaped in a single path segment (RFC 3986 unreserved kept).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Link to `segment` under `prefix`, percent-encoded so `/`, `?` and `#`
/// stay inside the segment.
pub fn segment_href(prefix: &str, segment: &str) -> String {
    format!("{prefix}{}", utf8_percent_encode(segment, PATH_SEGMENT))
}

/// Portrait image, or the name's initial when no image file is available.
pub fn portrait(name: &str, image_path: Option<&str>) -> Markup {
    html! {
        @if let Some(src) = image_path {
            img class="portrait" src=(src) alt=(name) loading="lazy";
        } @else {
            div class="portrait portrait-initial" aria-hidden="true" {
                (name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default())
            }
        }
    }
}

/// Navigation links, in display order.
const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/philosophers", "Philosophers"),
    ("/philosophies", "Philosophies"),
    ("/articles", "Articles"),
    ("/quotes", "Quotes"),
];

/// Render the full HTML page shell with header, navigation and footer.
///
/// The page title is suffixed with the site name unless it already is the
/// site name.
pub fn page_shell(
    title: &str,
    site_name: &str,
    ctx: &RequestContext,
    body_content: Markup,
) -> Markup {
    let full_title = if title == site_name {
        title.to_string()
    } else {
        format!("{title} | {site_name}")
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (full_title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="site-header" {
                    a class="site-name" href="/" { (site_name) }
                    nav class="nav" {
                        @for (href, label) in NAV_LINKS {
                            a href=(href) { (label) }
                        }
                    }
                }
                main { (body_content) }
                (footer(ctx))
            }
        }
    }
}

/// Footer with the request's device class and the remembered philosopher.
fn footer(ctx: &RequestContext) -> Markup {
    html! {
        footer class="footer" {
            span { "Viewing on " (device_label(ctx.device_class)) }
            @if let Some(last) = ctx.last_philosopher.as_deref() {
                span {
                    "Last visited: "
                    a href=(segment_href("/philosophers/", last)) { (last) }
                }
            }
        }
    }
}

fn device_label(device: DeviceClass) -> &'static str {
    match device {
        DeviceClass::Mobile => "mobile",
        DeviceClass::Desktop => "desktop",
    }
}

/// Minimal standalone page for errors; does not depend on request context.
pub fn error_shell(title: &str, body_content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="robots" content="noindex";
                style { (PreEscaped(ERROR_CSS)) }
            }
            body {
                main class="error-page" {
                    h1 { (title) }
                    (body_content)
                    a href="/" { "Back to the home page" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(last: Option<&str>) -> RequestContext {
        RequestContext {
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
            device_class: DeviceClass::Desktop,
            last_philosopher: last.map(str::to_string),
        }
    }

    #[test]
    fn page_shell_suffixes_title() {
        let html = page_shell("Plato", "Philosophy Hub", &ctx(None), html! {}).into_string();
        assert!(html.contains("<title>Plato | Philosophy Hub</title>"));

        let html =
            page_shell("Philosophy Hub", "Philosophy Hub", &ctx(None), html! {}).into_string();
        assert!(html.contains("<title>Philosophy Hub</title>"));
    }

    #[test]
    fn footer_shows_last_philosopher() {
        let html = page_shell("t", "s", &ctx(Some("Hume")), html! {}).into_string();
        assert!(html.contains("Last visited: "));
        assert!(html.contains(r#"href="/philosophers/Hume""#));
        assert!(html.contains("Viewing on desktop"));
    }

    #[test]
    fn footer_escapes_cookie_value() {
        let html = page_shell("t", "s", &ctx(Some("<script>")), html! {}).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn footer_link_keeps_name_in_one_segment() {
        let html = page_shell("t", "s", &ctx(Some("What?/x")), html! {}).into_string();
        assert!(html.contains(r#"href="/philosophers/What%3F%2Fx""#));
        assert!(html.contains(">What?/x</a>"));
    }

    #[test]
    fn segment_href_encodes_reserved_characters() {
        assert_eq!(segment_href("/philosophers/", "Hume"), "/philosophers/Hume");
        assert_eq!(
            segment_href("/philosophers/", "Marcus Aurelius"),
            "/philosophers/Marcus%20Aurelius"
        );
        assert_eq!(segment_href("/philosophies/", "a#b"), "/philosophies/a%23b");
    }

    #[test]
    fn portrait_falls_back_to_initial() {
        let html = portrait("Plato", None).into_string();
        assert!(!html.contains("<img"));
        assert!(html.contains(">P</div>"));

        let html = portrait("Plato", Some("/phlimages/plato.jpg")).into_string();
        assert!(html.contains(r#"src="/phlimages/plato.jpg""#));
    }

    #[test]
    fn csp_forbids_scripts() {
        assert!(CSP_HEADER.contains("default-src 'none'"));
        assert!(!CSP_HEADER.contains("script-src"));
        assert!(CSP_HEADER.contains("frame-ancestors 'none'"));
    }
}
