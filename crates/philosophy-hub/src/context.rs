//! Per-request context: timestamp, device class and the remembered philosopher.
//!
//! [`request_context`] runs before every routed request. It computes a
//! [`RequestContext`], logs one line for the request and stores the context
//! in the request extensions, where handlers pick it up as an extractor.

use std::convert::Infallible;
use std::fmt;
use std::sync::LazyLock;

use axum::extract::{FromRequestParts, Request};
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use chrono::{SecondsFormat, Utc};
use regex::Regex;

/// Name of the cookie holding the last viewed or submitted philosopher.
pub const LAST_PHILOSOPHER_COOKIE: &str = "lastPhilosopher";

/// Lifetime of the last-philosopher cookie (15 minutes).
pub const LAST_PHILOSOPHER_MAX_AGE_SECS: i64 = 15 * 60;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)mobile").expect("static regex is valid"));

/// Coarse client classification derived from the `User-Agent` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Mobile when the user agent mentions "mobile" in any case.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if MOBILE_RE.is_match(user_agent) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-scoped data made available to every rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// When the request was received, ISO-8601 in UTC.
    pub timestamp: String,
    pub device_class: DeviceClass,
    /// Cookie value as sent by the client. Not checked against the catalog.
    pub last_philosopher: Option<String>,
}

impl RequestContext {
    /// Build the context from request headers, stamped with the current time.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let user_agent = headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let last_philosopher = CookieJar::from_headers(headers)
            .get(LAST_PHILOSOPHER_COOKIE)
            .map(|c| c.value().to_string());

        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            device_class: DeviceClass::from_user_agent(user_agent),
            last_philosopher,
        }
    }
}

/// Handlers get the context stored by [`request_context`], or a fresh one
/// when the middleware is not mounted.
impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Self>()
            .cloned()
            .unwrap_or_else(|| Self::from_headers(&parts.headers)))
    }
}

/// Middleware computing the [`RequestContext`] and logging the request line.
pub async fn request_context(mut request: Request, next: Next) -> Response {
    let ctx = RequestContext::from_headers(request.headers());

    tracing::info!(
        "[{}] {} {} — {}",
        ctx.timestamp,
        request.method(),
        request.uri().path(),
        ctx.device_class
    );

    request.extensions_mut().insert(ctx);
    next.run(request).await
}

/// Remember `name` as the last philosopher. Last write wins.
pub fn remember_philosopher(jar: CookieJar, name: &str) -> CookieJar {
    let cookie = Cookie::build((LAST_PHILOSOPHER_COOKIE, name.to_string()))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::seconds(LAST_PHILOSOPHER_MAX_AGE_SECS));
    jar.add(cookie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::http::header::COOKIE;

    fn headers(pairs: &[(axum::http::HeaderName, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(name.clone(), HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn device_class_detects_mobile_any_case() {
        assert_eq!(
            DeviceClass::from_user_agent("Mozilla/5.0 (iPhone) Mobile/15E148"),
            DeviceClass::Mobile
        );
        assert_eq!(DeviceClass::from_user_agent("MOBILE"), DeviceClass::Mobile);
        assert_eq!(
            DeviceClass::from_user_agent("Mozilla/5.0 (X11; Linux x86_64)"),
            DeviceClass::Desktop
        );
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Desktop);
    }

    #[test]
    fn context_without_headers() {
        let ctx = RequestContext::from_headers(&HeaderMap::new());
        assert_eq!(ctx.device_class, DeviceClass::Desktop);
        assert_eq!(ctx.last_philosopher, None);
        assert!(ctx.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ctx.timestamp).is_ok());
    }

    #[test]
    fn context_reads_cookie_and_user_agent() {
        let ctx = RequestContext::from_headers(&headers(&[
            (USER_AGENT, "Android Mobile Safari"),
            (COOKIE, "theme=dark; lastPhilosopher=Hypatia"),
        ]));
        assert_eq!(ctx.device_class, DeviceClass::Mobile);
        assert_eq!(ctx.last_philosopher.as_deref(), Some("Hypatia"));
    }

    #[test]
    fn context_decodes_encoded_cookie_value() {
        let ctx = RequestContext::from_headers(&headers(&[(
            COOKIE,
            "lastPhilosopher=Marcus%20Aurelius",
        )]));
        assert_eq!(ctx.last_philosopher.as_deref(), Some("Marcus Aurelius"));
    }

    #[test]
    fn remember_sets_http_only_fifteen_minute_cookie() {
        let jar = remember_philosopher(CookieJar::new(), "Kant");
        let cookie = jar.get(LAST_PHILOSOPHER_COOKIE).unwrap();
        assert_eq!(cookie.value(), "Kant");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(900)));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), None);
        assert_eq!(cookie.same_site(), None);
    }

    #[test]
    fn remember_overwrites_previous_value() {
        let jar = remember_philosopher(CookieJar::new(), "Plato");
        let jar = remember_philosopher(jar, "Zeno");
        assert_eq!(jar.get(LAST_PHILOSOPHER_COOKIE).unwrap().value(), "Zeno");
    }
}
