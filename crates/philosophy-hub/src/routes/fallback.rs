//! Catch-all 404 handler.

use axum::extract::OriginalUri;

use crate::error::HubError;

/// Answer any request no route matched with the 404 page.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> HubError {
    HubError::NotFound {
        title: "Page Not Found",
        url: super::request_url(&uri),
    }
}
