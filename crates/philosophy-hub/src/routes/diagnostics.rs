//! Routes that exercise the error pages on purpose.

use axum::response::Response;

use crate::error::HubError;

/// Message of the fault raised by `GET /test500`.
pub const TEST_FAULT_MESSAGE: &str = "Intentional test error for 500 page.";

/// `GET /test500` - always fails with an internal fault.
pub async fn test_500() -> Result<Response, HubError> {
    Err(anyhow::anyhow!(TEST_FAULT_MESSAGE).into())
}
