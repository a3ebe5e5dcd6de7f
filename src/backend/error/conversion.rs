/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`: every handler failure ends up on the same
 * generic error page, carrying the mapped status code.
 */

use axum::response::{Html, IntoResponse, Response};

use crate::backend::error::types::BackendError;
use crate::backend::views;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Html(views::error_page(status, &self.message()))).into_response()
    }
}
