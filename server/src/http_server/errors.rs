use axum::{extract::rejection::FormRejection, http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// An error that ends a request. Server side failures get reported to
/// Sentry, everything gets logged.
#[derive(Debug, Error)]
#[error("{1}: {0}")]
pub struct ServerError(pub(crate) color_eyre::Report, pub(crate) StatusCode);

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        if self.1.is_server_error() {
            sentry::capture_error(&self);
        }

        tracing::error!(error = ?self, "ServerError");

        (self.1, self.0.to_string()).into_response()
    }
}

impl From<color_eyre::Report> for ServerError {
    fn from(err: color_eyre::Report) -> Self {
        ServerError(err, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<FormRejection> for ServerError {
    fn from(rejection: FormRejection) -> Self {
        let status = rejection.status();

        ServerError(color_eyre::eyre::eyre!(rejection.body_text()), status)
    }
}
