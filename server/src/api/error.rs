//! Slash-command error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::awk::RenderError;
use crate::util::ellipsize;

/// Longest slice of untrusted input echoed back in an error message.
pub const MAX_ECHO_LEN: usize = 30;

/// Errors that can occur while answering a slash command.
#[derive(Debug, thiserror::Error)]
pub enum AwkError {
    #[error("bad request")]
    BadForm,

    /// Bad shared secret, unknown route, or wrong method. All look the same.
    #[error("page not found")]
    NotFound,

    #[error("no command")]
    NoCommand,

    #[error("unrecognized command: {0:?}")]
    UnrecognizedCommand(String),

    #[error("no command string")]
    NoCommandString,

    #[error("unrecognized means: {0:?}")]
    UnrecognizedMeans(String),

    #[error("error rendering response: {0}")]
    Render(#[from] RenderError),
}

impl AwkError {
    /// Unknown slash command, with the submitted value shortened.
    pub fn unrecognized_command(command: &str) -> Self {
        Self::UnrecognizedCommand(ellipsize(command, MAX_ECHO_LEN))
    }

    /// Unknown sub-command, with the submitted value shortened.
    pub fn unrecognized_means(means: &str) -> Self {
        Self::UnrecognizedMeans(ellipsize(means, MAX_ECHO_LEN))
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadForm
            | Self::NoCommand
            | Self::UnrecognizedCommand(_)
            | Self::NoCommandString
            | Self::UnrecognizedMeans(_) => StatusCode::BAD_REQUEST,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::BadForm => "bad_request",
            Self::NotFound => "not_found",
            Self::NoCommand => "no_command",
            Self::UnrecognizedCommand(_) => "unrecognized_command",
            Self::NoCommandString => "no_command_string",
            Self::UnrecognizedMeans(_) => "unrecognized_means",
            Self::Render(_) => "render_failed",
        }
    }
}

impl IntoResponse for AwkError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Render(err) => tracing::error!("Error rendering response: {}", err),
            Self::NotFound => {}
            _ => tracing::debug!(error = %self, "Rejected slash command"),
        }

        (
            status,
            Json(serde_json::json!({ "error": self.code(), "message": self.to_string() })),
        )
            .into_response()
    }
}
