use crate::models::ErrorBody;
use axum::extract::rejection::BytesRejection;
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

/// The only message clients ever see on failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Could not decode request: JSON parsing failed";

/// Failures while turning a request body into a filtered listing.
///
/// All variants render as the same `400 Bad Request` body. The wrapped
/// source errors are kept for server-side logging only.
#[derive(Error, Debug)]
pub enum ShowsError {
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] BytesRejection),

    #[error("request JSON parsing error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("response JSON encoding error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ShowsError {
    /// Short machine-readable name used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ShowsError::BodyRead(_) => "body_read",
            ShowsError::Decode(_) => "decode",
            ShowsError::Encode(_) => "encode",
        }
    }

    /// Line and column of a JSON failure, when serde_json reported one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ShowsError::Decode(e) | ShowsError::Encode(e) if e.line() > 0 => {
                Some((e.line(), e.column()))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ShowsError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: GENERIC_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ShowsError>;
