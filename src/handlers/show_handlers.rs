use crate::config::Config;
use crate::error::ShowsError;
use crate::logging::RequestLog;
use crate::services::ShowService;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;

pub struct AppState {
    pub config: Arc<Config>,
    pub show_service: ShowService,
    pub request_log: Arc<dyn RequestLog>,
}

/// Accepts a JSON show listing and answers with the DRM-enabled shows
/// that have episodes. Every failure becomes the same 400 body.
pub async fn tv_show_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = ShowsError::BodyRead(rejection);
            state.request_log.request_failed(&[], &err);
            return err.into_response();
        }
    };

    info!("Filtering show listing ({} bytes)", body.len());

    match state.show_service.process(&body) {
        Ok(response) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "application/json")],
            response,
        )
            .into_response(),
        Err(err) => {
            state.request_log.request_failed(&body, &err);
            err.into_response()
        }
    }
}
