//! Request-scoped failure logging.
//!
//! Handlers never reach for a global logger. They receive a [`RequestLog`]
//! through application state so tests can swap in a recorder.

use crate::error::ShowsError;
use tracing::error;

pub trait RequestLog: Send + Sync {
    /// Record a request that could not be served, with its raw body.
    fn request_failed(&self, body: &[u8], err: &ShowsError);
}

/// Writes failures to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRequestLog;

impl RequestLog for TracingRequestLog {
    fn request_failed(&self, body: &[u8], err: &ShowsError) {
        let original_body = String::from_utf8_lossy(body);
        match err.position() {
            Some((line, column)) => error!(
                kind = err.kind(),
                line,
                column,
                original_body = %original_body,
                "{}",
                err
            ),
            None => error!(
                kind = err.kind(),
                original_body = %original_body,
                "{}",
                err
            ),
        }
    }
}
