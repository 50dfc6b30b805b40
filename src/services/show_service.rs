use crate::error::Result;
use crate::services::codec::{make_response, parse_request};
use crate::services::filters::FilterPipeline;
use tracing::debug;

/// Decodes a listing, filters it and encodes the reduced response.
///
/// Holds no per-request state, so one instance is shared by every request.
pub struct ShowService {
    pipeline: FilterPipeline,
}

impl ShowService {
    pub fn new() -> Self {
        Self::with_pipeline(FilterPipeline::standard())
    }

    pub fn with_pipeline(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    pub fn process(&self, body: &[u8]) -> Result<Vec<u8>> {
        let shows = parse_request(body)?;
        let received = shows.len();

        let shows = self.pipeline.apply(shows);
        debug!("Kept {} of {} shows", shows.len(), received);

        make_response(&shows)
    }
}

impl Default for ShowService {
    fn default() -> Self {
        Self::new()
    }
}
