//! JSON decoding of request listings and encoding of the reduced response.

use crate::error::{Result, ShowsError};
use crate::models::{RequestEnvelope, ResponseEnvelope, ResponseItem, Show};

/// Decode a request body into its list of shows.
///
/// A missing or `null` `payload` yields an empty list. Malformed JSON,
/// an empty body and type mismatches are all [`ShowsError::Decode`].
pub fn parse_request(data: &[u8]) -> Result<Vec<Show>> {
    let envelope: RequestEnvelope = serde_json::from_slice(data).map_err(ShowsError::Decode)?;
    Ok(envelope.payload.unwrap_or_default())
}

/// Project shows onto response items and serialize them under `response`.
pub fn make_response(shows: &[Show]) -> Result<Vec<u8>> {
    let envelope = ResponseEnvelope {
        response: shows.iter().map(ResponseItem::from).collect(),
    };
    serde_json::to_vec(&envelope).map_err(ShowsError::Encode)
}
