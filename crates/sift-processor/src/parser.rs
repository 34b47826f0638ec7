//! Parse a JSON object out of free-form model output

use crate::error::{ProcessorError, Result};
use serde_json::Value;
use tracing::debug;

/// Parse the model's JSON reply.
///
/// Models often wrap the object in prose or code fences, so this first tries
/// the span from the first `{` to the last `}`. If there is no such span or it
/// does not parse, the whole response is parsed instead. The error from the
/// second attempt is the one reported.
pub fn parse_model_json(response: &str) -> Result<Value> {
    if let Some(candidate) = braced_span(response) {
        match serde_json::from_str(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => debug!("Braced span did not parse ({}), trying whole response", e),
        }
    }

    serde_json::from_str(response).map_err(|e| ProcessorError::JsonParse(e.to_string()))
}

/// Text from the first `{` through the last `}`, if they are in that order
fn braced_span(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (end > start).then(|| &response[start..=end])
}
