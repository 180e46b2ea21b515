use serde::{Deserialize, Serialize};

use crate::error::{DeckGuardError, Result};
use crate::model::{Issue, SlideData};

/// Request body sent to the augmentation service.
#[derive(Debug, Serialize)]
pub struct AugmentRequest<'a> {
    pub slides: &'a [SlideData],
}

/// Response body from the augmentation service. A missing `issues` field
/// means no additional findings.
#[derive(Debug, Default, Deserialize)]
pub struct AugmentResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Decode a response body into issues.
///
/// # Errors
/// Returns [`DeckGuardError::Augment`] if the body is not a JSON object with
/// a well-formed `issues` array.
pub fn decode_response(body: &str) -> Result<Vec<Issue>> {
    serde_json::from_str::<AugmentResponse>(body)
        .map(|response| response.issues)
        .map_err(|e| DeckGuardError::Augment(format!("malformed response: {e}")))
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
