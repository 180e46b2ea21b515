use std::time::Duration;

use crate::error::{DeckGuardError, Result};
use crate::model::{Issue, SlideData};

use super::wire::{AugmentRequest, decode_response};

/// Remote augmentation abstraction for dependency injection.
pub trait AugmentClient {
    /// Send the slide data for review and return the service's findings.
    ///
    /// # Errors
    /// Returns an error on transport failure, timeout, non-2xx status or a
    /// malformed response body.
    fn review(&self, slides: &[SlideData]) -> Result<Vec<Issue>>;
}

/// Production augmentation client using blocking reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Clone)]
pub struct ReqwestAugmentClient {
    endpoint: String,
    timeout: Duration,
}

impl ReqwestAugmentClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(not(tarpaulin_include))]
impl AugmentClient for ReqwestAugmentClient {
    fn review(&self, slides: &[SlideData]) -> Result<Vec<Issue>> {
        let url = &self.endpoint;
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| DeckGuardError::Augment(format!("Failed to create HTTP client: {e}")))?;

        let response = client
            .post(url)
            .json(&AugmentRequest { slides })
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    DeckGuardError::Augment(format!(
                        "Request to {url} timed out after {}s",
                        self.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    DeckGuardError::Augment(format!("Failed to connect to {url}"))
                } else {
                    DeckGuardError::Augment(format!("Request to {url} failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeckGuardError::Augment(format!(
                "{url} responded with HTTP {status}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| DeckGuardError::Augment(format!("Failed to read response from {url}: {e}")))?;
        decode_response(&body)
    }
}
