//! Optional remote augmentation pass.
//!
//! The merger appends findings from an external review service to the local
//! issue list. The service is optional and fallible: when it is not
//! configured nothing happens, and when it fails the local issues are kept
//! as-is and the failure is only logged.

mod client;
mod wire;

use std::time::Duration;

pub use client::{AugmentClient, ReqwestAugmentClient};
pub use wire::{AugmentRequest, AugmentResponse, decode_response};

use crate::config::AugmentConfig;
use crate::model::{Issue, SlideData};

/// Merges remote findings into a local issue list.
#[derive(Debug)]
pub struct Augmenter<C: AugmentClient = ReqwestAugmentClient> {
    client: Option<C>,
}

impl Augmenter<ReqwestAugmentClient> {
    /// An augmenter that never performs I/O.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { client: None }
    }

    /// Build from configuration; disabled when no endpoint is set.
    #[must_use]
    pub fn from_config(config: &AugmentConfig) -> Self {
        let client = config.endpoint.as_ref().map(|endpoint| {
            ReqwestAugmentClient::new(endpoint.clone(), Duration::from_secs(config.timeout_secs))
        });
        Self { client }
    }
}

impl<C: AugmentClient> Augmenter<C> {
    #[must_use]
    pub const fn with_client(client: C) -> Self {
        Self {
            client: Some(client),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Return `base` followed by the service's findings.
    ///
    /// Any failure leaves `base` unchanged; this never fails the run.
    #[must_use]
    pub fn augment(&self, slides: &[SlideData], base: Vec<Issue>) -> Vec<Issue> {
        let Some(client) = &self.client else {
            return base;
        };
        if slides.is_empty() {
            tracing::debug!("no slides to send, skipping augmentation");
            return base;
        }

        match client.review(slides) {
            Ok(extra) => {
                tracing::debug!(count = extra.len(), "merged augmentation findings");
                let mut merged = base;
                merged.extend(extra);
                merged
            }
            Err(e) => {
                tracing::warn!(error = %e, "augmentation unavailable, using local checks only");
                base
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
