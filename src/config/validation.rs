//! Configuration semantic validation.
//!
//! Validates that configuration values are semantically correct after parsing.
//! A configuration that fails here never reaches the checker.

use crate::config::{AugmentConfig, ColorsConfig, Config, LayoutConfig};
use crate::{DeckGuardError, Result};

use super::rules::normalize_color;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a layout threshold is not positive, the body font
/// bounds are inverted, a palette code is malformed, or the augmentation
/// endpoint/timeout is unusable.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_layout(&config.layout)?;
    validate_palette(&config.colors)?;
    validate_augment(&config.augment)?;
    Ok(())
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DeckGuardError::Config(format!(
            "layout.{name} must be a positive number, got {value}"
        )))
    }
}

pub(super) fn validate_layout(layout: &LayoutConfig) -> Result<()> {
    require_positive("min_title_font_size", layout.min_title_font_size)?;
    require_positive("max_body_font_size", layout.max_body_font_size)?;
    require_positive("min_body_font_size", layout.min_body_font_size)?;

    if layout.max_bullets_per_slide == 0 {
        return Err(DeckGuardError::Config(
            "layout.max_bullets_per_slide must be at least 1".to_string(),
        ));
    }

    if layout.min_body_font_size >= layout.max_body_font_size {
        return Err(DeckGuardError::Config(format!(
            "layout.min_body_font_size ({}) must be less than layout.max_body_font_size ({})",
            layout.min_body_font_size, layout.max_body_font_size
        )));
    }
    Ok(())
}

/// True if `code` is a 6-digit hex color once normalized.
#[must_use]
pub fn is_hex_color(code: &str) -> bool {
    let normalized = normalize_color(code);
    normalized.len() == 6 && normalized.chars().all(|c| c.is_ascii_hexdigit())
}

pub(super) fn validate_palette(colors: &ColorsConfig) -> Result<()> {
    let sections = [
        ("colors.primary", &colors.primary),
        ("colors.acceptable", &colors.acceptable),
    ];
    for (section, codes) in sections {
        for (i, code) in codes.iter().enumerate() {
            if !is_hex_color(code) {
                return Err(DeckGuardError::Config(format!(
                    "{section}[{i}] must be a 6-digit hex color, got '{code}'"
                )));
            }
        }
    }
    Ok(())
}

/// Check if a string is a valid remote URL (http:// or https://).
#[must_use]
pub fn is_remote_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

pub(super) fn validate_augment(augment: &AugmentConfig) -> Result<()> {
    if let Some(endpoint) = &augment.endpoint
        && !is_remote_url(endpoint)
    {
        return Err(DeckGuardError::Config(format!(
            "augment.endpoint must start with http:// or https://, got '{endpoint}'"
        )));
    }

    if augment.timeout_secs == 0 {
        return Err(DeckGuardError::Config(
            "augment.timeout_secs must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
