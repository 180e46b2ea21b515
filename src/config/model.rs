use serde::{Deserialize, Serialize};

/// Default request timeout for the augmentation service, in seconds.
pub const DEFAULT_AUGMENT_TIMEOUT_SECS: u64 = 30;

/// Top-level `.deck-guard.toml` configuration.
///
/// `fonts`, `colors` and `layout` describe the brand rule set; `augment`
/// configures the optional remote augmentation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub fonts: FontsConfig,
    pub colors: ColorsConfig,
    pub layout: LayoutConfig,
    pub augment: AugmentConfig,
}

/// Approved typefaces [fonts].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    /// Case-insensitive substrings; a run's font passes if any entry matches.
    pub allowed: Vec<String>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            allowed: vec!["Arial".to_string(), "Georgia".to_string()],
        }
    }
}

/// Brand palette [colors]. Codes are 6 hex digits, `#` optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorsConfig {
    pub primary: Vec<String>,
    pub acceptable: Vec<String>,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            primary: ["002D72", "D0021B", "FFFFFF"]
                .into_iter()
                .map(String::from)
                .collect(),
            acceptable: ["5B6770", "A7A8AA", "E6E7E8", "F2F2F2"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Size and density thresholds [layout], in points and counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde(alias = "minTitleFontSize")]
    pub min_title_font_size: f64,

    #[serde(alias = "maxBodyFontSize")]
    pub max_body_font_size: f64,

    #[serde(alias = "minBodyFontSize")]
    pub min_body_font_size: f64,

    #[serde(alias = "maxBulletsPerSlide")]
    pub max_bullets_per_slide: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_title_font_size: 20.0,
            max_body_font_size: 18.0,
            min_body_font_size: 10.0,
            max_bullets_per_slide: 6,
        }
    }
}

/// Remote augmentation service [augment].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AugmentConfig {
    /// Service URL. Augmentation is disabled when unset.
    pub endpoint: Option<String>,

    /// Upper bound on the whole request, in seconds.
    pub timeout_secs: u64,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_AUGMENT_TIMEOUT_SECS,
        }
    }
}

impl AugmentConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
