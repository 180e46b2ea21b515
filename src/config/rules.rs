use indexmap::IndexSet;

use crate::error::Result;

use super::model::{ColorsConfig, Config, FontsConfig, LayoutConfig};
use super::validation::{validate_layout, validate_palette};

/// Normalize a color code for palette comparison: strip one leading `#`,
/// trim whitespace, upper-case.
#[must_use]
pub fn normalize_color(code: &str) -> String {
    let trimmed = code.trim();
    trimmed
        .strip_prefix('#')
        .unwrap_or(trimmed)
        .to_ascii_uppercase()
}

/// Validated, immutable brand rule set.
///
/// Only constructed through [`RuleSet::new`], [`RuleSet::from_config`] or
/// `Default`, so every instance satisfies the threshold and palette
/// constraints. Palette codes are stored normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    allowed_fonts: Vec<String>,
    primary: IndexSet<String>,
    acceptable: IndexSet<String>,
    layout: LayoutConfig,
}

impl RuleSet {
    /// Build a rule set from its three sections.
    ///
    /// # Errors
    /// Returns a configuration error if any threshold is not a positive
    /// number, `min_body_font_size >= max_body_font_size`, or a palette entry
    /// is not 6 hex digits.
    pub fn new(fonts: &FontsConfig, colors: &ColorsConfig, layout: &LayoutConfig) -> Result<Self> {
        validate_layout(layout)?;
        validate_palette(colors)?;
        Ok(Self::assemble(fonts, colors, layout))
    }

    /// Build the rule set described by a loaded configuration.
    ///
    /// # Errors
    /// Same as [`RuleSet::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.fonts, &config.colors, &config.layout)
    }

    fn assemble(fonts: &FontsConfig, colors: &ColorsConfig, layout: &LayoutConfig) -> Self {
        Self {
            allowed_fonts: fonts.allowed.clone(),
            primary: colors.primary.iter().map(|c| normalize_color(c)).collect(),
            acceptable: colors
                .acceptable
                .iter()
                .map(|c| normalize_color(c))
                .collect(),
            layout: layout.clone(),
        }
    }

    #[must_use]
    pub fn allowed_fonts(&self) -> &[String] {
        &self.allowed_fonts
    }

    #[must_use]
    pub const fn primary_colors(&self) -> &IndexSet<String> {
        &self.primary
    }

    #[must_use]
    pub const fn acceptable_colors(&self) -> &IndexSet<String> {
        &self.acceptable
    }

    /// `primary ∪ acceptable`, primary codes first.
    #[must_use]
    pub fn palette(&self) -> IndexSet<String> {
        self.primary
            .iter()
            .chain(self.acceptable.iter())
            .cloned()
            .collect()
    }

    #[must_use]
    pub const fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::assemble(
            &FontsConfig::default(),
            &ColorsConfig::default(),
            &LayoutConfig::default(),
        )
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
