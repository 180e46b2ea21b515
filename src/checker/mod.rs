mod brand;
pub mod rules;

pub use brand::BrandChecker;

use crate::config::RuleSet;
use crate::model::{Issue, SlideData};

pub trait Checker {
    /// Evaluate every slide and return findings in emission order.
    ///
    /// Never fails: absent attributes mean a rule does not apply.
    fn evaluate(&self, slides: &[SlideData]) -> Vec<Issue>;
}

/// Run the brand rules over `slides`.
#[must_use]
pub fn evaluate(slides: &[SlideData], rules: &RuleSet) -> Vec<Issue> {
    BrandChecker::new(rules).evaluate(slides)
}

/// Append the synthetic "all checks passed" issue when nothing was found.
#[must_use]
pub fn ensure_passed(mut issues: Vec<Issue>) -> Vec<Issue> {
    if issues.is_empty() {
        issues.push(Issue::passed(
            rules::ALL_CHECKS_PASSED,
            "No brand issues found",
        ));
    }
    issues
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
