//! One end-to-end QA run: fetch, check, augment, report.

use crate::augment::{AugmentClient, Augmenter};
use crate::checker::{ensure_passed, evaluate};
use crate::config::RuleSet;
use crate::error::Result;
use crate::report::Report;
use crate::source::SlideSource;

/// Run every stage and return the finished report.
///
/// # Errors
/// Only extraction failures propagate. Augmentation failures degrade to the
/// local findings.
pub fn run_qa<S, C>(source: &S, rules: &RuleSet, augmenter: &Augmenter<C>) -> Result<Report>
where
    S: SlideSource + ?Sized,
    C: AugmentClient,
{
    let slides = source.fetch_slides()?;
    tracing::info!(slides = slides.len(), "checking slides");

    let local = ensure_passed(evaluate(&slides, rules));
    let issues = augmenter.augment(&slides, local);

    let report = Report::from_issues(issues);
    tracing::info!(
        score = report.score,
        errors = report.error_count,
        warnings = report.warning_count,
        "check complete"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
