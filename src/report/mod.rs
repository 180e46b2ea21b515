//! Scoring and presentation ordering of a run's issues.

mod score;

pub use score::{ERROR_PENALTY, MAX_SCORE, WARNING_PENALTY, score};

use serde::Serialize;

use crate::model::{Issue, IssueKind};

/// Stable sort by severity: errors, then warnings, then passed.
///
/// Issues of equal severity keep their relative order, so augmentation
/// findings stay after local findings of the same kind.
#[must_use]
pub fn order_issues(mut issues: Vec<Issue>) -> Vec<Issue> {
    issues.sort_by_key(|issue| issue.kind.rank());
    issues
}

/// Ordered issues split by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueGroups<'a> {
    pub errors: &'a [Issue],
    pub warnings: &'a [Issue],
    pub passed: &'a [Issue],
}

/// Split an already ordered slice into its severity groups.
#[must_use]
pub fn group_issues(ordered: &[Issue]) -> IssueGroups<'_> {
    let warnings_start = ordered.partition_point(|i| i.kind == IssueKind::Error);
    let passed_start = ordered.partition_point(|i| i.kind != IssueKind::Passed);
    IssueGroups {
        errors: &ordered[..warnings_start],
        warnings: &ordered[warnings_start..passed_start],
        passed: &ordered[passed_start..],
    }
}

/// Result of one QA run. Recomputed per run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub score: u32,
    pub error_count: usize,
    pub warning_count: usize,
    pub passed_count: usize,
    pub issues: Vec<Issue>,
}

impl Report {
    #[must_use]
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        let score = score(&issues);
        let issues = order_issues(issues);
        let groups = group_issues(&issues);
        let (error_count, warning_count, passed_count) = (
            groups.errors.len(),
            groups.warnings.len(),
            groups.passed.len(),
        );
        Self {
            score,
            error_count,
            warning_count,
            passed_count,
            issues,
        }
    }

    #[must_use]
    pub fn groups(&self) -> IssueGroups<'_> {
        group_issues(&self.issues)
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    #[must_use]
    pub const fn has_warnings(&self) -> bool {
        self.warning_count > 0
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
