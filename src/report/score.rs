use crate::model::{Issue, IssueKind};

pub const MAX_SCORE: u32 = 100;
pub const ERROR_PENALTY: u32 = 10;
pub const WARNING_PENALTY: u32 = 3;

/// Compliance score: `100 - 10*errors - 3*warnings`, clamped to `[0, 100]`.
///
/// Passed entries do not contribute.
#[must_use]
pub fn score(issues: &[Issue]) -> u32 {
    let penalty = issues
        .iter()
        .map(|issue| match issue.kind {
            IssueKind::Error => ERROR_PENALTY,
            IssueKind::Warning => WARNING_PENALTY,
            IssueKind::Passed => 0,
        })
        .fold(0u32, u32::saturating_add);
    MAX_SCORE.saturating_sub(penalty)
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
