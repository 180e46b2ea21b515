use serde::{Deserialize, Serialize};

/// Severity of an [`Issue`]. Serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Passed,
}

impl IssueKind {
    /// Presentation rank: errors first, then warnings, then passed.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warning => 1,
            Self::Passed => 2,
        }
    }

    /// Upper-case tag used in the text export, e.g. `ERROR`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Passed => "PASSED",
        }
    }
}

/// A single compliance finding.
///
/// `slide` and `shape` are absent for presentation-wide findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub rule: String,
    pub detail: String,
    #[serde(default)]
    pub slide: Option<u32>,
    #[serde(default)]
    pub shape: Option<String>,
}

impl Issue {
    #[must_use]
    pub fn new(kind: IssueKind, rule: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            rule: rule.into(),
            detail: detail.into(),
            slide: None,
            shape: None,
        }
    }

    #[must_use]
    pub fn error(rule: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(IssueKind::Error, rule, detail)
    }

    #[must_use]
    pub fn warning(rule: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(IssueKind::Warning, rule, detail)
    }

    #[must_use]
    pub fn passed(rule: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(IssueKind::Passed, rule, detail)
    }

    #[must_use]
    pub const fn at_slide(mut self, slide: u32) -> Self {
        self.slide = Some(slide);
        self
    }

    #[must_use]
    pub fn on_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, IssueKind::Error)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.kind, IssueKind::Warning)
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.kind, IssueKind::Passed)
    }
}
