//! Document and issue data shared by every stage of a QA run.
//!
//! Slide data is produced by the extractor and never mutated afterwards.
//! Issues are produced by the checker or the augmentation service and
//! consumed read-only by scoring and output.

mod issue;
mod slide;

pub use issue::{Issue, IssueKind};
pub use slide::{FontRun, Position, ShapeData, ShapeKind, SlideData};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
