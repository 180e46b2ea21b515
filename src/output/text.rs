use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::Result;
use crate::report::Report;

use super::{OutputFormatter, location};

pub const REPORT_HEADER: &str = "OW PPTX QA Report";

/// Canonical plain-text export.
///
/// Layout: header, `Generated:` timestamp, blank line, then one
/// `[TYPE] rule (Slide N): detail` line per ordered issue. Output depends
/// only on the report and the injected timestamp.
pub struct TextFormatter {
    generated_at: DateTime<Utc>,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(generated_at: DateTime<Utc>) -> Self {
        Self { generated_at }
    }

    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "{REPORT_HEADER}").ok();
        writeln!(
            output,
            "Generated: {}",
            self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
        .ok();
        writeln!(output).ok();

        for issue in &report.issues {
            write!(output, "[{}] {}", issue.kind.label(), issue.rule).ok();
            if let Some(loc) = location(issue, false) {
                write!(output, " ({loc})").ok();
            }
            writeln!(output, ": {}", issue.detail).ok();
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
