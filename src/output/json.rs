use serde::Serialize;

use crate::error::Result;
use crate::model::Issue;
use crate::report::Report;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    score: u32,
    summary: Summary,
    issues: &'a [Issue],
}

#[derive(Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
    passed: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            score: report.score,
            summary: Summary {
                errors: report.error_count,
                warnings: report.warning_count,
                passed: report.passed_count,
            },
            issues: &report.issues,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
