use std::fmt::Write;

use crate::error::Result;
use crate::model::{Issue, IssueKind};
use crate::report::Report;

use super::{ColorMode, OutputFormatter, ansi, location};

/// Grouped report view for terminals.
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    const fn kind_color(kind: IssueKind) -> &'static str {
        match kind {
            IssueKind::Error => ansi::RED,
            IssueKind::Warning => ansi::YELLOW,
            IssueKind::Passed => ansi::GREEN,
        }
    }

    const fn kind_icon(kind: IssueKind) -> &'static str {
        match kind {
            IssueKind::Error => "✗",
            IssueKind::Warning => "⚠",
            IssueKind::Passed => "✓",
        }
    }

    const fn score_color(score: u32) -> &'static str {
        match score {
            90.. => ansi::GREEN,
            70..=89 => ansi::YELLOW,
            _ => ansi::RED,
        }
    }

    fn format_section(&self, title: &str, issues: &[Issue], output: &mut String) {
        if issues.is_empty() {
            return;
        }
        writeln!(output).ok();
        writeln!(output, "{title}:").ok();
        for issue in issues {
            let icon = self.colorize(Self::kind_icon(issue.kind), Self::kind_color(issue.kind));
            write!(output, "  {icon} {}", issue.rule).ok();
            if let Some(loc) = location(issue, true) {
                let loc = self.colorize(&format!("({loc})"), ansi::CYAN);
                write!(output, " {loc}").ok();
            }
            writeln!(output, ": {}", issue.detail).ok();
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        let score = self.colorize(
            &format!("{}/100", report.score),
            Self::score_color(report.score),
        );
        writeln!(output, "Brand compliance score: {score}").ok();

        let errors = self.colorize(&report.error_count.to_string(), ansi::RED);
        let warnings = self.colorize(&report.warning_count.to_string(), ansi::YELLOW);
        let passed = self.colorize(&report.passed_count.to_string(), ansi::GREEN);
        writeln!(
            output,
            "Summary: {errors} errors, {warnings} warnings, {passed} passed"
        )
        .ok();

        let groups = report.groups();
        self.format_section("Errors", groups.errors, &mut output);
        self.format_section("Warnings", groups.warnings, &mut output);
        self.format_section("Passed", groups.passed, &mut output);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
