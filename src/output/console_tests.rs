use super::*;

fn sample_report() -> Report {
    Report::from_issues(vec![
        Issue::warning("Too many bullets", "7 lines of text")
            .at_slide(1)
            .on_shape("Body"),
        Issue::error("Non-OW font", "Comic Sans")
            .at_slide(1)
            .on_shape("Body"),
        Issue::warning("Weak action title", "Topic label only"),
    ])
}

#[test]
fn format_shows_score_and_summary() {
    let output = ConsoleFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();

    assert!(output.starts_with("Brand compliance score: 84/100\n"));
    assert!(output.contains("Summary: 1 errors, 2 warnings, 0 passed"));
}

#[test]
fn format_groups_by_severity() {
    let output = ConsoleFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();

    let errors_at = output.find("Errors:").unwrap();
    let warnings_at = output.find("Warnings:").unwrap();
    assert!(errors_at < warnings_at);
    assert!(!output.contains("Passed:"));
    assert!(output.contains("  ✗ Non-OW font (Slide 1, Body): Comic Sans"));
    assert!(output.contains("  ⚠ Weak action title: Topic label only"));
}

#[test]
fn clean_report_shows_passed_section() {
    let report = Report::from_issues(vec![Issue::passed(
        "All checks passed",
        "No brand issues found",
    )]);
    let output = ConsoleFormatter::new(ColorMode::Never).format(&report).unwrap();

    assert!(output.contains("Brand compliance score: 100/100"));
    assert!(output.contains("Passed:\n  ✓ All checks passed: No brand issues found"));
}

#[test]
fn never_mode_has_no_escape_codes() {
    let output = ConsoleFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();
    assert!(!output.contains('\x1b'));
}

#[test]
fn always_mode_colors_output() {
    let output = ConsoleFormatter::new(ColorMode::Always)
        .format(&sample_report())
        .unwrap();
    assert!(output.contains("\x1b[31m"));
    assert!(output.contains("\x1b[0m"));
}

#[test]
fn score_color_bands() {
    assert_eq!(ConsoleFormatter::score_color(100), ansi::GREEN);
    assert_eq!(ConsoleFormatter::score_color(90), ansi::GREEN);
    assert_eq!(ConsoleFormatter::score_color(84), ansi::YELLOW);
    assert_eq!(ConsoleFormatter::score_color(12), ansi::RED);
}
