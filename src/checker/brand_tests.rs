use super::*;
use crate::config::{ColorsConfig, FontsConfig, LayoutConfig};
use crate::model::IssueKind;

fn run(name: Option<&str>, size: Option<f64>, color: Option<&str>) -> FontRun {
    FontRun {
        name: name.map(String::from),
        size,
        color: color.map(String::from),
        bold: None,
    }
}

fn shape(name: &str, text: Option<&str>, fonts: Vec<FontRun>) -> ShapeData {
    ShapeData {
        name: name.to_string(),
        text: text.map(String::from),
        fonts,
        ..ShapeData::default()
    }
}

/// A slide with a valid title so slide-level rules stay quiet.
fn titled_slide(index: u32, body: ShapeData) -> SlideData {
    SlideData {
        index,
        shapes: vec![
            shape("Title 1", Some("Headline"), vec![run(None, Some(24.0), None)]),
            body,
        ],
    }
}

fn rules_named<'a>(issues: &'a [Issue], rule: &str) -> Vec<&'a Issue> {
    issues.iter().filter(|i| i.rule == rule).collect()
}

fn check(slides: &[SlideData]) -> Vec<Issue> {
    let rule_set = RuleSet::default();
    BrandChecker::new(&rule_set).evaluate(slides)
}

#[test]
fn brand_font_substring_match_is_case_insensitive() {
    let slide = titled_slide(
        1,
        shape("Body", None, vec![run(Some("ARIAL Narrow"), None, None)]),
    );
    assert!(check(&[slide]).is_empty());
}

#[test]
fn non_brand_font_is_error_naming_font() {
    let slide = titled_slide(
        1,
        shape("Body", None, vec![run(Some("Comic Sans"), None, None)]),
    );
    let issues = check(&[slide]);

    let found = rules_named(&issues, rules::NON_BRAND_FONT);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, IssueKind::Error);
    assert!(found[0].detail.contains("Comic Sans"));
    assert_eq!(found[0].slide, Some(1));
    assert_eq!(found[0].shape.as_deref(), Some("Body"));
}

#[test]
fn each_offending_run_reports_separately() {
    let slide = titled_slide(
        1,
        shape(
            "Body",
            None,
            vec![
                run(Some("Comic Sans"), None, None),
                run(Some("Papyrus"), None, None),
            ],
        ),
    );
    let issues = check(&[slide]);
    assert_eq!(rules_named(&issues, rules::NON_BRAND_FONT).len(), 2);
}

#[test]
fn empty_allowed_list_flags_every_named_font() {
    let rule_set = RuleSet::new(
        &FontsConfig {
            allowed: Vec::new(),
        },
        &ColorsConfig::default(),
        &LayoutConfig::default(),
    )
    .unwrap();
    let slide = titled_slide(1, shape("Body", None, vec![run(Some("Arial"), None, None)]));

    let issues = BrandChecker::new(&rule_set).evaluate(&[slide]);
    assert_eq!(rules_named(&issues, rules::NON_BRAND_FONT).len(), 1);
}

#[test]
fn size_bands_for_body_shapes() {
    // default bounds: min 10, max 18
    let cases = [
        (9.5, Some(rules::TEXT_TOO_SMALL)),
        (10.0, None),
        (14.0, None),
        (18.0, None),
        (18.5, Some(rules::LARGE_BODY_TEXT)),
    ];
    for (size, expected) in cases {
        let slide = titled_slide(1, shape("Body", None, vec![run(None, Some(size), None)]));
        let issues = check(&[slide]);
        let rule_names: Vec<&str> = issues.iter().map(|i| i.rule.as_str()).collect();
        match expected {
            Some(rule) => assert_eq!(rule_names, vec![rule], "size {size}"),
            None => assert!(issues.is_empty(), "size {size}: {rule_names:?}"),
        }
    }
}

#[test]
fn large_text_in_title_shape_is_not_flagged() {
    let slide = SlideData {
        index: 1,
        shapes: vec![shape(
            "Title 1",
            Some("Big headline"),
            vec![run(None, Some(40.0), None)],
        )],
    };
    assert!(check(&[slide]).is_empty());
}

#[test]
fn undersized_text_in_title_shape_is_still_flagged() {
    let slide = SlideData {
        index: 1,
        shapes: vec![shape(
            "Title 1",
            Some("Tiny"),
            vec![run(None, Some(8.0), None)],
        )],
    };
    let issues = check(&[slide]);
    let rule_names: Vec<&str> = issues.iter().map(|i| i.rule.as_str()).collect();

    assert_eq!(rule_names, vec![rules::TEXT_TOO_SMALL, rules::TITLE_TOO_SMALL]);
    assert!(issues.iter().all(Issue::is_error));
}

#[test]
fn palette_and_black_colors_pass() {
    let slide = titled_slide(
        1,
        shape(
            "Body",
            None,
            vec![
                run(None, None, Some("D0021B")),
                run(None, None, Some("#5b6770")),
                run(None, None, Some("000000")),
            ],
        ),
    );
    assert!(check(&[slide]).is_empty());
}

#[test]
fn off_palette_color_is_warning_with_normalized_code() {
    let slide = titled_slide(1, shape("Body", None, vec![run(None, None, Some("#ff00ff"))]));
    let issues = check(&[slide]);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule, rules::OFF_PALETTE_COLOR);
    assert!(issues[0].is_warning());
    assert!(issues[0].detail.contains("FF00FF"));
}

#[test]
fn all_run_rules_fire_together_in_order() {
    let rule_set = RuleSet::default();
    let slide = titled_slide(
        1,
        shape(
            "Body",
            None,
            vec![run(Some("Comic Sans"), Some(30.0), Some("123456"))],
        ),
    );
    let issues = BrandChecker::new(&rule_set).evaluate(&[slide]);
    let rule_names: Vec<&str> = issues.iter().map(|i| i.rule.as_str()).collect();

    assert_eq!(
        rule_names,
        vec![
            rules::NON_BRAND_FONT,
            rules::LARGE_BODY_TEXT,
            rules::OFF_PALETTE_COLOR
        ]
    );
}

#[test]
fn bullet_count_is_newlines_plus_one() {
    let six = titled_slide(1, shape("Body", Some("1\n2\n3\n4\n5\n6"), Vec::new()));
    assert!(check(&[six]).is_empty());

    let seven = titled_slide(1, shape("Body", Some("1\n2\n3\n4\n5\n6\n7"), Vec::new()));
    let issues = check(&[seven]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule, rules::TOO_MANY_BULLETS);
    assert!(issues[0].detail.contains('7'));
}

#[test]
fn trailing_newline_counts_as_a_line() {
    let slide = titled_slide(1, shape("Body", Some("1\n2\n3\n4\n5\n6\n"), Vec::new()));
    assert_eq!(
        rules_named(&check(&[slide]), rules::TOO_MANY_BULLETS).len(),
        1
    );
}

#[test]
fn shape_without_text_has_no_bullet_finding() {
    let slide = titled_slide(1, shape("Picture 3", None, Vec::new()));
    assert!(check(&[slide]).is_empty());
}

#[test]
fn bullet_rule_follows_run_rules() {
    let slide = titled_slide(
        1,
        shape(
            "Body",
            Some("a\nb\nc\nd\ne\nf\ng"),
            vec![run(Some("Comic Sans"), None, None)],
        ),
    );
    let issues = check(&[slide]);
    let rule_names: Vec<&str> = issues.iter().map(|i| i.rule.as_str()).collect();
    assert_eq!(
        rule_names,
        vec![rules::NON_BRAND_FONT, rules::TOO_MANY_BULLETS]
    );
}

#[test]
fn missing_title_when_no_title_shape() {
    let slide = SlideData {
        index: 4,
        shapes: vec![shape("Body", Some("text"), Vec::new())],
    };
    let issues = check(&[slide]);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule, rules::MISSING_TITLE);
    assert_eq!(issues[0].slide, Some(4));
    assert!(issues[0].shape.is_none());
}

#[test]
fn missing_title_when_title_shape_has_no_text() {
    let slide = SlideData {
        index: 1,
        shapes: vec![shape("Title 1", None, Vec::new())],
    };
    let issues = check(&[slide]);
    assert_eq!(rules_named(&issues, rules::MISSING_TITLE).len(), 1);
}

#[test]
fn empty_title_text_still_counts_as_title() {
    let slide = SlideData {
        index: 1,
        shapes: vec![shape("Title 1", Some(""), Vec::new())],
    };
    assert!(check(&[slide]).is_empty());
}

#[test]
fn title_size_checked_on_every_title_shape() {
    let slide = SlideData {
        index: 2,
        shapes: vec![
            shape("Title 1", Some("Headline"), vec![run(None, Some(16.0), None)]),
            shape(
                "Subtitle 2",
                None,
                vec![run(None, Some(12.0), None), run(None, None, None)],
            ),
        ],
    };
    let issues = check(&[slide]);
    let titles = rules_named(&issues, rules::TITLE_TOO_SMALL);

    assert_eq!(titles.len(), 2);
    assert_eq!(titles[0].shape.as_deref(), Some("Title 1"));
    assert_eq!(titles[1].shape.as_deref(), Some("Subtitle 2"));
    assert!(rules_named(&issues, rules::MISSING_TITLE).is_empty());
}

#[test]
fn slide_rules_follow_shape_rules() {
    let slide = SlideData {
        index: 1,
        shapes: vec![shape("Body", None, vec![run(None, None, Some("ABCDEF"))])],
    };
    let issues = check(&[slide]);
    let rule_names: Vec<&str> = issues.iter().map(|i| i.rule.as_str()).collect();
    assert_eq!(
        rule_names,
        vec![rules::OFF_PALETTE_COLOR, rules::MISSING_TITLE]
    );
}

#[test]
fn findings_follow_slide_and_shape_order() {
    let slides = vec![
        SlideData {
            index: 1,
            shapes: vec![
                shape("Title 1", Some("One"), Vec::new()),
                shape("A", None, vec![run(Some("Papyrus"), None, None)]),
                shape("B", None, vec![run(Some("Papyrus"), None, None)]),
            ],
        },
        SlideData {
            index: 2,
            shapes: vec![
                shape("Title 1", Some("Two"), Vec::new()),
                shape("C", None, vec![run(Some("Papyrus"), None, None)]),
            ],
        },
    ];
    let issues = check(&slides);
    let locations: Vec<(Option<u32>, Option<&str>)> = issues
        .iter()
        .map(|i| (i.slide, i.shape.as_deref()))
        .collect();

    assert_eq!(
        locations,
        vec![
            (Some(1), Some("A")),
            (Some(1), Some("B")),
            (Some(2), Some("C")),
        ]
    );
}
