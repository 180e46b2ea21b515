use indexmap::IndexSet;

use crate::config::{RuleSet, normalize_color};
use crate::model::{FontRun, Issue, ShapeData, SlideData};

use super::Checker;
use super::rules;

/// Applies the brand rule set to extracted slide data.
///
/// Findings are emitted in a fixed order: slides and shapes in input order;
/// within a shape, each run's font, size and color rules, then the bullet
/// rule; after all shapes, the slide-level title rules.
pub struct BrandChecker<'a> {
    rules: &'a RuleSet,
    allowed_fonts: Vec<String>,
    palette: IndexSet<String>,
}

impl<'a> BrandChecker<'a> {
    #[must_use]
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            allowed_fonts: rules
                .allowed_fonts()
                .iter()
                .map(|f| f.to_lowercase())
                .collect(),
            palette: rules.palette(),
        }
    }

    fn is_brand_font(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.allowed_fonts
            .iter()
            .any(|allowed| name.contains(allowed.as_str()))
    }

    fn is_brand_color(&self, color: &str) -> bool {
        let normalized = normalize_color(color);
        normalized == rules::IMPLICIT_ALLOWED_COLOR || self.palette.contains(&normalized)
    }

    fn check_run(&self, slide: u32, shape: &ShapeData, run: &FontRun, issues: &mut Vec<Issue>) {
        let layout = self.rules.layout();
        let locate = |issue: Issue| issue.at_slide(slide).on_shape(shape.name.as_str());

        if let Some(name) = run.name.as_deref()
            && !self.is_brand_font(name)
        {
            issues.push(locate(Issue::error(
                rules::NON_BRAND_FONT,
                format!(
                    "Font \"{name}\" is not a brand font (allowed: {})",
                    self.rules.allowed_fonts().join(", ")
                ),
            )));
        }

        if let Some(size) = run.size {
            if size > layout.max_body_font_size && !shape.is_title() {
                issues.push(locate(Issue::warning(
                    rules::LARGE_BODY_TEXT,
                    format!(
                        "Body text is {size}pt, above the {}pt maximum",
                        layout.max_body_font_size
                    ),
                )));
            }
            if size < layout.min_body_font_size {
                issues.push(locate(Issue::error(
                    rules::TEXT_TOO_SMALL,
                    format!(
                        "Text is {size}pt, below the {}pt minimum",
                        layout.min_body_font_size
                    ),
                )));
            }
        }

        if let Some(color) = run.color.as_deref()
            && !self.is_brand_color(color)
        {
            issues.push(locate(Issue::warning(
                rules::OFF_PALETTE_COLOR,
                format!(
                    "Color #{} is not in the brand palette",
                    normalize_color(color)
                ),
            )));
        }
    }

    fn check_shape(&self, slide: u32, shape: &ShapeData, issues: &mut Vec<Issue>) {
        for run in &shape.fonts {
            self.check_run(slide, shape, run, issues);
        }

        let Some(text) = shape.text.as_deref() else {
            return;
        };
        let max = self.rules.layout().max_bullets_per_slide;
        let lines = text.matches('\n').count() + 1;
        if lines > max {
            issues.push(
                Issue::warning(
                    rules::TOO_MANY_BULLETS,
                    format!("{lines} lines of text, more than the {max} allowed"),
                )
                .at_slide(slide)
                .on_shape(shape.name.as_str()),
            );
        }
    }

    fn check_titles(&self, slide: &SlideData, issues: &mut Vec<Issue>) {
        let titles: Vec<&ShapeData> = slide.shapes.iter().filter(|s| s.is_title()).collect();

        if !titles.iter().any(|s| s.text.is_some()) {
            issues.push(
                Issue::warning(rules::MISSING_TITLE, "Slide has no title text")
                    .at_slide(slide.index),
            );
        }

        let min = self.rules.layout().min_title_font_size;
        for shape in titles {
            for size in shape.fonts.iter().filter_map(|run| run.size) {
                if size < min {
                    issues.push(
                        Issue::error(
                            rules::TITLE_TOO_SMALL,
                            format!("Title text is {size}pt, below the {min}pt minimum"),
                        )
                        .at_slide(slide.index)
                        .on_shape(shape.name.as_str()),
                    );
                }
            }
        }
    }

    fn check_slide(&self, slide: &SlideData, issues: &mut Vec<Issue>) {
        for shape in &slide.shapes {
            self.check_shape(slide.index, shape, issues);
        }
        self.check_titles(slide, issues);
    }
}

impl Checker for BrandChecker<'_> {
    fn evaluate(&self, slides: &[SlideData]) -> Vec<Issue> {
        let mut issues = Vec::new();
        for slide in slides {
            self.check_slide(slide, &mut issues);
        }
        issues
    }
}

#[cfg(test)]
#[path = "brand_tests.rs"]
mod tests;
