use serde::{Deserialize, Serialize};

/// One contiguous run of styled text within a shape.
///
/// Every attribute is optional: the host reports `null` for mixed or
/// unavailable properties, and a missing attribute never triggers a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontRun {
    pub name: Option<String>,
    /// Point size.
    pub size: Option<f64>,
    /// Hex color without `#` (a leading `#` is tolerated).
    pub color: Option<String>,
    pub bold: Option<bool>,
}

/// Host shape kind. Kinds this crate does not know deserialize as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    GeometricShape,
    Group,
    Image,
    Line,
    Placeholder,
    Table,
    TextBox,
    Chart,
    SmartArt,
    #[default]
    #[serde(other)]
    Other,
}

/// Shape bounds in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A positioned content element on a slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeData {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// `None` when the shape has no text frame.
    pub text: Option<String>,
    pub fonts: Vec<FontRun>,
    pub position: Position,
}

impl ShapeData {
    /// Title shapes are recognized by name, case-insensitively.
    #[must_use]
    pub fn is_title(&self) -> bool {
        self.name.to_lowercase().contains("title")
    }
}

/// A slide as extracted for one QA run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideData {
    /// 1-based position in presentation order at extraction time.
    pub index: u32,
    #[serde(default)]
    pub shapes: Vec<ShapeData>,
}
