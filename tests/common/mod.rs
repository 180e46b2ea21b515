#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the deck-guard binary.
#[macro_export]
macro_rules! deck_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("deck-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local `.deck-guard.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".deck-guard.toml", content);
    }

    /// Writes slide data JSON to `deck.json`.
    pub fn create_deck(&self, content: &str) {
        self.create_file("deck.json", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Two slides, every run on-brand.
pub const CLEAN_DECK: &str = r#"[
  {"index": 1, "shapes": [
    {"name": "Title 1", "type": "Placeholder", "text": "Quarterly Review",
     "fonts": [{"name": "Georgia", "size": 28, "color": "002D72", "bold": true}]},
    {"name": "Content 2", "type": "TextBox", "text": "Revenue up\nCosts down",
     "fonts": [{"name": "Arial", "size": 14, "color": "5B6770"}]}
  ]},
  {"index": 2, "shapes": [
    {"name": "Title 1", "type": "Placeholder", "text": "Outlook",
     "fonts": [{"name": "Arial Bold", "size": 24, "color": "FFFFFF"}]}
  ]}
]"#;

/// One slide with a non-brand font and an off-palette color in the body.
pub const OFF_BRAND_DECK: &str = r#"[
  {"index": 1, "shapes": [
    {"name": "Title 1", "type": "Placeholder", "text": "Agenda",
     "fonts": [{"name": "Arial", "size": 24, "color": "002D72"}]},
    {"name": "Body 2", "type": "TextBox", "text": "Hello",
     "fonts": [{"name": "Comic Sans MS", "size": 12, "color": "00FF00"}]}
  ]}
]"#;

/// Slide with a body run larger than the default 18pt ceiling and no title.
pub const UNTITLED_LARGE_BODY_DECK: &str = r#"{"slides": [
  {"index": 3, "shapes": [
    {"name": "Body", "type": "TextBox", "text": "Big",
     "fonts": [{"name": "Arial", "size": 22, "color": "002D72"}]}
  ]}
]}"#;

pub const STRICT_CONFIG: &str = r#"
[fonts]
allowed = ["Georgia"]

[layout]
max_body_font_size = 12
"#;
