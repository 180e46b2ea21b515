//! Rule names as they appear in reports.

pub const NON_BRAND_FONT: &str = "Non-OW font";
pub const LARGE_BODY_TEXT: &str = "Large body text";
pub const TEXT_TOO_SMALL: &str = "Text too small";
pub const OFF_PALETTE_COLOR: &str = "Off-palette color";
pub const TOO_MANY_BULLETS: &str = "Too many bullets";
pub const MISSING_TITLE: &str = "Missing title";
pub const TITLE_TOO_SMALL: &str = "Title too small";
pub const ALL_CHECKS_PASSED: &str = "All checks passed";

/// Black is the host's default text color and is accepted even when the
/// configured palette omits it.
pub const IMPLICIT_ALLOWED_COLOR: &str = "000000";
