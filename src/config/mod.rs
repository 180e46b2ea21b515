mod filesystem;
mod loader;
mod model;
mod rules;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    AugmentConfig, ColorsConfig, Config, DEFAULT_AUGMENT_TIMEOUT_SECS, FontsConfig, LayoutConfig,
};
pub use rules::{RuleSet, normalize_color};
pub use validation::{is_hex_color, is_remote_url, validate_config_semantics};
