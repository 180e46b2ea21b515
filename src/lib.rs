pub mod augment;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod source;

pub use error::{DeckGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_COMPLIANCE_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
