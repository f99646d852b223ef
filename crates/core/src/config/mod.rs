//! Configuration management for testit

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Configuration, Mocker};
