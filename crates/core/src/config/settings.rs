use crate::{
    error::{Error, Result},
    impl_case_insensitive_deserialize,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names, checked in this order in every directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".testit.json", "testit.json"];

/// The mocking framework generated code targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mocker {
    Mockito,
    #[default]
    MockK,
}

impl_case_insensitive_deserialize!(
    Mocker,
    Mockito => ["mockito"],
    MockK => ["mockk"]
);

impl fmt::Display for Mocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mocker::Mockito => f.write_str("mockito"),
            Mocker::MockK => f.write_str("mockk"),
        }
    }
}

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Configuration {
    #[serde(default)]
    pub mocker: Mocker,
    /// Name of the field holding the instance under test
    #[serde(default = "default_class_under_test")]
    pub class_under_test: String,
    /// Name of the variable receiving the result of the call under test
    #[serde(default = "default_actual_value")]
    pub actual_value: String,
    /// Statement emitted where the assertion belongs
    #[serde(default = "default_assertion")]
    pub default_assertion: String,
}

fn default_class_under_test() -> String {
    "cut".to_string()
}

fn default_actual_value() -> String {
    "actualValue".to_string()
}

fn default_assertion() -> String {
    "assertEquals(expected, actualValue)".to_string()
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mocker: Mocker::default(),
            class_under_test: default_class_under_test(),
            actual_value: default_actual_value(),
            default_assertion: default_assertion(),
        }
    }
}

impl Configuration {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    debug!("Found config file: {:?}", config_path);
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Nearest config file above `start_path`, or the defaults when there is none
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("No config file above {:?}, using defaults", start_path);
                Ok(Self::default())
            }
        }
    }
}
