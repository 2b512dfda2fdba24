use crate::logging::layers::console::ConsoleOutput;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_LEVEL: &str = "info";

/// `[logging]` section of the converter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub default_level: String,

    #[serde(default)]
    pub console_output: ConsoleOutput,

    /// Mirror log lines into `<log_dir>/garmin-to-hevy.log`
    #[serde(default)]
    pub enable_file: bool,

    /// Relative paths resolve against the current directory
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            console_output: ConsoleOutput::default(),
            enable_file: false,
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Filter directive in effect, `debug` when verbose output was requested.
    pub fn effective_level(&self, verbose: bool) -> &str {
        if verbose {
            "debug"
        } else {
            &self.default_level
        }
    }
}
