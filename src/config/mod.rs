#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::logger::{DEFAULT_DIRECTIVE, VERBOSE_DIRECTIVE};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Effective settings for the demo binary once file and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_directive: String,
    pub json_logs: bool,
    pub format: OutputFormat,
    pub numbered: bool,
}

impl Settings {
    /// Flags win over the file; the file wins over built-in defaults.
    pub fn resolve(
        file: &TomlConfig,
        format_flag: Option<&str>,
        verbose: bool,
        json_logs_flag: bool,
    ) -> Self {
        let log_directive = if verbose {
            VERBOSE_DIRECTIVE.to_string()
        } else {
            file.log_level().unwrap_or(DEFAULT_DIRECTIVE).to_string()
        };

        let format = match format_flag.unwrap_or_else(|| file.output_format()) {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            log_directive,
            json_logs: json_logs_flag || file.json_logs(),
            format,
            numbered: file.numbered(),
        }
    }
}
