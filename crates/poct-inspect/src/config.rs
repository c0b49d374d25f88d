//! Configuration and errors for the inspect tool.

use std::path::PathBuf;

use poct_message::ConformanceConfig;
use thiserror::Error;

/// Errors that can occur while inspecting a message file.
#[derive(Error, Debug)]
pub enum InspectError {
    /// I/O error reading the message file or writing the report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The message file is not a JSON array of messages.
    #[error("Invalid message file: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing the tab-separated report.
    #[error("Report error: {0}")]
    Csv(#[from] csv::Error),

    /// Message file not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },
}

/// Result type for inspect operations.
pub type InspectResult<T> = Result<T, InspectError>;

/// Default message file when neither an argument nor the environment names
/// one.
pub const DEFAULT_MESSAGES_PATH: &str = "messages.json";

/// Configuration for one inspect run.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// JSON file holding an array of messages.
    pub messages_path: PathBuf,
    /// Exit non-zero when any message has a violation.
    pub strict: bool,
    /// Rules applied to every message.
    pub conformance: ConformanceConfig,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            messages_path: PathBuf::from(DEFAULT_MESSAGES_PATH),
            strict: false,
            conformance: ConformanceConfig::default(),
        }
    }
}

impl InspectConfig {
    /// Builds the configuration from the first command-line argument and the
    /// `POCT_MESSAGES_PATH`, `POCT_STRICT` and `POCT_VENDOR_CODES`
    /// environment variables. The argument wins over the environment.
    pub fn from_env(arg: Option<String>) -> Self {
        Self::from_lookup(arg, |key| std::env::var(key).ok())
    }

    fn from_lookup(arg: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let messages_path = arg
            .or_else(|| lookup("POCT_MESSAGES_PATH"))
            .map(PathBuf::from)
            .unwrap_or(defaults.messages_path);
        let strict = lookup("POCT_STRICT")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.strict);
        let allow_vendor_codes = lookup("POCT_VENDOR_CODES")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.conformance.allow_vendor_codes);

        Self {
            messages_path,
            strict,
            conformance: ConformanceConfig {
                allow_vendor_codes,
                ..defaults.conformance
            },
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(arg: Option<&str>, vars: &[(&str, &str)]) -> InspectConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        InspectConfig::from_lookup(arg.map(str::to_string), |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(None, &[]);
        assert_eq!(config.messages_path, PathBuf::from(DEFAULT_MESSAGES_PATH));
        assert!(!config.strict);
        assert!(config.conformance.allow_vendor_codes);
    }

    #[test]
    fn test_argument_overrides_environment() {
        let config = config(Some("inbound.json"), &[("POCT_MESSAGES_PATH", "other.json")]);
        assert_eq!(config.messages_path, PathBuf::from("inbound.json"));
    }

    #[test]
    fn test_flags_from_environment() {
        let config = config(None, &[("POCT_STRICT", "TRUE"), ("POCT_VENDOR_CODES", "0")]);
        assert!(config.strict);
        assert!(!config.conformance.allow_vendor_codes);
    }

    #[test]
    fn test_unparseable_flag_keeps_default() {
        let config = config(None, &[("POCT_STRICT", "maybe")]);
        assert!(!config.strict);
    }
}
