//! Environment configuration for hosts embedding the core.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Env var holding the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "HELLO_ADDON_LOG_LEVEL";
/// Env var holding the absolute log directory. Logging stays off when unset.
pub const LOG_DIR_ENV: &str = "HELLO_ADDON_LOG_DIR";

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LoggingConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = LoggingConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn reads_and_trims_values() {
        let config = LoggingConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_ENV, " warn "),
            (LOG_DIR_ENV, " /var/log/hello "),
        ]));
        assert_eq!(config.level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/hello")));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            LoggingConfig::from_lookup(lookup_from(&[(LOG_LEVEL_ENV, "  "), (LOG_DIR_ENV, "")]));
        assert_eq!(config.level, default_log_level());
        assert_eq!(config.log_dir, None);
    }
}
