use serde::Deserialize;
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use crate::log::LogLevel;

/// Configuration file read by [`crate::log::logger::instance`].
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
/// Log file used when the configuration cannot be loaded.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Settings the process logger is built from.
///
/// On disk this is a JSON object with two required keys:
///
/// ```json
/// { "LogLevel": "WARNING", "LogFilePath": "logs/app.log" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggerConfig {
    pub log_level: LogLevel,
    pub log_file_path: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(PathBuf),
    Io(io::Error),
    Parse(serde_json::Error),
    EmptyPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(path) => {
                write!(f, "configuration file not found: {}", path.display())
            }
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            ConfigError::EmptyPath => write!(f, "LogFilePath must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Missing(_) | ConfigError::EmptyPath => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LoggerConfig {
    /// Strictly parses a JSON document.
    ///
    /// Both keys are required and `LogLevel` must be one of `INFO`, `WARNING`,
    /// `ERROR` (case-sensitive). A leading `~` in `LogFilePath` is expanded to
    /// the home directory.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed JSON, missing or null keys, or an
    /// unknown level; [`ConfigError::EmptyPath`] for an empty `LogFilePath`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: LoggerConfig = serde_json::from_str(json)?;
        let path_str = raw.log_file_path.to_string_lossy();
        if path_str.trim().is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        Ok(Self {
            log_file_path: expand_path(&path_str),
            log_level: raw.log_level,
        })
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    /// [`ConfigError::Missing`] if the file does not exist, [`ConfigError::Io`]
    /// if it cannot be read, plus everything [`from_json_str`](Self::from_json_str)
    /// rejects.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::Missing(path.to_path_buf()),
            _ => ConfigError::Io(e),
        })?;
        Self::from_json_str(&content)
    }

    /// Loads `path`, falling back to [`LoggerConfig::default`] on any error.
    ///
    /// Never fails. The fallback replaces every field; a diagnostic line is
    /// written to stderr.
    #[must_use]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading logger config: {e}. Using defaults.");
            Self::default()
        })
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("rustylog_config_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[test]
    fn parses_both_fields() {
        let cfg =
            LoggerConfig::from_json_str(r#"{"LogLevel":"WARNING","LogFilePath":"out/app.log"}"#)
                .unwrap();
        assert_eq!(cfg.log_level, LogLevel::Warning);
        assert_eq!(cfg.log_file_path, PathBuf::from("out/app.log"));
    }

    #[test]
    fn missing_or_null_field_is_rejected() {
        for json in [
            r#"{"LogLevel":"ERROR"}"#,
            r#"{"LogFilePath":"x.log"}"#,
            r#"{"LogLevel":null,"LogFilePath":"x.log"}"#,
            r#"{"LogLevel":"ERROR","LogFilePath":null}"#,
        ] {
            assert!(
                matches!(LoggerConfig::from_json_str(json), Err(ConfigError::Parse(_))),
                "accepted: {json}"
            );
        }
    }

    #[test]
    fn unknown_or_miscased_level_is_rejected() {
        for lvl in ["DEBUG", "info", "Warning", ""] {
            let json = format!(r#"{{"LogLevel":"{lvl}","LogFilePath":"x.log"}}"#);
            assert!(LoggerConfig::from_json_str(&json).is_err(), "accepted: {lvl}");
        }
    }

    #[test]
    fn empty_path_is_rejected() {
        match LoggerConfig::from_json_str(r#"{"LogLevel":"INFO","LogFilePath":"  "}"#) {
            Err(ConfigError::EmptyPath) => {}
            other => panic!("expected EmptyPath, got: {other:?}"),
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let path = scratch_dir("missing").join("config.json");
        match LoggerConfig::load(&path) {
            Err(ConfigError::Missing(p)) => assert_eq!(p, path),
            other => panic!("expected Missing, got: {other:?}"),
        }
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let path = scratch_dir("fallback_missing").join("config.json");
        assert_eq!(LoggerConfig::load_or_default(&path), LoggerConfig::default());
    }

    #[test]
    fn load_or_default_never_applies_a_partial_config() {
        let path = scratch_dir("fallback_partial").join("config.json");
        fs::write(&path, r#"{"LogLevel":"LOUD","LogFilePath":"custom.log"}"#).unwrap();

        let cfg = LoggerConfig::load_or_default(&path);
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert_eq!(cfg.log_file_path, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn load_or_default_falls_back_on_malformed_json() {
        let path = scratch_dir("fallback_malformed").join("config.json");
        fs::write(&path, "{ LogLevel: ").unwrap();
        assert_eq!(LoggerConfig::load_or_default(&path), LoggerConfig::default());
    }

    #[test]
    fn load_reads_valid_file() {
        let path = scratch_dir("valid").join("config.json");
        fs::write(&path, r#"{"LogLevel":"ERROR","LogFilePath":"errors.log"}"#).unwrap();

        let cfg = LoggerConfig::load_or_default(&path);
        assert_eq!(cfg.log_level, LogLevel::Error);
        assert_eq!(cfg.log_file_path, PathBuf::from("errors.log"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let Ok(home) = std::env::var("HOME") else {
            return;
        };
        assert_eq!(expand_path("~/logs/a.log"), PathBuf::from(home).join("logs/a.log"));
        assert_eq!(expand_path("plain.log"), PathBuf::from("plain.log"));
    }
}
