use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::log::log_error::LogError;

/// Defines the severity levels for log messages.
///
/// Declaration order is the filter order: `Info < Warning < Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Informational messages that highlight the progress of the application.
    Info,
    /// Potentially harmful situations.
    Warning,
    /// Error events that might still allow the application to continue running.
    Error,
}

impl LogLevel {
    /// Every level, lowest first.
    pub const ALL: [LogLevel; 3] = [LogLevel::Info, LogLevel::Warning, LogLevel::Error];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// The bracketed marker embedded in every persisted line, e.g. `[WARNING]`.
    ///
    /// `LogReader` matches on this text, so it must stay stable.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Error => "[ERROR]",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    /// Case-sensitive: only the exact enumeration names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|lvl| lvl.as_str() == s)
            .ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}
