use chrono::{DateTime, Local};

use crate::log::log_level::LogLevel;

/// `chrono` format string for the leading timestamp of each line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Represents a single log entry before it is persisted.
///
/// Entries are not stored as objects; they exist only long enough to be
/// rendered into one line of the log file.
#[derive(Debug, Clone)]
pub struct LogMsg {
    /// The severity level of the entry.
    pub level: LogLevel,
    /// Wall-clock local time at which the entry was created.
    pub timestamp: DateTime<Local>,
    /// The free-text message.
    pub text: String,
}

impl LogMsg {
    /// Creates a new `LogMsg` stamped with the current local time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rustylog::log::{LogLevel, LogMsg};
    ///
    /// let msg = LogMsg::new(LogLevel::Info, "Connection established");
    /// assert!(msg.render().ends_with("[INFO] Connection established"));
    /// ```
    pub fn new(level: LogLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            text: text.into(),
        }
    }

    /// Formats the entry as `<timestamp> [<LEVEL>] <message>`, without a line
    /// terminator.
    ///
    /// Line breaks inside the message are replaced by spaces so one entry
    /// always occupies exactly one line.
    #[must_use]
    pub fn render(&self) -> String {
        let text: String = self
            .text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        format!(
            "{} {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level.tag(),
            text
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn render_places_tag_between_timestamp_and_text() {
        let msg = LogMsg {
            level: LogLevel::Warning,
            timestamp: Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).single().unwrap(),
            text: "disk almost full".into(),
        };
        assert_eq!(msg.render(), "2024-03-09 07:05:01.000 [WARNING] disk almost full");
    }

    #[test]
    fn render_never_spans_lines() {
        let msg = LogMsg::new(LogLevel::Error, "first\nsecond\r\nthird");
        let line = msg.render();
        assert_eq!(line.lines().count(), 1);
        assert!(line.ends_with("[ERROR] first second  third"));
    }
}
