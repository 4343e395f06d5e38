use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::log::{log_error::LogError, log_level::LogLevel};

/// Reads back lines persisted by a [`Logger`](crate::log::Logger).
///
/// Every call re-opens the file and sees its contents at that moment; it is
/// not a live tail. A reader running while writers are still active may see
/// only a prefix of what ends up in the file.
///
/// Lines are decoded lossily: invalid UTF-8 becomes `U+FFFD` instead of
/// failing the whole read.
#[derive(Debug, Clone)]
pub struct LogReader {
    file_path: PathBuf,
}

impl LogReader {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns, in file order, every line tagged with exactly `level`.
    ///
    /// Matching is on the literal tag (`[WARNING]`), so asking for `Info`
    /// does not return warnings or errors. Use
    /// [`read_logs_at_least`](Self::read_logs_at_least) for a threshold.
    ///
    /// # Errors
    /// [`LogError::Io`] if the file does not exist or cannot be read.
    pub fn read_logs(&self, level: LogLevel) -> Result<Vec<String>, LogError> {
        let tag = level.tag();
        self.filter_lines(|line| line.contains(tag))
    }

    /// Returns, in file order, every line tagged with `level` or anything more
    /// severe.
    ///
    /// # Errors
    /// [`LogError::Io`] if the file does not exist or cannot be read.
    pub fn read_logs_at_least(&self, level: LogLevel) -> Result<Vec<String>, LogError> {
        self.filter_lines(|line| {
            LogLevel::ALL
                .iter()
                .any(|lvl| *lvl >= level && line.contains(lvl.tag()))
        })
    }

    fn filter_lines<F>(&self, mut keep: F) -> Result<Vec<String>, LogError>
    where
        F: FnMut(&str) -> bool,
    {
        let file = File::open(&self.file_path).map_err(|e| LogError::io(&self.file_path, e))?;

        let mut out = Vec::new();
        for raw in BufReader::new(file).split(b'\n') {
            let mut raw = raw.map_err(|e| LogError::io(&self.file_path, e))?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            let line = String::from_utf8_lossy(&raw);
            if keep(&line) {
                out.push(line.into_owned());
            }
        }
        Ok(out)
    }
}
