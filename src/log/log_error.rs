use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum LogError {
    /// The log file could not be opened, written or read.
    Io { path: PathBuf, source: io::Error },
    /// A severity name that is not one of `INFO`, `WARNING`, `ERROR`.
    UnknownLevel(String),
}

impl LogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LogError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::Io { path, source } => {
                write!(f, "log file {}: {source}", path.display())
            }
            LogError::UnknownLevel(name) => write!(f, "unknown log level: {name:?}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io { source, .. } => Some(source),
            LogError::UnknownLevel(_) => None,
        }
    }
}
