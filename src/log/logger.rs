use crate::{
    config::{DEFAULT_CONFIG_PATH, LoggerConfig},
    log::{log_error::LogError, log_level::LogLevel, log_msg::LogMsg, log_sink::LogSink},
};

use std::{
    fs::{self, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, OnceLock},
};

/// Synchronous, thread-safe logger that appends one line per entry to a file.
///
/// # Concurrency
///
/// The minimum level lives behind a mutex that also serializes file access.
/// [`try_append`](Self::try_append) holds it across "read level, write line",
/// so concurrent callers produce complete, non-interleaved lines and a
/// [`set_level`](Self::set_level) is seen by every append issued after it
/// returns. Lines from one thread keep their issue order; ordering across
/// threads is whatever order they win the lock in.
///
/// The file is opened by path for every entry that passes the filter, so a
/// log file removed or replaced between appends is recreated rather than
/// written through a stale handle.
pub struct Logger {
    state: Mutex<LoggerState>,
    file_path: PathBuf,
}

struct LoggerState {
    min_level: LogLevel,
}

impl Logger {
    /// Builds a logger from an already resolved configuration.
    ///
    /// Most callers want the shared instance from [`instance`] instead.
    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                min_level: config.log_level,
            }),
            file_path: config.log_file_path,
        }
    }

    /// Changes the minimum level. Already written lines are not affected.
    pub fn set_level(&self, level: LogLevel) {
        self.lock_state().min_level = level;
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.lock_state().min_level
    }

    /// Returns the path of the backing log file.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `message` if `level` passes the current minimum level.
    ///
    /// # Returns
    /// `Ok(true)` if a line was written, `Ok(false)` if the entry was filtered
    /// out (the file is not touched at all in that case).
    ///
    /// # Errors
    /// Returns [`LogError::Io`] if the file cannot be opened or written.
    pub fn try_append(&self, message: &str, level: LogLevel) -> Result<bool, LogError> {
        let state = self.lock_state();
        if level < state.min_level {
            return Ok(false);
        }

        let mut line = LogMsg::new(level, message).render();
        line.push('\n');

        // The guard stays alive until the handle is closed.
        let mut file = open_append(&self.file_path)?;
        file.write_all(line.as_bytes())
            .map_err(|e| LogError::io(&self.file_path, e))?;
        drop(file);
        drop(state);
        Ok(true)
    }

    /// Best-effort append: failures are reported on stderr and never reach
    /// the caller.
    pub fn append(&self, message: &str, level: LogLevel) {
        if let Err(e) = self.try_append(message, level) {
            eprintln!("(logger) dropped {level} entry: {e}");
        }
    }

    /// The state is consistent between statements, so a panic on another
    /// thread while holding the lock does not invalidate it.
    fn lock_state(&self) -> MutexGuard<'_, LoggerState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl LogSink for Logger {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str) {
        self.append(msg, level);
    }
}

fn open_append(path: &Path) -> Result<File, LogError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| LogError::io(dir, e))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::io(path, e))
}

/// Lazily built, exactly-once holder for a [`Logger`].
///
/// The configuration loader passed to [`get_or_init_with`](Self::get_or_init_with)
/// runs at most once, even when many threads race on first access; every
/// caller gets a reference to the same instance.
pub struct LoggerCell {
    cell: OnceLock<Logger>,
}

impl LoggerCell {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_init_with<F>(&self, load: F) -> &Logger
    where
        F: FnOnce() -> LoggerConfig,
    {
        self.cell.get_or_init(|| Logger::from_config(load()))
    }

    /// Returns the logger if it has been initialized.
    #[must_use]
    pub fn get(&self) -> Option<&Logger> {
        self.cell.get()
    }
}

impl Default for LoggerCell {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: LoggerCell = LoggerCell::new();

/// Returns the process-wide logger, reading [`DEFAULT_CONFIG_PATH`] on first
/// access.
///
/// A missing or malformed configuration never fails here: defaults are used
/// and a diagnostic is printed to stderr.
pub fn instance() -> &'static Logger {
    instance_from(DEFAULT_CONFIG_PATH)
}

/// Like [`instance`], but reads `config_path` if this is the first access.
///
/// Once the logger exists the path is ignored and the existing instance is
/// returned; configuration is read at most once per process.
pub fn instance_from<P: AsRef<Path>>(config_path: P) -> &'static Logger {
    GLOBAL.get_or_init_with(|| LoggerConfig::load_or_default(config_path.as_ref()))
}
