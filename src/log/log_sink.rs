use crate::log::log_level::LogLevel;

/// Anything that accepts leveled log lines.
///
/// Components take an `Arc<dyn LogSink>` so they can be handed the process
/// logger, or a [`NoopLogSink`](crate::log::NoopLogSink) in tests.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str);
}
