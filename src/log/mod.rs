pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_reader;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;

pub use log_error::LogError;
pub use log_level::LogLevel;
pub use log_msg::LogMsg;
pub use log_reader::LogReader;
pub use log_sink::LogSink;
pub use logger::{Logger, LoggerCell};
pub use noop_log_sink::NoopLogSink;
