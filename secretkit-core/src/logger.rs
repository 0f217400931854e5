//! Log forwarding across the FFI boundary.
//!
//! The library logs through the [`log`] facade. Host applications install a
//! [`Logger`] once at startup to receive those records; a plain Rust
//! implementation works the same way for native consumers (the developer CLI
//! does exactly that).

use std::sync::{Arc, OnceLock};

/// Receiver for log records emitted by this crate.
#[uniffi::export(with_foreign)]
pub trait Logger: Send + Sync {
    /// Delivers one log record.
    fn log(&self, level: LogLevel, message: String);
}

/// Severity of a forwarded log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum LogLevel {
    /// Extremely detailed diagnostics.
    Trace,
    /// Developer-facing debugging information.
    Debug,
    /// Progress of normal operation.
    Info,
    /// Potentially harmful situations.
    Warn,
    /// Failures the library recovered from or reported.
    Error,
}

static LOGGER_INSTANCE: OnceLock<Arc<dyn Logger>> = OnceLock::new();

/// Bridges the [`log`] facade to the installed [`Logger`].
struct ForwardingLogger;

impl log::Log for ForwardingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        // Debug and trace records from other crates are dropped; the host
        // only cares about this library's internals.
        let from_this_crate = record
            .module_path()
            .is_some_and(|path| path.starts_with("secretkit"));
        if !from_this_crate && record.level() > log::Level::Info {
            return;
        }
        if let Some(logger) = LOGGER_INSTANCE.get() {
            logger.log(level_of(record.level()), format!("{}", record.args()));
        }
    }

    fn flush(&self) {}
}

const fn level_of(level: log::Level) -> LogLevel {
    match level {
        log::Level::Error => LogLevel::Error,
        log::Level::Warn => LogLevel::Warn,
        log::Level::Info => LogLevel::Info,
        log::Level::Debug => LogLevel::Debug,
        log::Level::Trace => LogLevel::Trace,
    }
}

/// Installs the log receiver.
///
/// Call once at startup, before the store is used. A second call is ignored,
/// as is installation when another `log` backend already claimed the global
/// logger.
#[uniffi::export]
pub fn set_logger(logger: Arc<dyn Logger>) {
    if LOGGER_INSTANCE.set(logger).is_err() {
        return;
    }
    static FORWARDER: ForwardingLogger = ForwardingLogger;
    if log::set_logger(&FORWARDER).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}
