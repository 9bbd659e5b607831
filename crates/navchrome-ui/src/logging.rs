//! Browser-console logging for `tracing` events.
//!
//! The core crate reports config loading and menu state changes through
//! `tracing`. In the browser those events are formatted by a
//! `tracing-subscriber` fmt layer and written to the matching `console.*`
//! method, so warnings show up as warnings in devtools.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};
use wasm_bindgen::JsValue;

/// Crates whose events are shown.
const TARGETS: [&str; 2] = ["navchrome_core", "navchrome_ui"];

/// Logging configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Most verbose level shown in the console.
    pub level: Level,
    /// Whether to include the target module in each line.
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl LoggingConfig {
    /// Verbose logging for debug builds.
    #[must_use]
    pub const fn development() -> Self {
        Self {
            level: Level::DEBUG,
            include_target: true,
        }
    }

    /// Warnings and errors only.
    #[must_use]
    pub const fn production() -> Self {
        Self {
            level: Level::WARN,
            include_target: false,
        }
    }

    /// Pick by build profile.
    #[must_use]
    pub const fn auto() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Filter directives for this configuration.
    #[must_use]
    pub fn directives(&self) -> String {
        let level = level_to_directive(self.level);
        TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the console subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(config.include_target)
        .with_writer(MakeConsoleWriter)
        .with_filter(EnvFilter::new(config.directives()));

    tracing_subscriber::registry().with(layer).try_init()
}

const fn level_to_directive(level: Level) -> &'static str {
    match level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

/// Console method an event is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    /// `console.error`
    Error,
    /// `console.warn`
    Warn,
    /// `console.info`
    Info,
    /// `console.debug`
    Debug,
}

impl ConsoleMethod {
    /// Method for an event level. Trace goes to `console.debug`.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            Level::DEBUG | Level::TRACE => Self::Debug,
        }
    }

    fn emit(self, line: &str) {
        let line = JsValue::from_str(line.trim_end());
        match self {
            Self::Error => web_sys::console::error_1(&line),
            Self::Warn => web_sys::console::warn_1(&line),
            Self::Info => web_sys::console::info_1(&line),
            Self::Debug => web_sys::console::debug_1(&line),
        }
    }
}

/// Hands out a [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
    }
}

/// Buffers one formatted event and writes it to the console on drop.
struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        self.method.emit(&String::from_utf8_lossy(&self.buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_production() {
        assert_eq!(LoggingConfig::default(), LoggingConfig::production());
        assert_eq!(LoggingConfig::production().level, Level::WARN);
    }

    #[test]
    fn test_directives_cover_both_crates() {
        assert_eq!(
            LoggingConfig::development().directives(),
            "navchrome_core=debug,navchrome_ui=debug"
        );
        assert_eq!(
            LoggingConfig::production().directives(),
            "navchrome_core=warn,navchrome_ui=warn"
        );
    }

    #[test]
    fn test_console_method_per_level() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_empty_writer_drops_quietly() {
        // Dropping without output must not reach the console.
        drop(ConsoleWriter::new(ConsoleMethod::Warn));
    }
}
