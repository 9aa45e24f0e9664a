//! Logger module for pytac
//!
//! Compact `tracing` output on stderr: the level, then the message and any
//! fields, e.g. ` WARN compilation failed with SyntaxError: ...`. No timestamp,
//! target or colors.
//!
//! # Usage
//!
//! ```rust
//! use pytac::util::logger;
//!
//! logger::init();
//! tracing::info!("Hello, {}", "world");
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl LogLevel {
    /// Level selected by repeated `-v` flags, never quieter than `self`
    pub fn raised_by(
        self,
        verbosity: u8,
    ) -> LogLevel {
        let requested = match verbosity {
            0 => return self,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        if tracing::Level::from(requested) > tracing::Level::from(self) {
            requested
        } else {
            self
        }
    }
}

/// Initialize logger with default configuration (WARN level)
pub fn init() {
    init_with_level(LogLevel::default());
}

/// Initialize logger with custom level
pub fn init_with_level(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    // 不显示时间、不显示模块路径、无颜色；日志写到 stderr，不污染 JSON 输出
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(filter);

    Registry::default().with(layer).init();
}
