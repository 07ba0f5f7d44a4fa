//! Logging table: root level, handlers and named loggers

use std::fmt;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;

/// Env var: root log level
pub const ROOT_LOG_LEVEL_ENV: &str = "ROOT_LOG_LEVEL";

/// Tracing target of the request logging middleware
pub const REQUEST_LOG_TARGET: &str = "request_log";

/// Severity names accepted for the root level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    NotSet,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::NotSet => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }

    /// `EnvFilter` directive for this level
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::NotSet => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOTSET" => Ok(LogLevel::NotSet),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            other => Err(ConfigError::invalid(
                ROOT_LOG_LEVEL_ENV,
                format!("unknown level {:?}", other),
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::NotSet => "NOTSET",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

/// Line layout of a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Time and message
    Short,
    /// Time, level, thread and message
    Verbose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub name: &'static str,
    pub format: LogFormat,
}

/// A named logger routed to its own handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    pub target: &'static str,
    pub handler: &'static str,
    pub level: LogLevel,
    /// Whether events also reach the root handler
    pub propagate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub root_level: LogLevel,
    pub root_handler: &'static str,
    pub handlers: Vec<Handler>,
    pub loggers: Vec<Logger>,
}

impl LoggingSettings {
    /// The fixed handler table with the given root level
    pub fn with_root_level(root_level: LogLevel) -> Self {
        Self {
            root_level,
            root_handler: "console",
            handlers: vec![
                Handler {
                    name: "console",
                    format: LogFormat::Verbose,
                },
                Handler {
                    name: "console_short",
                    format: LogFormat::Short,
                },
            ],
            loggers: vec![Logger {
                target: REQUEST_LOG_TARGET,
                handler: "console_short",
                level: LogLevel::Info,
                propagate: false,
            }],
        }
    }

    pub fn handler(&self, name: &str) -> Option<&Handler> {
        self.handlers.iter().find(|handler| handler.name == name)
    }

    /// Format of the named handler; unknown handlers fall back to verbose
    pub fn format_of(&self, handler: &str) -> LogFormat {
        self.handler(handler)
            .map(|handler| handler.format)
            .unwrap_or(LogFormat::Verbose)
    }

    pub fn logger(&self, target: &str) -> Option<&Logger> {
        self.loggers.iter().find(|logger| logger.target == target)
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self::with_root_level(LogLevel::Info)
    }
}
