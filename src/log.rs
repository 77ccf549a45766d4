//! Structured logging setup for the daemon runtime shell.
//!
//! A deliberately small adaptation of the reload-handle pattern: the daemon
//! doesn't need a syslog transport or a hot-config-reload story beyond
//! picking the log level and destination once at startup.

use std::fmt;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::Layer as FmtLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::reload::Handle;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

use crate::config::{LogLevel, LogTarget, LoggingConfig};

pub struct Logger {
    filter: Handle<EnvFilter, Registry>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("filter", &self.filter).finish()
    }
}

impl Logger {
    /// Install the global `tracing` subscriber.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been installed.
    pub fn launch(config: &LoggingConfig) -> Result<&'static Logger, String> {
        let filter = make_env_filter(config);
        let (filter, filter_handle) = reload::Layer::new(filter);

        match &config.target {
            LogTarget::Stdout => {
                let layer = FmtLayer::new().with_writer(std::io::stdout);
                tracing_subscriber::registry().with(filter).with(layer).init();
            }
            LogTarget::Stderr => {
                let layer = FmtLayer::new().with_writer(std::io::stderr);
                tracing_subscriber::registry().with(filter).with(layer).init();
            }
            LogTarget::File(path) => {
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| format!("couldn't open log file {}: {e}", path.display()))?;
                let layer = FmtLayer::new().with_ansi(false).with_writer(file);
                tracing_subscriber::registry().with(filter).with(layer).init();
            }
        }

        Ok(Box::leak(Box::new(Self { filter: filter_handle })))
    }

    pub fn apply(&self, config: &LoggingConfig) -> Result<(), String> {
        self.filter.reload(make_env_filter(config)).map_err(|_| "could not reload filter".to_string())
    }
}

fn make_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::default().add_directive(LevelFilter::from(config.level.clone()).into())
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}
