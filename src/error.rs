//! The runtime shell's own top-level error type. Everything below `main`
//! returns a `Result`; this is the one place a failure turns into a
//! process exit code and a message on stderr.

use std::fmt;
use std::path::PathBuf;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum ExitError {
    Config(ConfigError),
    Logging(String),
    Lex { path: PathBuf, source: swand_cfg::lex::LexError },
    Parse { path: PathBuf, source: swand_cfg::ParseError },
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitError::Config(source) => write!(f, "{source}"),
            ExitError::Logging(message) => write!(f, "couldn't set up logging: {message}"),
            ExitError::Lex { path, source } => write!(f, "{}: {source}", path.display()),
            ExitError::Parse { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ExitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExitError::Config(source) => Some(source),
            ExitError::Logging(_) => None,
            ExitError::Lex { source, .. } => Some(source),
            ExitError::Parse { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for ExitError {
    fn from(source: ConfigError) -> Self {
        ExitError::Config(source)
    }
}
