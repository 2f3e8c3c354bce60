//! Configuration errors

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// File system step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Read,
    Write,
    Backup,
    CreateDir,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Backup => "back up",
            Self::CreateDir => "create directory",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not {action} {path}: {source}")]
    Io {
        action: FileAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but holds nothing; not treated as "use defaults"
    #[error("Config file {path} is empty")]
    Empty { path: PathBuf },

    #[error("Config file {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config could not be encoded as TOML: {0}")]
    Encode(#[from] toml::ser::Error),

    /// Refused to save a config with invalid settings
    #[error("Config has {} invalid setting(s): {}", .0.len(), join(.0))]
    Invalid(Vec<ValidationError>),

    #[error("No user config directory is available on this platform")]
    NoConfigDir,
}

impl ConfigError {
    pub(crate) fn io(action: FileAction, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One invalid setting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}{}", found(.value))]
pub struct ValidationError {
    /// Dotted path of the setting (e.g. "site.application_root")
    pub field: String,
    pub message: String,
    pub value: Option<String>,
}

fn found(value: &Option<String>) -> String {
    match value {
        Some(value) => format!(" (found {:?})", value),
        None => String::new(),
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Same as [`ValidationError::new`], recording the rejected value
    pub fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Self::new(field, message)
        }
    }
}
