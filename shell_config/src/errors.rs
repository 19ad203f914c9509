use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellConfigError {
    #[error("config file {0:?} could not be read")]
    ConfigNotFound(String),
    #[error("package.metadata.shell section missing from Cargo.toml")]
    ConfigSectionNotFound,
    #[error("unknown environment {0:?}, expected DEV or PROD")]
    EnvError(String),
    #[error("unknown log level {0:?}")]
    LogLevelError(String),
    #[error("mount-id must not be empty")]
    EmptyMountId,
    #[error("mount-id {0:?} has surrounding whitespace")]
    PaddedMountId(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ShellConfigError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigError(e.to_string())
    }
}
