use crate::strict::StrictModeViolation;
use hash_router::RouteError;
use shell_config::errors::ShellConfigError;
use thiserror::Error;

/// Everything that can stop the shell from mounting. None of these are recoverable: a
/// misconfigured host page or route table cannot run the app in a degraded form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    #[error("no element with id {id:?} to mount the app into")]
    MissingMountTarget { id: String },
    #[error("element with id {id:?} is not an HTML element")]
    MountTargetNotHtml { id: String },
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),
    #[error(transparent)]
    Strict(#[from] StrictModeViolation),
    #[error("invalid shell configuration: {0}")]
    Config(#[from] ShellConfigError),
}
