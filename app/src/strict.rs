//! Developer-mode purity check for startup compositions.
//!
//! With [`StrictMode::On`] a composition is invoked twice and both results must be equal;
//! a difference means the composition depends on hidden state or has side effects.
//! With [`StrictMode::Off`] it is a plain call.

use shell_config::ShellOptions;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrictMode {
    On,
    #[default]
    Off,
}

impl From<&ShellOptions> for StrictMode {
    fn from(options: &ShellOptions) -> Self {
        if options.strict_mode() {
            StrictMode::On
        } else {
            StrictMode::Off
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "composition is not pure: first call produced {first}, second call produced \
     {second}"
)]
pub struct StrictModeViolation {
    pub first: String,
    pub second: String,
}

pub fn strict_compose<T, F>(mode: StrictMode, compose: F) -> Result<T, StrictModeViolation>
where
    F: Fn() -> T,
    T: PartialEq + Debug,
{
    let first = compose();
    if mode == StrictMode::Off {
        return Ok(first);
    }

    let second = compose();
    if first != second {
        return Err(StrictModeViolation {
            first: format!("{first:?}"),
            second: format!("{second:?}"),
        });
    }
    log::trace!("strict mode: composition is stable");
    Ok(first)
}
