#![forbid(unsafe_code)]

pub mod errors;

use crate::errors::ShellConfigError;
use config::{Config, File, FileFormat};
use log::LevelFilter;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::{fs, path::Path, str::FromStr, sync::Arc};
use typed_builder::TypedBuilder;

const METADATA_SECTION: &str = "[package.metadata.shell]";

/// Settings for the browser shell.
///
/// Read from the `[package.metadata.shell]` table of a `Cargo.toml`, or built directly
/// with [`ShellOptions::builder`]. Fields left unset fall back to values that depend on
/// [`Env`].
#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ShellOptions {
    /// The `id` of the element the app is mounted into. Defaults to `root`.
    #[builder(setter(into), default = default_mount_id())]
    #[serde(default = "default_mount_id")]
    pub mount_id: Arc<str>,
    /// The environment the shell runs in. Defaults to `DEV` in debug builds and
    /// `PROD` in release builds.
    #[builder(default)]
    #[serde(default)]
    pub env: Env,
    /// Run the developer-mode purity checks at startup.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub strict_mode: Option<bool>,
    /// The most verbose level forwarded to the browser console.
    #[builder(default, setter(strip_option))]
    #[serde(default, deserialize_with = "deserialize_level")]
    pub log_level: Option<LevelFilter>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ShellOptions {
    /// Whether strict developer-mode checks are on, `true` in `DEV` unless overridden.
    pub fn strict_mode(&self) -> bool {
        self.strict_mode.unwrap_or(self.env == Env::DEV)
    }

    /// The console log level, `Debug` in `DEV` and `Warn` in `PROD` unless overridden.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.unwrap_or(match self.env {
            Env::DEV => LevelFilter::Debug,
            Env::PROD => LevelFilter::Warn,
        })
    }

    /// Checks that `mount_id` can be looked up verbatim as an element id.
    pub fn validate(&self) -> Result<(), ShellConfigError> {
        let trimmed = self.mount_id.trim();
        if trimmed.is_empty() {
            return Err(ShellConfigError::EmptyMountId);
        }
        if trimmed.len() != self.mount_id.len() {
            return Err(ShellConfigError::PaddedMountId(
                self.mount_id.to_string(),
            ));
        }
        Ok(())
    }
}

fn default_mount_id() -> Arc<str> {
    Arc::from("root")
}

fn deserialize_level<'de, D>(
    deserializer: D,
) -> Result<Option<LevelFilter>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| level_from_str(&s).map_err(serde::de::Error::custom))
        .transpose()
}

/// An enum that can be used to define the environment the shell is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Env {
    PROD,
    DEV,
}

impl Default for Env {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Env::DEV
        } else {
            Env::PROD
        }
    }
}

pub fn env_from_str(input: &str) -> Result<Env, ShellConfigError> {
    let sanitized = input.to_lowercase();
    match sanitized.as_ref() {
        "dev" | "development" => Ok(Env::DEV),
        "prod" | "production" => Ok(Env::PROD),
        _ => Err(ShellConfigError::EnvError(input.to_string())),
    }
}

impl FromStr for Env {
    type Err = ShellConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        env_from_str(input)
    }
}

impl TryFrom<String> for Env {
    type Error = ShellConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        env_from_str(s.as_str())
    }
}

pub fn level_from_str(input: &str) -> Result<LevelFilter, ShellConfigError> {
    LevelFilter::from_str(input.trim())
        .map_err(|_| ShellConfigError::LogLevelError(input.to_string()))
}

/// Loads [`ShellOptions`] from the `[package.metadata.shell]` section of a `Cargo.toml`
/// given as text.
pub fn get_config_from_str(text: &str) -> Result<ShellOptions, ShellConfigError> {
    let re: Regex = Regex::new(r"(?m)^\[package\.metadata\.shell\]")
        .expect("metadata section pattern is valid");
    let start = re
        .find(text)
        .ok_or(ShellConfigError::ConfigSectionNotFound)?
        .start();

    // so that the config crate reports errors at the right line
    let newlines = text[..start].matches('\n').count();
    let input = "\n".repeat(newlines) + &text[start..];
    let toml = input.replacen(METADATA_SECTION, "[shell-options]", 1);

    let settings = Config::builder()
        .add_source(File::from_str(&toml, FileFormat::Toml))
        .build()?;
    let options: ShellOptions = settings.get("shell-options")?;
    options.validate()?;
    Ok(options)
}

/// Loads [`ShellOptions`] from the `Cargo.toml` at `path`.
pub fn get_config_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<ShellOptions, ShellConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|_| {
        ShellConfigError::ConfigNotFound(path.display().to_string())
    })?;
    get_config_from_str(&text)
}
