//! Layered configuration.
//!
//! Values are merged, later sources winning:
//!
//! 1. built-in defaults,
//! 2. `config.toml`, `config.yaml` and `config.json` in the user configuration
//!    directory, or a single file given explicitly,
//! 3. `BOOKCASE_*` environment variables (`BOOKCASE_PAGE_SIZE=12`).

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::instrument;

pub const ENV_PREFIX: &str = "BOOKCASE_";
/// Books revealed per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(36).unwrap();
const FILE_STEM: &str = "config";

/// Theme to start in, written in lowercase in configuration sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}
impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Theme::Day => write!(f, "day"),
            Theme::Night => write!(f, "night"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Books revealed per "Show more".
    pub page_size: NonZeroUsize,
    pub theme: Theme,
    /// Catalog document to browse; the embedded sample when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}
impl Default for Config {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, theme: Theme::default(), catalog: None }
    }
}

impl Config {
    /// Directory searched for configuration files when none is given.
    pub fn directory() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bookcase").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads from `explicit` if given, otherwise from the user configuration
    /// directory, then applies the environment.
    #[instrument(level = "debug")]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let figment = match explicit {
            Some(path) => Self::with_file(Self::defaults(), path)?,
            None => match Self::directory() {
                Some(dir) => Self::with_directory(Self::defaults(), &dir),
                None => {
                    tracing::debug!("No configuration directory for this platform");
                    Self::defaults()
                },
            },
        };
        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    /// Merges every `config.*` file present in `dir`. Missing files are skipped.
    fn with_directory(figment: Figment, dir: &Path) -> Figment {
        tracing::debug!(dir = %dir.display(), "Searching for configuration files");
        figment
            .merge(Toml::file(dir.join(FILE_STEM).with_extension("toml")))
            .merge(Yaml::file(dir.join(FILE_STEM).with_extension("yaml")))
            .merge(Json::file(dir.join(FILE_STEM).with_extension("json")))
    }

    /// Merges one file, which must exist, picking the format from its extension.
    fn with_file(figment: Figment, path: &Path) -> Result<Figment> {
        if !path.is_file() {
            exn::bail!(ErrorKind::Load(path.to_path_buf()));
        }
        let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
        Ok(match extension.as_deref() {
            Some("toml") => figment.merge(Toml::file(path)),
            Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => exn::bail!(ErrorKind::Load(path.to_path_buf())),
        })
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract().or_raise(|| ErrorKind::Invalid)?;
        tracing::debug!(
            page_size = config.page_size.get(),
            theme = %config.theme,
            catalog = ?config.catalog,
            "Configuration loaded"
        );
        Ok(config)
    }
}
