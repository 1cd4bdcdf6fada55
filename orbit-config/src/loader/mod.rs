//! Config file and environment loading.

pub mod error;

use crate::constants::{
    DEFAULT_CONFIG_CANDIDATES, ENV_CONFIG_JSON, ENV_CONFIG_PATH,
};
use crate::models::CarouselConfig;
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Source that produced the carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Nothing was found; built-in defaults.
    #[default]
    Default,
    /// File named by `$ORBIT_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// Inline JSON from `$ORBIT_CONFIG_JSON`.
    EnvInline,
    /// A default candidate or explicitly requested file.
    File(PathBuf),
}

/// A loaded and validated configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// The validated configuration.
    pub config: CarouselConfig,
    /// Where it came from.
    pub source: ConfigSource,
    /// Soft guard-rail findings, already logged.
    pub warnings: ConfigWarnings,
}

impl CarouselConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$ORBIT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$ORBIT_CONFIG_JSON` (inline JSON),
    /// 3) the first existing default candidate file,
    /// 4) defaults if none of the above is present.
    ///
    /// The result is validated; guard-rail warnings are logged and returned.
    pub fn load_from_env() -> Result<ConfigLoad, ConfigLoadError> {
        let (config, source) = Self::locate_from_env()?;
        finish(config, source)
    }

    /// Load a specific file, validating it like [`Self::load_from_env`].
    pub fn load_validated(path: &Path) -> Result<ConfigLoad, ConfigLoadError> {
        let config = Self::load_from_file(path)?;
        finish(config, ConfigSource::File(path.to_path_buf()))
    }

    fn locate_from_env()
    -> Result<(Self, ConfigSource), ConfigLoadError> {
        if let Ok(path_str) = env::var(ENV_CONFIG_PATH)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(ENV_CONFIG_JSON)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw, ENV_CONFIG_JSON)?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Read and parse a file without validating it. `.json` is parsed as
    /// JSON, `.toml`/`.tml` as TOML, anything else tries both.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => Self::parse_toml(&contents, &origin),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Parse a config of unknown format: TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Unrecognized {
                    origin: origin.to_string(),
                    toml: toml_err.to_string(),
                    json: json_err.to_string(),
                }
            })
        })
    }

    /// Parse TOML. `origin` names the input in errors.
    pub fn parse_toml(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        toml::from_str(contents).map_err(|source| ConfigLoadError::Toml {
            origin: origin.to_string(),
            source,
        })
    }

    /// Parse JSON. `origin` names the input in errors.
    pub fn parse_json(
        raw: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    fn find_default_file() -> Option<PathBuf> {
        DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}

fn finish(
    config: CarouselConfig,
    source: ConfigSource,
) -> Result<ConfigLoad, ConfigLoadError> {
    let warnings = apply_guard_rails(&config)?;
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                tracing::warn!(?source, hint = %hint, "{}", warning.message)
            }
            None => tracing::warn!(?source, "{}", warning.message),
        }
    }
    tracing::debug!(
        ?source,
        breakpoints = config.breakpoints.len(),
        "loaded carousel config"
    );
    Ok(ConfigLoad {
        config,
        source,
        warnings,
    })
}
