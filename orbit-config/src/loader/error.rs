//! Errors raised while reading carousel configuration.

use super::super::validation::ConfigGuardRailError;

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a usable [`CarouselConfig`](crate::CarouselConfig).
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("failed to read carousel config from {path}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// TOML syntax or schema error.
    #[error("invalid carousel config {origin}: {source}")]
    Toml {
        /// File path or env var name.
        origin: String,
        /// Parser error.
        #[source]
        source: toml::de::Error,
    },
    /// JSON syntax or schema error.
    #[error("invalid carousel config {origin}: {source}")]
    Json {
        /// File path or env var name.
        origin: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// An extensionless file parsed as neither format.
    #[error(
        "carousel config {origin} is neither TOML ({toml}) nor JSON ({json})"
    )]
    Unrecognized {
        /// File path.
        origin: String,
        /// TOML parser message.
        toml: String,
        /// JSON parser message.
        json: String,
    },
    /// Parsed but rejected by a hard guard rail.
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}
