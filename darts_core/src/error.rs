use std::path::PathBuf;

use thiserror::Error;

/// Failures building or activating a menu screen.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu has no entries")]
    EmptyMenu,

    #[error("menu has no enabled entry to select")]
    NoSelectableEntry,

    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Failures loading a content asset.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("asset not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid curve: {0}")]
    InvalidCurve(String),
}

/// Failures loading the options file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be within 0..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        max: i32,
    },
}
