//! Content loading for menu assets.
//!
//! Assets are TOML files addressed by a slash- or backslash-separated name
//! relative to a content root, without extension.

use std::path::{Path, PathBuf};

use crate::curve::{Curve, CurveFile};
use crate::error::ContentError;

/// Keyed loader for typed assets.
pub trait ContentSource {
    fn load_curve(&mut self, asset: &str) -> Result<Curve, ContentError>;
}

/// Loads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct ContentManager {
    root: PathBuf,
}

impl ContentManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an asset name to its file path.
    pub fn asset_path(&self, asset: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in asset.split(['/', '\\']).filter(|p| !p.is_empty()) {
            path.push(part);
        }
        path.set_extension("toml");
        path
    }
}

impl ContentSource for ContentManager {
    fn load_curve(&mut self, asset: &str) -> Result<Curve, ContentError> {
        let path = self.asset_path(asset);
        if !path.exists() {
            return Err(ContentError::NotFound { path });
        }

        let source = std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        let file: CurveFile = toml::from_str(&source).map_err(|source| ContentError::Parse {
            path: path.clone(),
            source,
        })?;

        log::debug!("loaded curve {asset} ({} keys)", file.keys.len());
        Curve::new(file.keys)
    }
}
