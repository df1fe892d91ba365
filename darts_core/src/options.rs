//! User options consumed by the menu layer.
//!
//! Options are read from a TOML file. Every field is optional and falls back
//! to its default, so an empty or missing file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::geometry::Vec2;

/// Largest padding, in cells, accepted around an entry.
pub const MAX_ENTRY_PADDING: i32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Foreground of entries that are not selected.
    pub menu_item_foreground: Color,
    /// Foreground of the selected entry (also the pulse target).
    pub selected_menu_item_foreground: Color,
    pub title_foreground: Color,
    /// Menu origin as a fraction of the viewport size.
    pub menu_position: Vec2,
    pub entry_padding_x: i32,
    pub entry_padding_y: i32,
    /// Seconds for the screen fade in.
    pub transition_on_time: f32,
    /// Seconds for the screen fade out.
    pub transition_off_time: f32,
    pub sound_enabled: bool,
    pub content_root: PathBuf,
    pub menu_curve: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            menu_item_foreground: Color::rgb(160, 160, 180),
            selected_menu_item_foreground: Color::rgb(255, 183, 3),
            title_foreground: Color::LIGHT_BLUE,
            menu_position: Vec2::new(0.125, 0.25),
            entry_padding_x: 2,
            entry_padding_y: 0,
            transition_on_time: 0.5,
            transition_off_time: 0.5,
            sound_enabled: true,
            content_root: PathBuf::from("assets"),
            menu_curve: "Curves/MenuCurve".to_string(),
        }
    }
}

impl Options {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let options: Options = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values the layout cannot represent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("entry_padding_x", self.entry_padding_x),
            ("entry_padding_y", self.entry_padding_y),
        ] {
            if !(0..=MAX_ENTRY_PADDING).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    max: MAX_ENTRY_PADDING,
                });
            }
        }
        Ok(())
    }

    /// Load options from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Options::default());
        }

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&source)?;
        log::info!("loaded config from {}", path.display());
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_is_default() {
        let options = Options::from_toml_str("").unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_partial_override() {
        let options = Options::from_toml_str(
            r#"
            selected_menu_item_foreground = [0, 200, 0]
            entry_padding_x = 4

            [menu_position]
            x = 0.5
            y = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(options.selected_menu_item_foreground, Color::rgb(0, 200, 0));
        assert_eq!(options.entry_padding_x, 4);
        assert_eq!(options.menu_position, Vec2::new(0.5, 0.1));
        assert_eq!(options.menu_item_foreground, Options::default().menu_item_foreground);
    }

    #[test]
    fn test_bad_colour_is_parse_error() {
        let err = Options::from_toml_str("title_foreground = \"blue\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_default() {
        let options = Options::load(Path::new("definitely/not/here/darts.toml")).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_out_of_range_padding_rejected() {
        let err = Options::from_toml_str("entry_padding_x = 2000000000").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "entry_padding_x",
                ..
            }
        ));

        let err = Options::from_toml_str("entry_padding_y = -10").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "entry_padding_y",
                value: -10,
                ..
            }
        ));

        assert!(Options::from_toml_str("entry_padding_x = 8").is_ok());
    }
}
