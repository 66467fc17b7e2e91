use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use text_cursor::{DescribeStyle, EscapePolicy};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleConfigError {
    #[error("Failed to read describe style at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse describe style: {source}")]
    ConfigParseError { source: toml::de::Error },

    #[error("Describe style with marker {marker:?} and start marker {start_marker:?} is ambiguous")]
    AmbiguousStyle { marker: char, start_marker: char },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Escape {
    #[default]
    Raw,
    Debug,
}

/// On-disk form of a [`DescribeStyle`]. Missing keys keep the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub marker: char,
    pub start_marker: char,
    pub escape: Escape,
}

impl Default for StyleConfig {
    fn default() -> Self {
        DescribeStyle::default().into()
    }
}

impl From<DescribeStyle> for StyleConfig {
    fn from(style: DescribeStyle) -> Self {
        Self {
            marker: style.marker,
            start_marker: style.start_marker,
            escape: match style.escape {
                EscapePolicy::Raw => Escape::Raw,
                EscapePolicy::Debug => Escape::Debug,
            },
        }
    }
}

impl StyleConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, StyleConfigError> {
        toml::from_str(content).map_err(|source| StyleConfigError::ConfigParseError { source })
    }

    pub fn load_from_path<P: AsRef<Path>>(
        config_path: P,
    ) -> Result<Option<Self>, StyleConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            debug!("No describe style at {config_path:?}");
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            StyleConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config = Self::from_toml_str(&content)?;
        debug!("Loaded describe style from {config_path:?}: {config:?}");
        Ok(Some(config))
    }

    /// Converts to a [`DescribeStyle`].
    ///
    /// Identical markers are always rejected since they make "before the
    /// start" and "on the first character" render alike. With `escape =
    /// "debug"` the style must also pass [`DescribeStyle::is_unambiguous`].
    pub fn into_style(self) -> Result<DescribeStyle, StyleConfigError> {
        let style = DescribeStyle {
            marker: self.marker,
            start_marker: self.start_marker,
            escape: match self.escape {
                Escape::Raw => EscapePolicy::Raw,
                Escape::Debug => EscapePolicy::Debug,
            },
        };
        let ambiguous = style.marker == style.start_marker
            || (style.escape == EscapePolicy::Debug && !style.is_unambiguous());
        if ambiguous {
            return Err(StyleConfigError::AmbiguousStyle {
                marker: style.marker,
                start_marker: style.start_marker,
            });
        }
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use text_cursor::Cursor;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = StyleConfig::from_toml_str("escape = \"debug\"\n").unwrap();
        assert_eq!(
            config,
            StyleConfig {
                escape: Escape::Debug,
                ..StyleConfig::default()
            }
        );

        let config = StyleConfig::from_toml_str("").unwrap();
        assert_eq!(config.into_style().unwrap(), DescribeStyle::default());
    }

    #[test]
    fn test_rejects_multi_character_marker() {
        let err = StyleConfig::from_toml_str("marker = \"^^\"\n").unwrap_err();
        assert!(matches!(err, StyleConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_rejects_unknown_escape() {
        let err = StyleConfig::from_toml_str("escape = \"loud\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse describe style"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = StyleConfig {
            marker: '»',
            start_marker: '«',
            escape: Escape::Debug,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized = StyleConfig::from_toml_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_rejects_escape_letter_marker_with_debug_escape() {
        let config = StyleConfig::from_toml_str("marker = \"t\"\nescape = \"debug\"\n").unwrap();
        let err = config.into_style().unwrap_err();
        assert!(matches!(
            err,
            StyleConfigError::AmbiguousStyle { marker: 't', .. }
        ));
    }

    #[test]
    fn test_rejects_identical_markers() {
        let config = StyleConfig::from_toml_str("marker = \"|\"\nstart_marker = \"|\"\n").unwrap();
        assert!(config.into_style().is_err());
    }

    #[test]
    fn test_raw_escape_allows_letter_marker() {
        let config = StyleConfig::from_toml_str("marker = \"t\"\n").unwrap();
        let style = config.into_style().unwrap();

        let mut cur = Cursor::new("ab");
        cur.move_next();
        assert_eq!(cur.describe_with(&style), "tab");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("describe.toml");

        let result = StyleConfig::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("describe.toml");
        std::fs::write(&config_file, "marker = \"|\"\nescape = \"debug\"\n").unwrap();

        let style = StyleConfig::load_from_path(&config_file)
            .unwrap()
            .unwrap()
            .into_style()
            .unwrap();

        assert_eq!(style.marker, '|');
        assert_eq!(style.start_marker, '<');
        assert!(style.is_unambiguous());

        let mut cur = Cursor::new("a|b");
        cur.move_to(2);
        assert_eq!(cur.describe_with(&style), "a\\||b");
    }

    #[test]
    fn test_default_matches_describe_default() {
        assert_eq!(
            StyleConfig::default().into_style().unwrap(),
            DescribeStyle::default()
        );
    }
}
