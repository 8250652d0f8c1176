//! Declarative configuration loaded from YAML or JSON.

use crate::error::ConfigError;
use crate::option::{OptionGroup, SelectOption};
use crate::placement::PositionOffset;
use selectify_core::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Style overrides for one visual region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionStyle {
    /// Fill color (hex)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Border color (hex)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Text color (hex)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Minimum width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f32>,
    /// Maximum height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

impl RegionStyle {
    /// Parsed background color.
    #[must_use]
    pub fn background_color(&self) -> Option<Color> {
        parse_color(self.background.as_deref())
    }

    /// Parsed border color.
    #[must_use]
    pub fn border_color(&self) -> Option<Color> {
        parse_color(self.border.as_deref())
    }

    /// Parsed text color.
    #[must_use]
    pub fn text_color(&self) -> Option<Color> {
        parse_color(self.text.as_deref())
    }

    fn validate(&self, region: &'static str) -> Result<(), ConfigError> {
        for (field, value) in [
            ("background", &self.background),
            ("border", &self.border),
            ("text", &self.text),
        ] {
            if let Some(value) = value {
                Color::from_hex(value).map_err(|source| ConfigError::InvalidColor {
                    region,
                    field,
                    value: value.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

fn parse_color(value: Option<&str>) -> Option<Color> {
    value.and_then(|v| Color::from_hex(v).ok())
}

/// Per-region overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    /// Outer container
    pub root: RegionStyle,
    /// Text input
    pub input: RegionStyle,
    /// Dropdown panel
    pub call_out: RegionStyle,
    /// Group header rows
    pub group_label: RegionStyle,
}

impl StyleOverrides {
    /// Check every color parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.root.validate("root")?;
        self.input.validate("input")?;
        self.call_out.validate("call_out")?;
        self.group_label.validate("group_label")
    }
}

/// Serializable widget configuration.
///
/// ```
/// use selectify::SelectifyConfig;
///
/// let config = SelectifyConfig::from_yaml(
///     "multiple: true\noptions:\n  - { key: a, text: Apple }\n",
/// )
/// .unwrap();
/// assert!(config.multiple);
/// assert_eq!(config.options[0].text, "Apple");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectifyConfig {
    /// Flat options
    pub options: Vec<SelectOption>,
    /// Grouped options; take precedence for display when non-empty
    pub groups: Vec<OptionGroup>,
    /// Externally controlled selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_keys: Option<Vec<String>>,
    /// Reject all interaction
    pub disabled: bool,
    /// Text shown when nothing is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Panel placement preference
    pub position_offset: PositionOffset,
    /// Region style overrides
    pub styles: StyleOverrides,
    /// Show the hovered option's text in a tooltip
    pub show_tooltip: bool,
    /// Extra class name reported to hosts
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class_name: String,
    /// Allow several options to be selected
    pub multiple: bool,
}

impl SelectifyConfig {
    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check keys are non-empty and unique, group labels are unique and
    /// style colors parse.
    ///
    /// Keys must be unique among the flat options and, separately, among all
    /// grouped options. The same key may appear in both, since the flat list
    /// stays the lookup catalog for `selected_keys` when groups are shown.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_keys(self.options.iter())?;
        check_keys(self.groups.iter().flat_map(|g| g.options.iter()))?;

        let mut labels = HashSet::new();
        for group in &self.groups {
            if !labels.insert(group.label.as_str()) {
                return Err(ConfigError::DuplicateGroupLabel(group.label.clone()));
            }
        }

        self.styles.validate()
    }
}

fn check_keys<'a>(options: impl Iterator<Item = &'a SelectOption>) -> Result<(), ConfigError> {
    let mut keys = HashSet::new();
    for option in options {
        if option.key.is_empty() {
            return Err(ConfigError::EmptyKey {
                text: option.text.clone(),
            });
        }
        if !keys.insert(option.key.as_str()) {
            return Err(ConfigError::DuplicateKey(option.key.clone()));
        }
    }
    Ok(())
}
