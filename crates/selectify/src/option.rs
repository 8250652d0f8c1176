//! Option and group data supplied by the caller.

use serde::{Deserialize, Serialize};

/// A selectable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique identifier
    pub key: String,
    /// Display label
    pub text: String,
    /// Whether this option can be chosen
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    /// Opaque caller payload, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Selection state attached to the copy reported in a change notification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

impl SelectOption {
    /// Create a new enabled option.
    #[must_use]
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            disabled: false,
            data: None,
            selected: None,
        }
    }

    /// Option standing in for a key with no catalog entry.
    #[must_use]
    pub fn placeholder(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(key.clone(), key)
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach caller data.
    #[must_use]
    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Copy of this option carrying a selection flag.
    #[must_use]
    pub fn with_selected(&self, selected: bool) -> Self {
        Self {
            selected: Some(selected),
            ..self.clone()
        }
    }

    /// Case-insensitive substring match against the display text.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.text.to_lowercase().contains(needle)
    }
}

/// A labelled partition of options, rendered under a header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Header text
    pub label: String,
    /// Options in display order
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl OptionGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            options: Vec::new(),
        }
    }

    /// Add an option.
    #[must_use]
    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add multiple options.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }
}
