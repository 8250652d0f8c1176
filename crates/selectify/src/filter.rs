//! Derives the visible option list from the filter string.

use crate::option::{OptionGroup, SelectOption};

/// Output of [`apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterResult {
    /// Every option in display order, ignoring the filter
    pub flat_options: Vec<SelectOption>,
    /// The list keyboard navigation runs over
    pub filtered_options: Vec<SelectOption>,
    /// Visible groups; `None` when the widget is not in grouped mode
    pub filtered_groups: Option<Vec<OptionGroup>>,
}

impl FilterResult {
    /// Whether the panel has nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.filtered_groups {
            Some(groups) => groups.is_empty(),
            None => self.filtered_options.is_empty(),
        }
    }

    /// Position of `key` in the flat list.
    #[must_use]
    pub fn flat_index(&self, key: &str) -> Option<usize> {
        self.flat_options.iter().position(|o| o.key == key)
    }
}

/// Narrow `options` (or `groups`, when non-empty) to entries whose text
/// contains `filter`, ignoring case.
///
/// In grouped mode `filtered_options` stays the full flat list and only the
/// groups are narrowed. An empty filter never excludes anything.
#[must_use]
pub fn apply(options: &[SelectOption], groups: &[OptionGroup], filter: &str) -> FilterResult {
    let needle = filter.to_lowercase();

    if groups.is_empty() {
        let filtered_options = options
            .iter()
            .filter(|o| o.matches_lowercase(&needle))
            .cloned()
            .collect();
        return FilterResult {
            flat_options: options.to_vec(),
            filtered_options,
            filtered_groups: None,
        };
    }

    let flat_options: Vec<SelectOption> = groups
        .iter()
        .flat_map(|g| g.options.iter().cloned())
        .collect();

    let filtered_groups = if needle.is_empty() {
        groups.to_vec()
    } else {
        groups
            .iter()
            .filter_map(|g| {
                let options: Vec<SelectOption> = g
                    .options
                    .iter()
                    .filter(|o| o.matches_lowercase(&needle))
                    .cloned()
                    .collect();
                (!options.is_empty()).then(|| OptionGroup {
                    label: g.label.clone(),
                    options,
                })
            })
            .collect()
    };

    FilterResult {
        filtered_options: flat_options.clone(),
        flat_options,
        filtered_groups: Some(filtered_groups),
    }
}
