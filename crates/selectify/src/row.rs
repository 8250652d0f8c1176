//! Panel rows and the custom row-content hook.

use crate::filter::FilterResult;
use crate::message::RowSelectRequested;
use crate::option::SelectOption;
use selectify_core::Widget;
use std::sync::Arc;

/// Builds the content widget for one option row.
pub type RenderOption = Arc<dyn Fn(OptionRenderProps) -> Box<dyn Widget> + Send + Sync>;

/// Handle given to custom row content for committing its option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectHandle {
    key: String,
}

impl SelectHandle {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Key of the option this handle commits.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Message to return from the content widget's `event` to commit the
    /// option, exactly as if the row itself had been clicked.
    #[must_use]
    pub fn request(&self) -> RowSelectRequested {
        RowSelectRequested {
            key: self.key.clone(),
        }
    }
}

/// State passed to a [`RenderOption`] hook.
#[derive(Debug, Clone)]
pub struct OptionRenderProps {
    /// The option being rendered
    pub option: SelectOption,
    /// Whether it is selected
    pub selected: bool,
    /// Whether it is the keyboard highlight
    pub highlighted: bool,
    /// Whether it is disabled
    pub disabled: bool,
    /// Commit handle
    pub on_select: SelectHandle,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RowKind {
    GroupLabel(String),
    Option(SelectOption),
    Empty,
}

/// One laid-out row, positioned in panel content space.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Row {
    pub(crate) kind: RowKind,
    pub(crate) offset: f32,
    pub(crate) height: f32,
    /// Index into the widget's custom content children
    pub(crate) content: Option<usize>,
}

impl Row {
    pub(crate) fn end(&self) -> f32 {
        self.offset + self.height
    }

    pub(crate) fn option(&self) -> Option<&SelectOption> {
        match &self.kind {
            RowKind::Option(o) => Some(o),
            _ => None,
        }
    }
}

/// Stack rows for the visible options: a header per group in grouped mode,
/// or a single empty-state row when nothing is visible.
pub(crate) fn build_rows(view: &FilterResult, item_height: f32, label_height: f32) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut offset = 0.0;
    let mut push = |kind: RowKind, height: f32| {
        rows.push(Row {
            kind,
            offset,
            height,
            content: None,
        });
        offset += height;
    };

    if view.is_empty() {
        push(RowKind::Empty, item_height);
    } else if let Some(groups) = &view.filtered_groups {
        for group in groups {
            push(RowKind::GroupLabel(group.label.clone()), label_height);
            for option in &group.options {
                push(RowKind::Option(option.clone()), item_height);
            }
        }
    } else {
        for option in &view.filtered_options {
            push(RowKind::Option(option.clone()), item_height);
        }
    }
    rows
}
