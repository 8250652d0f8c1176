//! Messages emitted from [`Selectify`](crate::Selectify) event handling.
//!
//! `Widget::event` returns a `Vec<SelectifyMessage>` (boxed as `dyn Any`)
//! whenever handling an event produced at least one message.

use crate::option::SelectOption;
use crate::placement::Placement;

/// Why the dropdown closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// A single-select option was committed
    Committed,
    /// Escape was pressed
    Escape,
    /// A pointer-down landed outside the widget
    OutsideClick,
    /// The widget was disabled while open
    Disabled,
}

/// An option was toggled.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionChanged {
    /// The option, with `selected` set to its new state
    pub option: SelectOption,
}

/// The panel opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownOpened {
    /// Side the panel renders on
    pub placement: Placement,
}

/// The panel closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownClosed {
    /// What closed it
    pub reason: CloseReason,
}

/// Any message the combobox emits.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectifyMessage {
    /// See [`OptionChanged`]
    OptionChanged(OptionChanged),
    /// See [`DropdownOpened`]
    DropdownOpened(DropdownOpened),
    /// See [`DropdownClosed`]
    DropdownClosed(DropdownClosed),
}

impl SelectifyMessage {
    /// The changed option, if this is an [`OptionChanged`].
    #[must_use]
    pub const fn changed_option(&self) -> Option<&SelectOption> {
        match self {
            Self::OptionChanged(m) => Some(&m.option),
            _ => None,
        }
    }
}

/// Emitted by custom row content to ask for its option to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSelectRequested {
    /// Key of the row's option
    pub key: String,
}
