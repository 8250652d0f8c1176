//! Highlight cursor driven by arrow, Enter, Space and Escape keys.

use crate::option::SelectOption;
use selectify_core::Key;
use tracing::trace;

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Consumed by navigation or commit
    Handled,
    /// The dropdown should close
    Close,
    /// Not consumed; the key's default action proceeds
    Ignored,
}

impl KeyOutcome {
    /// Whether the key's default action (e.g. inserting text) is suppressed.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Vertical alignment for scrolling a row into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    /// Scroll the minimum distance that reveals the row
    Nearest,
}

/// How the scroll should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately
    Instant,
    /// Animate over subsequent frames
    Smooth,
}

/// Request to reveal the row for `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Key of the option to reveal
    pub key: String,
    /// Alignment
    pub block: ScrollBlock,
    /// Animation
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Smooth, nearest-edge request.
    #[must_use]
    pub fn smooth(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            block: ScrollBlock::Nearest,
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Instant, nearest-edge request.
    #[must_use]
    pub fn instant(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            block: ScrollBlock::Nearest,
            behavior: ScrollBehavior::Instant,
        }
    }
}

/// Owns the highlighted index into the currently visible option list.
#[derive(Debug, Clone, Default)]
pub struct KeyboardNavigator {
    highlight: Option<usize>,
    scroll_request: Option<ScrollRequest>,
}

impl KeyboardNavigator {
    /// Create a navigator with nothing highlighted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted index.
    #[must_use]
    pub const fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Clear the highlight.
    pub fn reset_highlight(&mut self) {
        self.highlight = None;
    }

    /// Highlight `index` directly, requesting it be scrolled into view.
    pub fn set_highlight(&mut self, index: usize, options: &[SelectOption]) {
        self.move_to(Some(index), options);
    }

    /// Take the pending scroll-into-view request, if any.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll_request.take()
    }

    /// Interpret `key` against `options`.
    ///
    /// `on_commit` runs when Enter (or Space with something highlighted)
    /// lands on an enabled option. Nothing happens while `is_open` is false.
    pub fn handle_key<F>(
        &mut self,
        key: Key,
        is_open: bool,
        options: &[SelectOption],
        mut on_commit: F,
    ) -> KeyOutcome
    where
        F: FnMut(&SelectOption),
    {
        if !is_open {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Down | Key::Up => {
                let next = next_enabled(self.highlight, options, key == Key::Down);
                self.move_to(next, options);
                KeyOutcome::Handled
            }
            Key::Enter => {
                if let Some(option) = self.highlighted_option(options) {
                    on_commit(option);
                }
                KeyOutcome::Handled
            }
            Key::Space => {
                if !self.highlight.is_some_and(|i| i < options.len()) {
                    return KeyOutcome::Ignored;
                }
                if let Some(option) = self.highlighted_option(options) {
                    on_commit(option);
                }
                KeyOutcome::Handled
            }
            Key::Escape => KeyOutcome::Close,
            _ => KeyOutcome::Ignored,
        }
    }

    fn highlighted_option<'a>(&self, options: &'a [SelectOption]) -> Option<&'a SelectOption> {
        self.highlight
            .and_then(|i| options.get(i))
            .filter(|o| !o.disabled)
    }

    fn move_to(&mut self, next: Option<usize>, options: &[SelectOption]) {
        if next == self.highlight {
            return;
        }
        trace!(from = ?self.highlight, to = ?next, "highlight moved");
        self.highlight = next;
        if let Some(option) = next.and_then(|i| options.get(i)) {
            self.scroll_request = Some(ScrollRequest::smooth(option.key.clone()));
        }
    }
}

/// Next index moving circularly from `from`, skipping disabled entries.
///
/// From `None` the search starts at the boundary (first entry going down,
/// last going up). If every entry is disabled the last visited index is
/// returned.
fn next_enabled(from: Option<usize>, options: &[SelectOption], forward: bool) -> Option<usize> {
    let len = options.len();
    if len == 0 {
        return None;
    }

    let step = |i: usize| {
        if forward {
            (i + 1) % len
        } else {
            (i + len - 1) % len
        }
    };

    let mut idx = match from {
        None if forward => 0,
        None => len - 1,
        Some(i) => step(i.min(len - 1)),
    };
    for _ in 1..len {
        if !options[idx].disabled {
            return Some(idx);
        }
        idx = step(idx);
    }
    Some(idx)
}
