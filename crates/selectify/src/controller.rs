//! Interaction state for one combobox instance.
//!
//! [`Controller`] owns selection, filter, highlight, open state and
//! placement, and exposes them as plain state transitions. It knows nothing
//! about painting or hit-testing; the widget translates input events into
//! calls here and drains the resulting messages.

use crate::deferred::{DeferredAction, DeferredQueue};
use crate::dismiss::{should_dismiss, OverlaySurface};
use crate::filter::{self, FilterResult};
use crate::keyboard::{KeyOutcome, KeyboardNavigator, ScrollRequest};
use crate::message::{
    CloseReason, DropdownClosed, DropdownOpened, OptionChanged, SelectifyMessage,
};
use crate::option::{OptionGroup, SelectOption};
use crate::placement::{self, InputMeasure, Placement, PositionOffset};
use crate::selection::{ChangeCallback, Selection};
use selectify_core::{Event, Key, Point, Rect};
use tracing::{debug, trace};

/// Combobox interaction state.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    options: Vec<SelectOption>,
    groups: Vec<OptionGroup>,
    selected_keys: Option<Vec<String>>,
    position_offset: PositionOffset,
    disabled: bool,
    selection: Selection,
    navigator: KeyboardNavigator,
    filter: String,
    open: bool,
    focused: bool,
    placement: Placement,
    view: FilterResult,
    deferred: DeferredQueue,
    open_scroll: Option<ScrollRequest>,
    outbox: Vec<SelectifyMessage>,
}

impl Controller {
    /// Create a controller for single- or multi-select.
    #[must_use]
    pub fn new(multiple: bool) -> Self {
        Self {
            selection: Selection::new(multiple),
            ..Self::default()
        }
    }

    // === Configuration ===

    /// Replace the flat option list.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.refresh_view();
        self.reconcile();
    }

    /// Replace the groups. Non-empty groups take over the display.
    pub fn set_groups(&mut self, groups: Vec<OptionGroup>) {
        self.groups = groups;
        self.refresh_view();
        self.reconcile();
    }

    /// Set the externally controlled keys; `None` leaves selection internal.
    pub fn set_selected_keys(&mut self, keys: Option<Vec<String>>) {
        self.selected_keys = keys;
        self.reconcile();
    }

    /// Switch between single- and multi-select.
    pub fn set_multiple(&mut self, multiple: bool) {
        self.selection.set_multiple(multiple);
        self.reconcile();
    }

    /// Set the change callback.
    pub fn set_on_change(&mut self, callback: Option<ChangeCallback>) {
        self.selection.set_on_change(callback);
    }

    /// Set the placement preference.
    pub fn set_position_offset(&mut self, offset: PositionOffset) {
        self.position_offset = offset;
        if !self.open {
            self.placement = offset.fallback();
        }
    }

    /// Enable or disable the widget, closing it if it was open.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.close(CloseReason::Disabled, true);
        }
    }

    // === Queries ===

    /// Whether the panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the input has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the widget ignores interaction.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether more than one option may be selected.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.selection.is_multiple()
    }

    /// Current filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Highlighted index into [`FilterResult::filtered_options`].
    #[must_use]
    pub const fn highlight(&self) -> Option<usize> {
        self.navigator.highlight()
    }

    /// Resolved panel side.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Placement preference.
    #[must_use]
    pub const fn position_offset(&self) -> PositionOffset {
        self.position_offset
    }

    /// Visible options for the current filter.
    #[must_use]
    pub const fn view(&self) -> &FilterResult {
        &self.view
    }

    /// Selected set.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Flat options as supplied.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Groups as supplied.
    #[must_use]
    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// Externally controlled keys.
    #[must_use]
    pub fn selected_keys(&self) -> Option<&[String]> {
        self.selected_keys.as_deref()
    }

    /// Whether the row for `key` is highlighted.
    #[must_use]
    pub fn is_highlighted(&self, key: &str) -> bool {
        self.highlight()
            .and_then(|i| self.view.filtered_options.get(i))
            .is_some_and(|o| o.key == key)
    }

    /// Text shown in the input: the filter while open, otherwise nothing.
    #[must_use]
    pub fn input_value(&self) -> &str {
        if self.open {
            &self.filter
        } else {
            ""
        }
    }

    /// Placeholder shown in the input: the selected texts, or `fallback`.
    #[must_use]
    pub fn input_placeholder(&self, fallback: &str) -> String {
        if self.selection.is_empty() {
            fallback.to_string()
        } else {
            self.selection.display_value()
        }
    }

    /// Multi-select inputs reject typing while closed.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        !self.open && self.selection.is_multiple()
    }

    /// Number of deferred actions waiting for the next layout.
    #[must_use]
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    // === Transitions ===

    /// Give the input keyboard focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Open the panel, resolving placement through `measure`.
    pub fn open(&mut self, measure: &dyn InputMeasure) {
        if self.disabled || self.open {
            return;
        }
        self.open = true;
        self.placement = placement::resolve(self.position_offset, measure);

        if !self.selection.is_multiple() && !self.selection.is_empty() {
            if let Some(index) = self
                .view
                .filtered_options
                .iter()
                .position(|o| self.selection.contains(&o.key))
            {
                self.deferred.push(DeferredAction::InitialHighlight(index));
            }
        }
        self.open_scroll = self
            .selection
            .first_by_text()
            .map(|o| ScrollRequest::instant(o.key.clone()));

        debug!(placement = ?self.placement, filter = %self.filter, "dropdown opened");
        self.outbox.push(SelectifyMessage::DropdownOpened(DropdownOpened {
            placement: self.placement,
        }));
    }

    /// Close the panel, clearing filter and highlight. `blur` also drops
    /// keyboard focus.
    pub fn close(&mut self, reason: CloseReason, blur: bool) {
        if blur {
            self.focused = false;
        }
        if !self.open {
            return;
        }
        self.open = false;
        self.filter.clear();
        self.refresh_view();
        self.navigator.reset_highlight();
        self.open_scroll = None;
        self.navigator.take_scroll_request();

        debug!(?reason, "dropdown closed");
        self.outbox
            .push(SelectifyMessage::DropdownClosed(DropdownClosed { reason }));
    }

    /// Pointer-down on the input: focus and open.
    pub fn input_pressed(&mut self, measure: &dyn InputMeasure) {
        if self.disabled {
            return;
        }
        self.focused = true;
        self.open(measure);
    }

    /// Append typed text to the filter and open.
    ///
    /// Returns `false` when the input rejects typing.
    pub fn insert_text(&mut self, text: &str, measure: &dyn InputMeasure) -> bool {
        if self.disabled || self.is_read_only() {
            trace!(text, "text input rejected");
            return false;
        }
        self.filter.push_str(text);
        self.refresh_view();
        self.open(measure);
        true
    }

    /// Delete the last filter character and open.
    pub fn delete_backward(&mut self, measure: &dyn InputMeasure) -> bool {
        if self.disabled || self.is_read_only() || self.filter.pop().is_none() {
            return false;
        }
        self.refresh_view();
        self.open(measure);
        true
    }

    /// Handle a key press that reached the input.
    pub fn key_down(&mut self, event: &Event, key: Key) -> KeyOutcome {
        if self.disabled {
            return KeyOutcome::Ignored;
        }

        let mut committed = None;
        let outcome = self.navigator.handle_key(
            key,
            self.open,
            &self.view.filtered_options,
            |option| committed = Some(option.clone()),
        );

        if let Some(option) = committed {
            self.commit_from_keyboard(event, &option);
        }
        if outcome == KeyOutcome::Close {
            self.close(CloseReason::Escape, false);
        }
        outcome
    }

    /// Commit the row for `key` after a pointer press.
    pub fn commit_click(&mut self, event: &Event, key: &str) {
        let Some(option) = self.view.flat_options.iter().find(|o| o.key == key).cloned() else {
            return;
        };
        if option.disabled || self.disabled {
            return;
        }

        if self.selection.is_multiple() {
            let checked = !self.selection.contains(&option.key);
            self.toggle(event, &option, Some(checked));
            self.navigator.reset_highlight();
            self.deferred.push(DeferredAction::RefocusInput);
        } else {
            self.toggle(event, &option, Some(true));
            self.close(CloseReason::Committed, false);
        }
    }

    /// Pointer-down outside the widget's hit area.
    ///
    /// Returns `true` if the dropdown closed.
    pub fn pointer_down_elsewhere(
        &mut self,
        target: &Point,
        root: Rect,
        input: Rect,
        overlays: &[OverlaySurface],
    ) -> bool {
        if !self.open || !should_dismiss(target, root, input, overlays) {
            return false;
        }
        self.close(CloseReason::OutsideClick, true);
        true
    }

    /// Recompute placement after scroll, resize or re-layout.
    pub fn reposition(&mut self, measure: &dyn InputMeasure) {
        if !self.open {
            return;
        }
        let next = placement::resolve(self.position_offset, measure);
        if next != self.placement {
            debug!(from = ?self.placement, to = ?next, "placement changed");
            self.placement = next;
        }
    }

    /// Run actions deferred since the last layout pass.
    pub fn run_deferred(&mut self) {
        for action in self.deferred.drain() {
            if !self.open {
                trace!(?action, "deferred action skipped: dropdown closed");
                continue;
            }
            trace!(?action, "running deferred action");
            match action {
                DeferredAction::RefocusInput => self.focused = true,
                DeferredAction::InitialHighlight(index) => {
                    if index < self.view.filtered_options.len() {
                        self.navigator
                            .set_highlight(index, &self.view.filtered_options);
                    }
                }
            }
        }
    }

    /// Next pending scroll-into-view request.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.open_scroll
            .take()
            .or_else(|| self.navigator.take_scroll_request())
    }

    /// Drain messages produced since the last call.
    pub fn take_messages(&mut self) -> Vec<SelectifyMessage> {
        std::mem::take(&mut self.outbox)
    }

    // === Internals ===

    fn commit_from_keyboard(&mut self, event: &Event, option: &SelectOption) {
        if self.selection.is_multiple() {
            self.toggle(event, option, None);
        } else {
            self.toggle(event, option, Some(true));
            self.close(CloseReason::Committed, false);
        }
    }

    fn toggle(&mut self, event: &Event, option: &SelectOption, checked: Option<bool>) {
        if let Some(option) = self.selection.toggle(event, option, checked) {
            self.outbox
                .push(SelectifyMessage::OptionChanged(OptionChanged { option }));
        }
    }

    fn refresh_view(&mut self) {
        self.view = filter::apply(&self.options, &self.groups, &self.filter);
    }

    fn reconcile(&mut self) {
        let catalog: Vec<SelectOption> = self
            .groups
            .iter()
            .flat_map(|g| g.options.iter())
            .chain(self.options.iter())
            .cloned()
            .collect();
        self.selection
            .reconcile(self.selected_keys.as_deref(), &catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Measurement;
    use selectify_core::MouseButton;

    fn measured() -> Measurement {
        Measurement {
            input: Rect::new(0.0, 100.0, 200.0, 32.0),
            viewport_height: 800.0,
        }
    }

    fn click() -> Event {
        Event::MouseDown {
            position: Point::ORIGIN,
            button: MouseButton::Left,
        }
    }

    fn key(k: Key) -> Event {
        Event::KeyDown { key: k }
    }

    fn numbered(n: usize) -> Vec<SelectOption> {
        (1..=n)
            .map(|i| SelectOption::new(i.to_string(), format!("Option {i}")))
            .collect()
    }

    fn single() -> Controller {
        let mut c = Controller::new(false);
        c.set_options(numbered(5));
        c
    }

    fn multi() -> Controller {
        let mut c = Controller::new(true);
        c.set_options(numbered(5));
        c
    }

    fn press(c: &mut Controller, k: Key) -> KeyOutcome {
        c.key_down(&key(k), k)
    }

    // =========================================================================
    // Open / close
    // =========================================================================

    #[test]
    fn test_open_emits_message_with_placement() {
        let mut c = single();
        c.input_pressed(&measured());
        assert!(c.is_open());
        assert!(c.is_focused());
        assert_eq!(
            c.take_messages(),
            vec![SelectifyMessage::DropdownOpened(DropdownOpened {
                placement: Placement::Bottom
            })]
        );
    }

    #[test]
    fn test_open_twice_emits_once() {
        let mut c = single();
        c.input_pressed(&measured());
        c.input_pressed(&measured());
        assert_eq!(c.take_messages().len(), 1);
    }

    #[test]
    fn test_disabled_never_opens() {
        let mut c = single();
        c.set_disabled(true);
        c.input_pressed(&measured());
        assert!(!c.insert_text("a", &measured()));
        assert!(!c.is_open());
        assert!(c.take_messages().is_empty());
    }

    #[test]
    fn test_disable_while_open_closes() {
        let mut c = single();
        c.input_pressed(&measured());
        c.take_messages();
        c.set_disabled(true);
        assert!(!c.is_open());
        assert_eq!(
            c.take_messages(),
            vec![SelectifyMessage::DropdownClosed(DropdownClosed {
                reason: CloseReason::Disabled
            })]
        );
    }

    #[test]
    fn test_close_clears_filter_and_highlight() {
        let mut c = single();
        c.insert_text("Opt", &measured());
        press(&mut c, Key::Down);
        assert_eq!(c.highlight(), Some(0));
        c.close(CloseReason::Escape, false);
        assert_eq!(c.filter(), "");
        assert_eq!(c.highlight(), None);
        assert_eq!(c.view().filtered_options.len(), 5);
    }

    #[test]
    fn test_open_without_measurement_falls_back() {
        let mut c = single();
        c.set_position_offset(PositionOffset::Top);
        c.open(&None::<Measurement>);
        assert_eq!(c.placement(), Placement::Top);
    }

    // =========================================================================
    // Typing
    // =========================================================================

    #[test]
    fn test_typing_filters_and_opens() {
        let mut c = single();
        assert!(c.insert_text("3", &measured()));
        assert!(c.is_open());
        assert_eq!(c.input_value(), "3");
        assert_eq!(c.view().filtered_options, vec![SelectOption::new("3", "Option 3")]);
    }

    #[test]
    fn test_multi_read_only_while_closed() {
        let mut c = multi();
        assert!(c.is_read_only());
        assert!(!c.insert_text("x", &measured()));
        assert!(!c.is_open());
        c.input_pressed(&measured());
        assert!(!c.is_read_only());
        assert!(c.insert_text("x", &measured()));
    }

    #[test]
    fn test_backspace_edits_filter() {
        let mut c = single();
        c.insert_text("Op", &measured());
        assert!(c.delete_backward(&measured()));
        assert_eq!(c.filter(), "O");
        c.close(CloseReason::Escape, false);
        assert!(!c.delete_backward(&measured()));
        assert!(!c.is_open());
    }

    #[test]
    fn test_input_shows_filter_only_while_open() {
        let mut c = single();
        c.insert_text("2", &measured());
        assert_eq!(c.input_value(), "2");
        press(&mut c, Key::Escape);
        assert_eq!(c.input_value(), "");
    }

    // =========================================================================
    // Commit
    // =========================================================================

    #[test]
    fn test_single_click_commit_selects_and_closes() {
        let mut c = single();
        c.insert_text("Option", &measured());
        c.take_messages();
        c.commit_click(&click(), "2");
        assert_eq!(c.selection().keys(), vec!["2"]);
        assert!(!c.is_open());
        assert_eq!(c.filter(), "");

        let messages = c.take_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].changed_option().and_then(|o| o.selected), Some(true));
        assert_eq!(
            messages[1],
            SelectifyMessage::DropdownClosed(DropdownClosed {
                reason: CloseReason::Committed
            })
        );
    }

    #[test]
    fn test_multi_click_commit_stays_open_and_defers_refocus() {
        let mut c = multi();
        c.input_pressed(&measured());
        press(&mut c, Key::Down);
        c.blur();
        c.commit_click(&click(), "1");
        assert!(c.is_open());
        assert_eq!(c.highlight(), None);
        assert!(!c.is_focused());
        assert_eq!(c.pending_deferred(), 1);

        c.run_deferred();
        assert!(c.is_focused());
    }

    #[test]
    fn test_multi_click_twice_deselects() {
        let mut c = multi();
        c.input_pressed(&measured());
        c.commit_click(&click(), "1");
        c.commit_click(&click(), "1");
        assert!(c.selection().is_empty());
        let selected: Vec<_> = c
            .take_messages()
            .iter()
            .filter_map(|m| m.changed_option().and_then(|o| o.selected))
            .collect();
        assert_eq!(selected, vec![true, false]);
    }

    #[test]
    fn test_click_disabled_option_ignored() {
        let mut c = Controller::new(false);
        c.set_options(vec![SelectOption::new("x", "X").disabled(true)]);
        c.input_pressed(&measured());
        c.commit_click(&click(), "x");
        assert!(c.selection().is_empty());
        assert!(c.is_open());
    }

    #[test]
    fn test_click_unknown_key_ignored() {
        let mut c = single();
        c.input_pressed(&measured());
        c.commit_click(&click(), "nope");
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_single_enter_commits_and_closes() {
        let mut c = single();
        c.input_pressed(&measured());
        press(&mut c, Key::Down);
        press(&mut c, Key::Down);
        assert_eq!(press(&mut c, Key::Enter), KeyOutcome::Handled);
        assert_eq!(c.selection().keys(), vec!["2"]);
        assert!(!c.is_open());
    }

    #[test]
    fn test_multi_keyboard_commit_keeps_highlight() {
        let mut c = multi();
        c.input_pressed(&measured());
        press(&mut c, Key::Down);
        press(&mut c, Key::Space);
        assert_eq!(c.selection().keys(), vec!["1"]);
        assert_eq!(c.highlight(), Some(0));
        assert!(c.is_open());
        assert_eq!(c.pending_deferred(), 0);
    }

    #[test]
    fn test_escape_closes_without_commit_or_blur() {
        let mut c = single();
        c.input_pressed(&measured());
        press(&mut c, Key::Down);
        c.take_messages();
        assert_eq!(press(&mut c, Key::Escape), KeyOutcome::Close);
        assert!(!c.is_open());
        assert!(c.is_focused());
        assert!(c.selection().is_empty());
        assert_eq!(
            c.take_messages(),
            vec![SelectifyMessage::DropdownClosed(DropdownClosed {
                reason: CloseReason::Escape
            })]
        );
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut c = single();
        assert_eq!(press(&mut c, Key::Down), KeyOutcome::Ignored);
        assert_eq!(c.highlight(), None);
    }

    // =========================================================================
    // Initial highlight and scroll
    // =========================================================================

    #[test]
    fn test_single_open_defers_initial_highlight() {
        let mut c = single();
        c.set_selected_keys(Some(vec!["4".to_string()]));
        c.input_pressed(&measured());
        assert_eq!(c.highlight(), None);
        c.run_deferred();
        assert_eq!(c.highlight(), Some(3));
    }

    #[test]
    fn test_initial_highlight_uses_filtered_index() {
        let mut c = single();
        c.set_selected_keys(Some(vec!["4".to_string()]));
        c.insert_text("4", &measured());
        c.run_deferred();
        assert_eq!(c.highlight(), Some(0));
    }

    #[test]
    fn test_deferred_noop_after_close() {
        let mut c = single();
        c.set_selected_keys(Some(vec!["4".to_string()]));
        c.input_pressed(&measured());
        press(&mut c, Key::Escape);
        c.run_deferred();
        assert_eq!(c.highlight(), None);
        assert_eq!(c.pending_deferred(), 0);
    }

    #[test]
    fn test_multi_open_sets_no_initial_highlight() {
        let mut c = multi();
        c.set_selected_keys(Some(vec!["4".to_string()]));
        c.input_pressed(&measured());
        c.run_deferred();
        assert_eq!(c.highlight(), None);
    }

    #[test]
    fn test_open_scrolls_first_selected_by_text() {
        let mut c = Controller::new(true);
        c.set_options(vec![
            SelectOption::new("z", "Zucchini"),
            SelectOption::new("b", "Broccoli"),
            SelectOption::new("c", "carrot"),
        ]);
        c.set_selected_keys(Some(vec!["z".into(), "c".into()]));
        c.input_pressed(&measured());
        assert_eq!(c.take_scroll_request(), Some(ScrollRequest::instant("c")));
        assert_eq!(c.take_scroll_request(), None);
    }

    #[test]
    fn test_arrow_scroll_request_is_smooth() {
        let mut c = single();
        c.input_pressed(&measured());
        press(&mut c, Key::Up);
        assert_eq!(c.take_scroll_request(), Some(ScrollRequest::smooth("5")));
    }

    // =========================================================================
    // Grouped mode
    // =========================================================================

    #[test]
    fn test_grouped_highlight_uses_flat_index() {
        let mut c = Controller::new(false);
        c.set_groups(vec![
            OptionGroup::new("Fruits").options(numbered(2)),
            OptionGroup::new("Dairy").option(SelectOption::new("m", "Milk")),
        ]);
        c.insert_text("milk", &measured());
        press(&mut c, Key::Up);
        assert_eq!(c.highlight(), Some(2));
        assert!(c.is_highlighted("m"));
        press(&mut c, Key::Enter);
        assert_eq!(c.selection().keys(), vec!["m"]);
    }

    #[test]
    fn test_reconcile_resolves_against_groups_and_options() {
        let mut c = Controller::new(true);
        c.set_groups(vec![OptionGroup::new("G").option(SelectOption::new("g", "Grouped"))]);
        c.set_options(vec![SelectOption::new("o", "Loose")]);
        c.set_selected_keys(Some(vec!["g".into(), "o".into(), "?".into()]));
        let texts: Vec<_> = c.selection().selected().iter().map(|o| o.text.clone()).collect();
        assert_eq!(texts, vec!["Grouped", "Loose", "?"]);
    }

    // =========================================================================
    // Dismissal and placement
    // =========================================================================

    #[test]
    fn test_outside_click_closes_and_blurs() {
        let mut c = single();
        c.input_pressed(&measured());
        let input = Rect::new(0.0, 100.0, 200.0, 32.0);
        let root = input.union(&Rect::new(0.0, 132.0, 200.0, 300.0));
        assert!(c.pointer_down_elsewhere(&Point::new(500.0, 500.0), root, input, &[]));
        assert!(!c.is_open());
        assert!(!c.is_focused());
    }

    #[test]
    fn test_outside_click_inside_overlay_keeps_open() {
        let mut c = single();
        c.input_pressed(&measured());
        let input = Rect::new(0.0, 100.0, 200.0, 32.0);
        let overlays = [OverlaySurface::new("ms-Layer", Rect::new(400.0, 400.0, 200.0, 200.0))];
        assert!(!c.pointer_down_elsewhere(&Point::new(500.0, 500.0), input, input, &overlays));
        assert!(c.is_open());
    }

    #[test]
    fn test_reposition_only_while_open() {
        let mut c = single();
        let cramped = Measurement {
            input: Rect::new(0.0, 650.0, 200.0, 50.0),
            viewport_height: 800.0,
        };
        c.reposition(&cramped);
        assert_eq!(c.placement(), Placement::Bottom);
        c.input_pressed(&measured());
        c.reposition(&cramped);
        assert_eq!(c.placement(), Placement::Top);
    }

    #[test]
    fn test_placeholder_reflects_selection() {
        let mut c = multi();
        assert_eq!(c.input_placeholder("Pick"), "Pick");
        c.set_selected_keys(Some(vec!["2".into(), "1".into()]));
        assert_eq!(c.input_placeholder("Pick"), "Option 2, Option 1");
    }
}
