//! The set of chosen options and its reconciliation with caller-held keys.

use crate::option::SelectOption;
use selectify_core::Event;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Callback invoked on every successful toggle with the triggering event and
/// the affected option (carrying its new `selected` flag).
pub type ChangeCallback = Arc<dyn Fn(&Event, &SelectOption) + Send + Sync>;

/// Ordered selected set.
///
/// Single-select holds at most one entry; multi-select keeps insertion order
/// and never holds two entries with the same key.
#[derive(Default, Clone)]
pub struct Selection {
    selected: Vec<SelectOption>,
    multiple: bool,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("selected", &self.keys())
            .field("multiple", &self.multiple)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new(multiple: bool) -> Self {
        Self {
            selected: Vec::new(),
            multiple,
            on_change: None,
        }
    }

    /// Set the change callback.
    #[must_use]
    pub fn on_change(mut self, callback: ChangeCallback) -> Self {
        self.on_change = Some(callback);
        self
    }

    pub(crate) fn set_on_change(&mut self, callback: Option<ChangeCallback>) {
        self.on_change = callback;
    }

    pub(crate) fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
        if !multiple {
            self.selected.truncate(1);
        }
    }

    /// Whether more than one option may be chosen.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Currently selected options in display order.
    #[must_use]
    pub fn selected(&self) -> &[SelectOption] {
        &self.selected
    }

    /// Keys of the selected options.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.selected.iter().map(|o| o.key.as_str()).collect()
    }

    /// Whether `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.selected.iter().any(|o| o.key == key)
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected texts joined by `", "`.
    #[must_use]
    pub fn display_value(&self) -> String {
        self.selected
            .iter()
            .map(|o| o.text.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Selected option whose text sorts first.
    #[must_use]
    pub fn first_by_text(&self) -> Option<&SelectOption> {
        self.selected.iter().min_by(|a, b| {
            a.text
                .to_lowercase()
                .cmp(&b.text.to_lowercase())
                .then_with(|| a.text.cmp(&b.text))
        })
    }

    /// Bring the selection in line with externally held keys.
    ///
    /// `None` means the caller does not control the selection and leaves it
    /// untouched. `Some` keeps entries still listed (with whatever data they
    /// already carry), then appends newly listed keys resolved against
    /// `catalog`, synthesizing a placeholder for unknown keys.
    pub fn reconcile(&mut self, selected_keys: Option<&[String]>, catalog: &[SelectOption]) {
        let Some(keys) = selected_keys else {
            return;
        };

        let mut seen = HashSet::new();
        let kept = self
            .selected
            .iter()
            .filter(|o| keys.contains(&o.key))
            .filter(|o| seen.insert(o.key.clone()))
            .cloned()
            .collect::<Vec<_>>();

        let added = keys
            .iter()
            .filter(|key| seen.insert((*key).clone()))
            .map(|key| {
                catalog
                    .iter()
                    .find(|o| &o.key == key)
                    .cloned()
                    .unwrap_or_else(|| SelectOption::placeholder(key.clone()))
            })
            .collect::<Vec<_>>();

        let mut next = kept;
        next.extend(added);
        if !self.multiple {
            next.truncate(1);
        }

        debug!(
            keys = ?keys,
            selected = next.len(),
            "selection reconciled"
        );
        self.selected = next;
    }

    /// Toggle `option`, notifying the change callback.
    ///
    /// Disabled options are ignored. In single-select mode the option
    /// replaces the selection. In multi-select mode `explicit_checked`
    /// forces the outcome (`Some(true)` keeps or adds, `Some(false)` removes
    /// or skips); otherwise presence is flipped.
    ///
    /// Returns the notification reported to the callback.
    pub fn toggle(
        &mut self,
        event: &Event,
        option: &SelectOption,
        explicit_checked: Option<bool>,
    ) -> Option<SelectOption> {
        if option.disabled {
            trace!(key = %option.key, "toggle ignored: option disabled");
            return None;
        }

        let notification = if self.multiple {
            let existed = self.contains(&option.key);
            let keep = explicit_checked.unwrap_or(!existed);
            if existed && !keep {
                self.selected.retain(|o| o.key != option.key);
            } else if !existed && keep {
                self.selected.push(option.clone());
            }
            option.with_selected(explicit_checked.unwrap_or(!existed))
        } else {
            self.selected = vec![option.clone()];
            option.with_selected(true)
        };

        debug!(
            key = %option.key,
            selected = ?notification.selected,
            multiple = self.multiple,
            "option toggled"
        );
        if let Some(callback) = &self.on_change {
            callback(event, &notification);
        }
        Some(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use selectify_core::{Key, MouseButton, Point};
    use std::sync::Mutex;

    fn click() -> Event {
        Event::MouseDown {
            position: Point::ORIGIN,
            button: MouseButton::Left,
        }
    }

    fn catalog() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Alpha"),
            SelectOption::new("b", "Beta"),
            SelectOption::new("c", "Gamma"),
        ]
    }

    fn keys(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    // =========================================================================
    // Reconcile
    // =========================================================================

    #[test]
    fn test_reconcile_none_leaves_selection() {
        let mut sel = Selection::new(true);
        sel.toggle(&click(), &catalog()[1], None);
        sel.reconcile(None, &catalog());
        assert_eq!(sel.keys(), vec!["b"]);
    }

    #[test]
    fn test_reconcile_keeps_then_adds() {
        let mut sel = Selection::new(true);
        sel.reconcile(Some(&keys(&["a"])), &catalog());
        sel.reconcile(Some(&keys(&["a", "c"])), &catalog());
        assert_eq!(sel.keys(), vec!["a", "c"]);
        assert_eq!(sel.selected()[1].text, "Gamma");
    }

    #[test]
    fn test_reconcile_kept_entries_precede_added() {
        let mut sel = Selection::new(true);
        sel.reconcile(Some(&keys(&["c"])), &catalog());
        sel.reconcile(Some(&keys(&["a", "c"])), &catalog());
        assert_eq!(sel.keys(), vec!["c", "a"]);
    }

    #[test]
    fn test_reconcile_unknown_key_synthesizes_placeholder() {
        let mut sel = Selection::new(true);
        sel.reconcile(Some(&keys(&["z"])), &catalog());
        assert_eq!(sel.selected(), &[SelectOption::placeholder("z")]);
    }

    #[test]
    fn test_reconcile_empty_clears() {
        let mut sel = Selection::new(true);
        sel.reconcile(Some(&keys(&["a", "b"])), &catalog());
        sel.reconcile(Some(&[]), &catalog());
        assert!(sel.is_empty());
    }

    #[test]
    fn test_reconcile_preserves_richer_prior_data() {
        let mut sel = Selection::new(true);
        let rich = SelectOption::new("a", "Alpha").data(serde_json::json!(1));
        sel.toggle(&click(), &rich, None);
        sel.reconcile(Some(&keys(&["a"])), &catalog());
        assert_eq!(sel.selected()[0].data, Some(serde_json::json!(1)));
    }

    #[test]
    fn test_reconcile_collapses_duplicate_keys() {
        let mut sel = Selection::new(true);
        sel.reconcile(Some(&keys(&["a", "a", "b"])), &catalog());
        assert_eq!(sel.keys(), vec!["a", "b"]);
    }

    #[test]
    fn test_reconcile_single_truncates() {
        let mut sel = Selection::new(false);
        sel.reconcile(Some(&keys(&["b", "c"])), &catalog());
        assert_eq!(sel.keys(), vec!["b"]);
    }

    // =========================================================================
    // Toggle
    // =========================================================================

    #[test]
    fn test_toggle_disabled_is_noop() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let mut sel = Selection::new(true).on_change(Arc::new(move |_, _| {
            *counter.lock().unwrap() += 1;
        }));
        let disabled = SelectOption::new("d", "D").disabled(true);
        assert!(sel.toggle(&click(), &disabled, None).is_none());
        assert!(sel.is_empty());
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_toggle_single_replaces() {
        let mut sel = Selection::new(false);
        sel.toggle(&click(), &catalog()[0], None);
        let note = sel.toggle(&click(), &catalog()[2], Some(false)).unwrap();
        assert_eq!(sel.keys(), vec!["c"]);
        assert_eq!(note.selected, Some(true));
    }

    #[test]
    fn test_toggle_multi_flips_presence() {
        let mut sel = Selection::new(true);
        let on = sel.toggle(&click(), &catalog()[0], None).unwrap();
        assert_eq!(on.selected, Some(true));
        let off = sel.toggle(&click(), &catalog()[0], None).unwrap();
        assert_eq!(off.selected, Some(false));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_multi_explicit_true_keeps_present() {
        let mut sel = Selection::new(true);
        sel.toggle(&click(), &catalog()[0], None);
        let note = sel.toggle(&click(), &catalog()[0], Some(true)).unwrap();
        assert_eq!(sel.keys(), vec!["a"]);
        assert_eq!(note.selected, Some(true));
    }

    #[test]
    fn test_toggle_multi_explicit_false_skips_absent() {
        let mut sel = Selection::new(true);
        let note = sel.toggle(&click(), &catalog()[1], Some(false)).unwrap();
        assert!(sel.is_empty());
        assert_eq!(note.selected, Some(false));
    }

    #[test]
    fn test_toggle_invokes_callback_with_event() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut sel = Selection::new(true).on_change(Arc::new(move |event, option| {
            sink.lock()
                .unwrap()
                .push((event.is_keyboard(), option.key.clone(), option.selected));
        }));
        sel.toggle(&Event::KeyDown { key: Key::Enter }, &catalog()[1], None);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(true, "b".to_string(), Some(true))]
        );
    }

    // =========================================================================
    // Display
    // =========================================================================

    #[test]
    fn test_display_value_joins_texts() {
        let mut sel = Selection::new(true);
        sel.reconcile(Some(&keys(&["c", "a"])), &catalog());
        assert_eq!(sel.display_value(), "Gamma, Alpha");
        assert_eq!(sel.first_by_text().map(|o| o.key.as_str()), Some("a"));
    }

    #[test]
    fn test_set_multiple_false_truncates() {
        let mut sel = Selection::new(true);
        sel.reconcile(Some(&keys(&["a", "b"])), &catalog());
        sel.set_multiple(false);
        assert_eq!(sel.keys(), vec!["a"]);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #[test]
        fn prop_single_toggle_leaves_exactly_that_option(picks in prop::collection::vec(0usize..3, 1..10)) {
            let mut sel = Selection::new(false);
            for &i in &picks {
                sel.toggle(&click(), &catalog()[i], None);
            }
            let last = &catalog()[*picks.last().unwrap()];
            prop_assert_eq!(sel.keys(), vec![last.key.as_str()]);
        }

        #[test]
        fn prop_multi_double_toggle_is_identity(
            initial in prop::collection::hash_set(0usize..3, 0..3),
            pick in 0usize..3,
        ) {
            let mut sel = Selection::new(true);
            let initial: Vec<String> = initial.into_iter().map(|i| catalog()[i].key.clone()).collect();
            sel.reconcile(Some(&initial), &catalog());
            let before: Vec<String> = sel.keys().into_iter().map(String::from).collect();

            sel.toggle(&click(), &catalog()[pick], None);
            sel.toggle(&click(), &catalog()[pick], None);

            let mut after: Vec<String> = sel.keys().into_iter().map(String::from).collect();
            let mut before_sorted = before;
            before_sorted.sort();
            after.sort();
            prop_assert_eq!(after, before_sorted);
        }
    }
}
