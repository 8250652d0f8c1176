//! Test harness that plays the host for a single widget.

use selectify_core::{
    Constraints, Event, Key, MouseButton, Point, RecordingCanvas, Rect, Size, Widget,
};
use std::any::Any;
use std::collections::VecDeque;
use tracing::trace;

/// Drives a widget the way a host would: delivers events, re-runs layout
/// after each one, and records emitted messages and paint output.
pub struct Harness<W: Widget> {
    root: W,
    event_queue: VecDeque<Event>,
    viewport: Size,
    origin: Point,
    messages: Vec<Box<dyn Any + Send>>,
}

impl<W: Widget> Harness<W> {
    /// Create a harness with a 1280x720 viewport and lay the widget out at
    /// the top-left corner.
    pub fn new(root: W) -> Self {
        let mut harness = Self {
            root,
            event_queue: VecDeque::new(),
            viewport: Size::new(1280.0, 720.0),
            origin: Point::ORIGIN,
            messages: Vec::new(),
        };
        harness.resize(1280.0, 720.0);
        harness
    }

    /// Set the viewport size.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.resize(width, height);
        self
    }

    /// Place the widget's top-left corner at `(x, y)`.
    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.origin = Point::new(x, y);
        self.relayout();
        self
    }

    // === Access ===

    /// The widget under test.
    pub const fn widget(&self) -> &W {
        &self.root
    }

    /// Mutable access to the widget; call [`Self::relayout`] after changing it.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Bounds assigned at the last layout.
    pub fn layout_bounds(&self) -> Rect {
        let size = self.measured_size();
        Rect::new(self.origin.x, self.origin.y, size.width, size.height)
    }

    // === Event Simulation ===

    /// Deliver an arbitrary event.
    pub fn dispatch(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    /// Deliver several events in order.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = Event>) -> &mut Self {
        self.event_queue.extend(events);
        self.process_events();
        self
    }

    /// Move the pointer, press and release the left button at `position`.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.dispatch_all([
            Event::MouseMove { position },
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            },
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            },
        ])
    }

    /// Click the center of `rect`.
    pub fn click_rect(&mut self, rect: Rect) -> &mut Self {
        self.click_at(rect.center())
    }

    /// Move the pointer to `position`.
    pub fn hover(&mut self, position: Point) -> &mut Self {
        self.dispatch(Event::MouseMove { position })
    }

    /// Focus the widget and type `text` one character at a time, each as a
    /// key press followed by its text input.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.event_queue.push_back(Event::FocusIn);
        for c in text.chars() {
            let key = if c == ' ' { Key::Space } else { Key::Char(c) };
            self.event_queue.push_back(Event::KeyDown { key });
            self.event_queue.push_back(Event::TextInput {
                text: c.to_string(),
            });
            self.event_queue.push_back(Event::KeyUp { key });
        }
        self.process_events();
        self
    }

    /// Press and release a key.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.dispatch_all([Event::KeyDown { key }, Event::KeyUp { key }])
    }

    /// Press a sequence of keys.
    pub fn press_keys(&mut self, keys: &[Key]) -> &mut Self {
        for &key in keys {
            self.press_key(key);
        }
        self
    }

    /// Scroll vertically.
    pub fn scroll(&mut self, delta: f32) -> &mut Self {
        self.dispatch(Event::Scroll {
            delta_x: 0.0,
            delta_y: delta,
        })
    }

    /// Advance simulated time in 16ms frames.
    pub fn tick(&mut self, ms: u32) -> &mut Self {
        let mut remaining = ms as f32;
        while remaining > 0.0 {
            let frame = remaining.min(16.0);
            self.event_queue.push_back(Event::Tick { delta_ms: frame });
            remaining -= frame;
        }
        self.process_events();
        self
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: f32, height: f32) -> &mut Self {
        self.viewport = Size::new(width, height);
        self.dispatch(Event::Resize { width, height })
    }

    /// Re-run layout at the current origin.
    pub fn relayout(&mut self) -> &mut Self {
        let bounds = self.layout_bounds();
        self.root.layout(bounds);
        self
    }

    // === Messages ===

    /// Number of messages collected so far.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Remove and return collected messages of type `T`, discarding others.
    pub fn take_messages<T: 'static>(&mut self) -> Vec<T> {
        std::mem::take(&mut self.messages)
            .into_iter()
            .filter_map(|m| m.downcast::<T>().ok())
            .map(|m| *m)
            .collect()
    }

    /// Discard collected messages.
    pub fn clear_messages(&mut self) -> &mut Self {
        self.messages.clear();
        self
    }

    // === Queries ===

    /// Paint the widget into a fresh recording canvas.
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    /// Find a widget in the tree by test ID.
    pub fn query(&self, test_id: &str) -> Option<&dyn Widget> {
        find_widget(&self.root, test_id)
    }

    /// Check whether a widget with the test ID exists.
    pub fn exists(&self, test_id: &str) -> bool {
        self.query(test_id).is_some()
    }

    // === Assertions ===

    /// Assert that some text run equals `expected`.
    ///
    /// # Panics
    ///
    /// Panics if no painted text matches.
    pub fn assert_painted(&self, expected: &str) -> &Self {
        let canvas = self.paint();
        assert!(
            canvas.has_text(expected),
            "Expected painted text '{expected}' but got {:?}",
            canvas.texts()
        );
        self
    }

    /// Assert that no text run equals `unexpected`.
    ///
    /// # Panics
    ///
    /// Panics if some painted text matches.
    pub fn assert_not_painted(&self, unexpected: &str) -> &Self {
        let canvas = self.paint();
        assert!(
            !canvas.has_text(unexpected),
            "Expected '{unexpected}' not to be painted"
        );
        self
    }

    /// Assert that a widget with the test ID exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, test_id: &str) -> &Self {
        assert!(
            self.exists(test_id),
            "Expected widget with test id '{test_id}' to exist"
        );
        self
    }

    // === Internal ===

    fn measured_size(&self) -> Size {
        self.root.measure(Constraints::loose(self.viewport))
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            trace!(?event, "dispatching");
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
            self.relayout();
        }
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, test_id: &str) -> Option<&'a dyn Widget> {
    if widget.test_id() == Some(test_id) {
        return Some(widget);
    }
    widget
        .children()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), test_id))
}
