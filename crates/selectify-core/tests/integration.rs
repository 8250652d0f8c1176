//! Integration tests for selectify-core.
//!
//! These tests verify the public API works correctly end-to-end.

use selectify_core::{
    Canvas, Color, Constraints, DrawCommand, Event, Key, Point, RecordingCanvas, Rect, Size,
    TextStyle,
};

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_dropdown_rects_stack_below_input() {
    let input = Rect::new(20.0, 100.0, 240.0, 32.0);
    let panel = Rect::new(input.x, input.bottom(), input.width, 300.0);

    let root = input.union(&panel);
    assert_eq!(root.top(), 100.0);
    assert_eq!(root.bottom(), 432.0);

    // The seam between input and panel belongs to the panel only.
    let seam = Point::new(100.0, 132.0);
    assert!(!input.contains_point(&seam));
    assert!(panel.contains_point(&seam));
}

#[test]
fn test_constraints_with_measured_text() {
    let style = TextStyle::default();
    let width = style.estimate_width("Option 1");
    let size = Constraints::loose(Size::new(50.0, 100.0)).constrain(Size::new(width, 32.0));
    assert_eq!(size.width, 50.0);
}

// =============================================================================
// Canvas
// =============================================================================

#[test]
fn test_recording_canvas_as_dyn_canvas() {
    fn paint(canvas: &mut dyn Canvas) {
        canvas.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        canvas.fill_rect(Rect::new(0.0, 0.0, 100.0, 32.0), Color::WHITE);
        canvas.draw_text("Milk", Point::new(8.0, 8.0), &TextStyle::default());
        canvas.pop_clip();
    }

    let mut canvas = RecordingCanvas::new();
    paint(&mut canvas);

    assert_eq!(canvas.command_count(), 4);
    assert!(matches!(canvas.commands()[0], DrawCommand::PushClip(_)));
    assert_eq!(canvas.texts(), vec!["Milk"]);
    assert_eq!(canvas.clip_depth(), 0);
}

// =============================================================================
// Events
// =============================================================================

#[test]
fn test_events_deserialize_from_host_json() {
    let json = r#"[{"KeyDown":{"key":"Down"}},{"TextInput":{"text":"ap"}},"FocusOut"]"#;
    let events: Vec<Event> = serde_json::from_str(json).unwrap();
    assert_eq!(events[0], Event::KeyDown { key: Key::Down });
    assert_eq!(
        events[1],
        Event::TextInput {
            text: "ap".to_string()
        }
    );
    assert_eq!(events[2], Event::FocusOut);
}
