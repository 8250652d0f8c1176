//! Testing utilities for Selectify widgets.
//!
//! [`Harness`] stands in for the host application: it delivers events to a
//! widget, re-runs layout after each one so deferred work is flushed, and
//! collects the messages the widget emits.
//!
//! ```
//! use selectify_core::{
//!     widget::LayoutResult, Canvas, Constraints, Event, Rect, Size, TypeId, Widget,
//! };
//! use selectify_test::Harness;
//! use std::any::Any;
//!
//! struct Counter(u32);
//!
//! impl Widget for Counter {
//!     fn type_id(&self) -> TypeId { TypeId::of::<Self>() }
//!     fn measure(&self, c: Constraints) -> Size { c.constrain(Size::new(10.0, 10.0)) }
//!     fn layout(&mut self, b: Rect) -> LayoutResult { LayoutResult { size: b.size() } }
//!     fn paint(&self, _: &mut dyn Canvas) {}
//!     fn event(&mut self, _: &Event) -> Option<Box<dyn Any + Send>> {
//!         self.0 += 1;
//!         None
//!     }
//! }
//!
//! let mut harness = Harness::new(Counter(0));
//! harness.tick(32);
//! assert_eq!(harness.widget().0, 3);
//! ```

#![allow(clippy::missing_panics_doc)]

mod harness;

pub use harness::Harness;
