//! Selectable dropdown: a single- or multi-select combobox widget.
//!
//! The combobox is a text input that opens a panel of options. It supports:
//! - Free-text, case-insensitive filtering
//! - Keyboard navigation that skips disabled options
//! - Grouped options under header rows
//! - External control of the selection via a list of keys
//! - Placement above or below the input depending on available space
//! - Outside-click dismissal that tolerates hosting dialogs and layers
//!
//! The interaction logic lives in plain state units ([`selection`],
//! [`filter`], [`keyboard`], [`placement`], [`dismiss`]) composed by the
//! [`Controller`]. [`Selectify`] wraps the controller as a
//! [`Widget`](selectify_core::Widget).
//!
//! # Example
//!
//! ```
//! use selectify::{SelectOption, Selectify};
//! use selectify_core::{Event, Rect, Widget};
//!
//! let mut select = Selectify::new()
//!     .multiple(true)
//!     .options([SelectOption::new("a", "Apple"), SelectOption::new("b", "Banana")])
//!     .selected_keys(["b"]);
//!
//! select.event(&Event::Resize { width: 800.0, height: 600.0 });
//! select.layout(Rect::new(10.0, 10.0, 240.0, 32.0));
//! assert_eq!(select.selected()[0].text, "Banana");
//! ```

pub mod config;
pub mod controller;
pub mod deferred;
pub mod dismiss;
pub mod error;
pub mod filter;
pub mod keyboard;
pub mod message;
pub mod option;
pub mod placement;
mod row;
pub mod selection;
mod widget;

pub use config::{RegionStyle, SelectifyConfig, StyleOverrides};
pub use controller::Controller;
pub use deferred::{DeferredAction, DeferredQueue};
pub use dismiss::{should_dismiss, OverlaySurface, SurfaceMarker};
pub use error::ConfigError;
pub use filter::FilterResult;
pub use keyboard::{KeyOutcome, KeyboardNavigator, ScrollBehavior, ScrollBlock, ScrollRequest};
pub use message::{
    CloseReason, DropdownClosed, DropdownOpened, OptionChanged, RowSelectRequested,
    SelectifyMessage,
};
pub use option::{OptionGroup, SelectOption};
pub use placement::{InputMeasure, Measurement, Placement, PositionOffset, ESTIMATED_PANEL_HEIGHT};
pub use row::{OptionRenderProps, RenderOption, SelectHandle};
pub use selection::{ChangeCallback, Selection};
pub use widget::Selectify;
