//! Outside-click dismissal that tolerates nested overlay surfaces.

use selectify_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Overlay surface kinds a pointer-down may land in without closing the
/// dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceMarker {
    /// Modal dialog body (`ms-Dialog-main`)
    DialogMain,
    /// Host dialog (`bc-dialog`)
    HostDialog,
    /// Layered portal (`ms-Layer`)
    Layer,
}

impl SurfaceMarker {
    /// Every recognized marker.
    pub const ALL: [Self; 3] = [Self::DialogMain, Self::HostDialog, Self::Layer];

    /// Class name identifying this surface.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::DialogMain => "ms-Dialog-main",
            Self::HostDialog => "bc-dialog",
            Self::Layer => "ms-Layer",
        }
    }

    /// Marker for a single class name.
    #[must_use]
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.class_name() == name)
    }
}

/// An overlay registered by the host, e.g. a dialog the widget is hosted in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySurface {
    /// Whitespace-separated class list
    pub class_name: String,
    /// Surface bounds in viewport coordinates
    pub bounds: Rect,
}

impl OverlaySurface {
    /// Create a surface.
    #[must_use]
    pub fn new(class_name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            class_name: class_name.into(),
            bounds,
        }
    }

    /// First recognized marker in the class list.
    #[must_use]
    pub fn marker(&self) -> Option<SurfaceMarker> {
        self.class_name
            .split_whitespace()
            .find_map(SurfaceMarker::from_class_name)
    }

    /// Whether this is a recognized surface containing `point`.
    #[must_use]
    pub fn shields(&self, point: &Point) -> bool {
        self.marker().is_some() && self.bounds.contains_point(point)
    }
}

/// Whether a pointer-down at `target` should close the open dropdown.
///
/// Presses inside `root` (input plus open panel) never dismiss. Presses
/// inside a recognized overlay also keep the dropdown open, unless they land
/// on the widget's own `input`.
#[must_use]
pub fn should_dismiss(target: &Point, root: Rect, input: Rect, overlays: &[OverlaySurface]) -> bool {
    if root.contains_point(target) {
        return false;
    }
    let in_overlay = overlays.iter().any(|o| o.shields(target));
    !(in_overlay && !input.contains_point(target))
}
