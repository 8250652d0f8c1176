//! Chooses whether the dropdown panel opens above or below the input.

use selectify_core::Rect;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Panel height assumed when deciding placement.
pub const ESTIMATED_PANEL_HEIGHT: f32 = 300.0;

/// Caller's placement preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionOffset {
    /// Always above
    Top,
    /// Below, flipping up when there is clearly more room above
    #[default]
    Bottom,
    /// Whichever side has room, preferring below
    Auto,
}

impl PositionOffset {
    /// Placement used when nothing can be measured.
    #[must_use]
    pub const fn fallback(self) -> Placement {
        match self {
            Self::Top => Placement::Top,
            Self::Bottom | Self::Auto => Placement::Bottom,
        }
    }
}

/// Resolved side the panel renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Above the input
    Top,
    /// Below the input
    #[default]
    Bottom,
}

/// Input geometry resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Input bounds in viewport coordinates
    pub input: Rect,
    /// Viewport height
    pub viewport_height: f32,
}

impl Measurement {
    /// Space between the input's bottom edge and the viewport bottom.
    #[must_use]
    pub fn space_below(&self) -> f32 {
        self.viewport_height - self.input.bottom()
    }

    /// Space between the viewport top and the input's top edge.
    #[must_use]
    pub const fn space_above(&self) -> f32 {
        self.input.top()
    }
}

/// Anything that can report where its input sits in the viewport.
pub trait InputMeasure {
    /// Current measurement, or `None` if the input has not been laid out.
    fn measure_input(&self) -> Option<Measurement>;
}

impl InputMeasure for Measurement {
    fn measure_input(&self) -> Option<Measurement> {
        Some(*self)
    }
}

impl InputMeasure for Option<Measurement> {
    fn measure_input(&self) -> Option<Measurement> {
        *self
    }
}

/// Decide placement for `preference` given a measurement.
///
/// `Top` is honored unconditionally; `Bottom` only flips when space below is
/// short of the estimate and smaller than space above.
#[must_use]
pub fn compute(preference: PositionOffset, measurement: &Measurement, estimated_height: f32) -> Placement {
    let below = measurement.space_below();
    let above = measurement.space_above();

    let placement = match preference {
        PositionOffset::Top => Placement::Top,
        PositionOffset::Bottom => {
            if below >= estimated_height || below >= above {
                Placement::Bottom
            } else {
                Placement::Top
            }
        }
        PositionOffset::Auto => {
            if above > below && above >= estimated_height {
                Placement::Top
            } else {
                Placement::Bottom
            }
        }
    };

    trace!(?preference, below, above, ?placement, "placement computed");
    placement
}

/// Measure through `source` and compute, falling back to the static
/// preference when no measurement is available.
#[must_use]
pub fn resolve(preference: PositionOffset, source: &dyn InputMeasure) -> Placement {
    source.measure_input().map_or_else(
        || preference.fallback(),
        |m| compute(preference, &m, ESTIMATED_PANEL_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(top: f32, bottom: f32, viewport: f32) -> Measurement {
        Measurement {
            input: Rect::new(0.0, top, 200.0, bottom - top),
            viewport_height: viewport,
        }
    }

    // =========================================================================
    // Bottom preference
    // =========================================================================

    #[test]
    fn test_bottom_flips_when_cramped_below() {
        let m = at(650.0, 700.0, 800.0);
        assert_eq!(compute(PositionOffset::Bottom, &m, 300.0), Placement::Top);
    }

    #[test]
    fn test_bottom_stays_with_enough_room() {
        let m = at(100.0, 132.0, 800.0);
        assert_eq!(compute(PositionOffset::Bottom, &m, 300.0), Placement::Bottom);
    }

    #[test]
    fn test_bottom_stays_when_below_beats_above_even_if_short() {
        let m = at(100.0, 132.0, 300.0);
        assert_eq!(compute(PositionOffset::Bottom, &m, 300.0), Placement::Bottom);
    }

    #[test]
    fn test_bottom_tie_stays_bottom() {
        let m = at(100.0, 200.0, 300.0);
        assert_eq!(compute(PositionOffset::Bottom, &m, 300.0), Placement::Bottom);
    }

    // =========================================================================
    // Top and Auto
    // =========================================================================

    #[test]
    fn test_top_is_unconditional() {
        let m = at(650.0, 700.0, 800.0);
        assert_eq!(compute(PositionOffset::Top, &m, 300.0), Placement::Top);
        let m = at(0.0, 32.0, 800.0);
        assert_eq!(compute(PositionOffset::Top, &m, 300.0), Placement::Top);
    }

    #[test]
    fn test_auto_needs_estimate_above() {
        let m = at(650.0, 700.0, 800.0);
        assert_eq!(compute(PositionOffset::Auto, &m, 300.0), Placement::Top);
        let m = at(250.0, 290.0, 320.0);
        assert_eq!(compute(PositionOffset::Auto, &m, 300.0), Placement::Bottom);
    }

    #[test]
    fn test_auto_prefers_bottom_when_room_below() {
        let m = at(400.0, 432.0, 1000.0);
        assert_eq!(compute(PositionOffset::Auto, &m, 300.0), Placement::Bottom);
    }

    // =========================================================================
    // Resolve
    // =========================================================================

    #[test]
    fn test_resolve_without_measurement_uses_fallback() {
        let none: Option<Measurement> = None;
        assert_eq!(resolve(PositionOffset::Top, &none), Placement::Top);
        assert_eq!(resolve(PositionOffset::Bottom, &none), Placement::Bottom);
        assert_eq!(resolve(PositionOffset::Auto, &none), Placement::Bottom);
    }

    #[test]
    fn test_resolve_uses_default_estimate() {
        let m = at(650.0, 700.0, 800.0);
        assert_eq!(resolve(PositionOffset::Bottom, &m), Placement::Top);
    }

    #[test]
    fn test_position_offset_serde_lowercase() {
        let p: PositionOffset = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(p, PositionOffset::Auto);
        assert_eq!(PositionOffset::default(), PositionOffset::Bottom);
    }
}
