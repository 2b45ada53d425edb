use kurbo::Point;

use crate::data::model::Record;

/// Transient tooltip state, owned by [`HoverTracker`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TooltipState {
    /// Whether the tooltip is showing.
    pub visible: bool,
    /// Snapshot of the hovered record's details.
    pub content: String,
    /// Pointer position the tooltip follows, in canvas pixels.
    pub position: Point,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            content: String::new(),
            position: Point::ORIGIN,
        }
    }
}

/// Per-point hover state machine driving the tooltip.
///
/// Idle on pointer-leave and on every scene change; at most one hover target
/// is active at a time, last event wins.
#[derive(Clone, Debug, Default)]
pub struct HoverTracker {
    tooltip: TooltipState,
}

impl HoverTracker {
    /// Current tooltip state.
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Whether a hover target is active.
    pub fn is_hovering(&self) -> bool {
        self.tooltip.visible
    }

    /// Idle -> Hovering: capture the content snapshot and initial position.
    pub fn pointer_enter(&mut self, content: impl Into<String>, at: Point) {
        self.tooltip = TooltipState {
            visible: true,
            content: content.into(),
            position: at,
        };
    }

    /// Hovering -> Hovering: update the position only, content unchanged.
    /// Ignored while idle.
    pub fn pointer_move(&mut self, at: Point) {
        if self.tooltip.visible {
            self.tooltip.position = at;
        }
    }

    /// Hovering -> Idle.
    pub fn pointer_leave(&mut self) {
        self.reset();
    }

    /// Force Idle regardless of pending pointer events. Called on every scene
    /// change so no tooltip outlives its scene.
    pub fn reset(&mut self) {
        self.tooltip = TooltipState::default();
    }
}

/// Tooltip content snapshot for a hovered record.
pub fn tooltip_content(record: &Record) -> String {
    format!(
        "Make: {}\nCity MPG: {}\nHighway MPG: {}",
        record.make, record.city, record.highway
    )
}

#[cfg(test)]
#[path = "../../tests/unit/session/hover.rs"]
mod tests;
