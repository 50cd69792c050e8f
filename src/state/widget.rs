//! Floating panel geometry and drag lifecycle for the assistant widget.
//!
//! DESIGN
//! ======
//! All position math is pure over `(panel size, viewport size)` pairs so
//! the clamp and anchor invariants are testable without a DOM. The
//! component layer measures the real panel/viewport and feeds the
//! numbers in.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

/// Inset between the anchored panel and the viewport edge, in pixels.
pub const ANCHOR_MARGIN: f64 = 24.0;

/// Top-left pixel offset of the floating panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Width/height pair for the panel or the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Clamp a candidate top-left so no part of the panel leaves the
/// viewport. Each axis is clamped to `[0, viewport - panel]`; the zero
/// floor wins when the panel is larger than the viewport.
pub fn clamp_to_viewport(x: f64, y: f64, panel: Size, viewport: Size) -> Position {
    let max_x = viewport.width - panel.width;
    let max_y = viewport.height - panel.height;
    Position {
        x: x.min(max_x).max(0.0),
        y: y.min(max_y).max(0.0),
    }
}

/// Position resting flush against the bottom-right corner, inset by
/// [`ANCHOR_MARGIN`] and clamped to the viewport.
pub fn anchored_position(panel: Size, viewport: Size) -> Position {
    clamp_to_viewport(
        viewport.width - panel.width - ANCHOR_MARGIN,
        viewport.height - panel.height - ANCHOR_MARGIN,
        panel,
        viewport,
    )
}

/// Widget shell state: open flag, panel position, and drag tracking.
///
/// States map to the shell contract: `closed` (`open == false`),
/// `open-idle` (`open`, `!dragging`), `open-dragging` (`open`,
/// `dragging`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidgetState {
    pub open: bool,
    pub position: Position,
    pub dragging: bool,
    drag_offset: Position,
}

impl WidgetState {
    /// Enter `open-dragging`, capturing the pointer offset relative to
    /// the panel's current top-left corner.
    pub fn begin_drag(&mut self, pointer: Position) {
        self.dragging = true;
        self.drag_offset = Position {
            x: pointer.x - self.position.x,
            y: pointer.y - self.position.y,
        };
    }

    /// Recompute the top-left as `pointer - captured offset`, clamped to
    /// the viewport. Ignored outside `open-dragging`.
    pub fn drag_to(&mut self, pointer: Position, panel: Size, viewport: Size) {
        if !self.dragging {
            return;
        }
        self.position = clamp_to_viewport(
            pointer.x - self.drag_offset.x,
            pointer.y - self.drag_offset.y,
            panel,
            viewport,
        );
    }

    /// Return to `open-idle` on pointer release.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Re-snap the panel to the bottom-right corner. Pure function of
    /// the current viewport and panel size, so calling it twice in a
    /// row yields the same position both times.
    pub fn reset_position(&mut self, panel: Size, viewport: Size) {
        self.position = anchored_position(panel, viewport);
    }
}
