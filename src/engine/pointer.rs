//! Raw pointer state: latest coordinates plus the visible/hovering
//! booleans derived from input events. Pure state machine: transitions
//! are reported to the caller, which owns the chain and the sink.

use super::easing::Point;

/// What a pointer-move changed, beyond storing the new coordinates.
/// Edge-triggered: repeated identical events report nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveOutcome {
    /// Pointer was invisible and is now visible. The caller must snap
    /// the chain to the new position and show the output.
    pub became_visible: bool,
    /// Hover classification flipped; carries the new value.
    pub hover_changed: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    raw: Point,
    visible: bool,
    hovering: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            raw: Point::new(-100.0, -100.0),
            visible: false,
            hovering: false,
        }
    }

    pub fn raw(&self) -> Point {
        self.raw
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Record a pointer move. `interactive` is the caller's classification
    /// of the hovered target. Total function, always succeeds.
    pub fn pointer_moved(&mut self, x: f64, y: f64, interactive: bool) -> MoveOutcome {
        self.raw = Point::new(x, y);

        let mut outcome = MoveOutcome::default();
        if !self.visible {
            self.visible = true;
            outcome.became_visible = true;
        }
        if interactive != self.hovering {
            self.hovering = interactive;
            outcome.hover_changed = Some(interactive);
        }
        outcome
    }

    /// Pointer left the tracked surface.
    pub fn surface_left(&mut self) {
        self.visible = false;
        self.hovering = false;
    }

    /// Pointer re-entered the tracked surface at (x, y). Every re-entry
    /// re-snaps, including rapid leave/enter cycles.
    pub fn surface_entered(&mut self, x: f64, y: f64) {
        self.raw = Point::new(x, y);
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_becomes_visible() {
        let mut t = PointerTracker::new();
        let outcome = t.pointer_moved(10.0, 20.0, false);
        assert!(outcome.became_visible);
        assert!(t.is_visible());
        assert_eq!(t.raw(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_repeated_moves_report_nothing() {
        let mut t = PointerTracker::new();
        t.pointer_moved(10.0, 20.0, false);
        let outcome = t.pointer_moved(11.0, 21.0, false);
        assert_eq!(outcome, MoveOutcome::default());
    }

    #[test]
    fn test_hover_is_edge_triggered() {
        let mut t = PointerTracker::new();
        t.pointer_moved(0.0, 0.0, false);

        let on = t.pointer_moved(1.0, 1.0, true);
        assert_eq!(on.hover_changed, Some(true));

        // Identical classification: no redundant signal.
        let same = t.pointer_moved(2.0, 2.0, true);
        assert_eq!(same.hover_changed, None);

        let off = t.pointer_moved(3.0, 3.0, false);
        assert_eq!(off.hover_changed, Some(false));
    }

    #[test]
    fn test_leave_clears_visible_and_hovering() {
        let mut t = PointerTracker::new();
        t.pointer_moved(0.0, 0.0, true);
        t.surface_left();
        assert!(!t.is_visible());
        assert!(!t.is_hovering());
    }

    #[test]
    fn test_move_after_leave_becomes_visible_again() {
        let mut t = PointerTracker::new();
        t.pointer_moved(0.0, 0.0, false);
        t.surface_left();
        let outcome = t.pointer_moved(5.0, 5.0, false);
        assert!(outcome.became_visible, "re-entry must re-trigger visibility");
    }
}
