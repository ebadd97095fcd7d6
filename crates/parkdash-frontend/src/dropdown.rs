//! Open/close state for the floating dropdown panels.
//!
//! One controller per panel (notification panel, profile menu); the two are
//! fully independent and may both be open at once. A controller whose
//! trigger or panel element was never rendered is a permanent no-op.

use crate::page::{Point, Rect};

/// Vertical gap between the trigger's bottom edge and the panel's top edge.
const PANEL_OFFSET_PX: f64 = 10.0;

/// Whether the panel is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Computed placement of an open panel: `top` is an absolute y coordinate,
/// `right` is the offset from the viewport's right edge, so the panel's
/// right edge lines up with the trigger's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPosition {
    pub top: f64,
    pub right: f64,
}

/// Geometry of the rendered trigger/panel pair.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    trigger: Rect,
    panel: Rect,
}

/// Manages one dropdown panel: positioning on open, the full-viewport
/// overlay beneath it, and outside-click dismissal.
#[derive(Debug)]
pub struct DropdownController {
    anchor: Option<Anchor>,
    state: DropdownState,
    position: Option<PanelPosition>,
}

impl DropdownController {
    /// Builds a controller for the given trigger/panel pair. If either
    /// element is absent from the page, every operation becomes a no-op.
    pub fn new(trigger: Option<Rect>, panel: Option<Rect>) -> Self {
        let anchor = match (trigger, panel) {
            (Some(trigger), Some(panel)) => Some(Anchor { trigger, panel }),
            _ => {
                log::debug!("Dropdown trigger or panel not rendered, controller disabled");
                None
            }
        };
        Self {
            anchor,
            state: DropdownState::Closed,
            position: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    /// The overlay is shown exactly while the panel is open.
    pub fn overlay_active(&self) -> bool {
        self.is_open()
    }

    /// Placement of the panel while open.
    pub fn position(&self) -> Option<PanelPosition> {
        self.position
    }

    /// Opens a closed panel (anchoring it below and right-aligned to the
    /// trigger) or closes an open one.
    pub fn toggle(&mut self, viewport_width: f64) {
        let Some(anchor) = self.anchor else {
            return;
        };

        match self.state {
            DropdownState::Closed => {
                self.state = DropdownState::Open;
                self.position = Some(PanelPosition {
                    top: anchor.trigger.bottom() + PANEL_OFFSET_PX,
                    right: viewport_width - anchor.trigger.right(),
                });
            }
            DropdownState::Open => self.close(),
        }
    }

    /// Closes the panel and hides the overlay.
    pub fn close(&mut self) {
        self.state = DropdownState::Closed;
        self.position = None;
    }

    /// Whether a click at `point` lands inside the open panel. Such clicks
    /// stop propagating at the panel, so they never reach the document-level
    /// outside-click handler.
    pub fn swallows_click(&self, point: Point) -> bool {
        match self.anchor {
            Some(anchor) => self.is_open() && anchor.panel.contains(point),
            None => false,
        }
    }

    /// Document-level click: closes the panel when the click is outside both
    /// the trigger and the panel.
    pub fn handle_document_click(&mut self, point: Point) {
        let Some(anchor) = self.anchor else {
            return;
        };
        if !self.is_open() {
            return;
        }
        if !anchor.trigger.contains(point) && !anchor.panel.contains(point) {
            self.close();
        }
    }

    /// A click on the overlay always closes the panel.
    pub fn handle_overlay_click(&mut self) {
        if self.is_open() {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger() -> Rect {
        // A bell icon near the top-right of a 1280px viewport.
        Rect {
            x: 1180.0,
            y: 16.0,
            width: 40.0,
            height: 40.0,
        }
    }

    fn panel() -> Rect {
        Rect {
            x: 900.0,
            y: 66.0,
            width: 320.0,
            height: 400.0,
        }
    }

    fn controller() -> DropdownController {
        DropdownController::new(Some(trigger()), Some(panel()))
    }

    #[test]
    fn toggle_opens_below_and_right_aligned_to_trigger() {
        let mut dropdown = controller();
        dropdown.toggle(1280.0);

        assert!(dropdown.is_open());
        assert!(dropdown.overlay_active());
        let position = dropdown.position().unwrap();
        assert_eq!(position.top, trigger().bottom() + 10.0);
        assert_eq!(position.right, 1280.0 - trigger().right());
    }

    #[test]
    fn toggle_twice_closes_again() {
        let mut dropdown = controller();
        dropdown.toggle(1280.0);
        dropdown.toggle(1280.0);

        assert!(!dropdown.is_open());
        assert!(dropdown.position().is_none());
    }

    #[test]
    fn outside_click_closes_but_inside_clicks_do_not() {
        let mut dropdown = controller();
        dropdown.toggle(1280.0);

        // Inside the panel: swallowed before the document handler runs.
        let inside = Point { x: 1000.0, y: 200.0 };
        assert!(dropdown.swallows_click(inside));

        // On the trigger itself: reaches the handler but does not close.
        dropdown.handle_document_click(Point { x: 1200.0, y: 30.0 });
        assert!(dropdown.is_open());

        // Anywhere else: closes.
        dropdown.handle_document_click(Point { x: 100.0, y: 500.0 });
        assert!(!dropdown.is_open());
    }

    #[test]
    fn overlay_click_closes() {
        let mut dropdown = controller();
        dropdown.toggle(1280.0);
        dropdown.handle_overlay_click();
        assert!(!dropdown.is_open());
    }

    #[test]
    fn missing_panel_makes_controller_a_no_op() {
        let mut dropdown = DropdownController::new(Some(trigger()), None);
        dropdown.toggle(1280.0);

        assert!(!dropdown.is_open());
        assert!(dropdown.position().is_none());
        assert!(!dropdown.swallows_click(Point { x: 1000.0, y: 200.0 }));
    }

    #[test]
    fn panels_are_independent() {
        let mut notifications = controller();
        let mut profile = DropdownController::new(
            Some(Rect {
                x: 1100.0,
                y: 16.0,
                width: 60.0,
                height: 40.0,
            }),
            Some(Rect {
                x: 980.0,
                y: 66.0,
                width: 180.0,
                height: 220.0,
            }),
        );

        notifications.toggle(1280.0);
        profile.toggle(1280.0);
        assert!(notifications.is_open() && profile.is_open());

        notifications.close();
        assert!(!notifications.is_open());
        assert!(profile.is_open());
    }
}
