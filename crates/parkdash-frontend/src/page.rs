//! Typed handles onto the rendered dashboard page.
//!
//! The rendering layer produces the initial markup; this module models the
//! pieces of it the client mutates as explicit, injectable handles instead of
//! string lookups scattered across functions. A handle the rendering layer
//! did not provide is simply `None`, and every operation touching it becomes
//! a graceful no-op.

use parkdash_bridge::notification::NotificationId;

/// A point in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of a rendered element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The x coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Whether the given point lies within this box.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

/// A text-bearing element handle with a visibility flag (badge, unread
/// label, mark-all-read affordance).
#[derive(Debug, Clone, Default)]
pub struct TextElement {
    /// Currently displayed text content.
    pub text: String,
    /// Whether the element is shown.
    pub visible: bool,
}

impl TextElement {
    /// A visible element with the given initial text.
    pub fn visible(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }

    /// A hidden element with no text.
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// One notification row inside the dropdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationItem {
    /// Identifier carried by the row's data attribute.
    pub id: NotificationId,
    /// Whether the row is styled as read.
    pub read: bool,
}

/// The set of element handles this client mutates, injected once at
/// construction.
#[derive(Debug, Clone)]
pub struct Page {
    /// Width of the viewport, used for right-aligning dropdown panels.
    pub viewport_width: f64,
    /// Small unread-count indicator on the notification bell.
    pub badge: Option<TextElement>,
    /// Textual "N unread" label in the panel header.
    pub unread_label: Option<TextElement>,
    /// The "mark all as read" affordance.
    pub mark_all_button: Option<TextElement>,
    /// Notification rows currently rendered in the panel.
    pub items: Vec<NotificationItem>,
}

impl Page {
    /// A page with every handle present, badge hidden, and no rows yet.
    pub fn new(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            badge: Some(TextElement::hidden()),
            unread_label: Some(TextElement::visible("0 unread")),
            mark_all_button: Some(TextElement::visible("Mark all as read")),
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_hit_testing() {
        let rect = Rect {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 40.0,
        };
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert!(rect.contains(Point { x: 10.0, y: 60.0 }));
        assert!(!rect.contains(Point { x: 41.0, y: 30.0 }));
    }
}
