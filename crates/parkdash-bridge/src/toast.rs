use crate::notification::NotificationCategory;

/// A transient toast payload intended for the user interface.
///
/// Toasts are fire-and-forget: they are never persisted and the backend
/// does not track whether the frontend displayed them.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Category of the toast, determining its icon and visual style.
    pub category: NotificationCategory,
    /// Short heading line.
    pub title: String,
    /// The text content to display to the user.
    pub message: String,
}
