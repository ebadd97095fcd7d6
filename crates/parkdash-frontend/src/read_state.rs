//! Render half of the read-state synchronization.
//!
//! These transitions run only after the server acknowledged the matching
//! request; a failed request reaches neither of them, leaving the page
//! exactly as it was.

use parkdash_bridge::notification::{Notification, NotificationId};

use crate::page::{NotificationItem, Page};

/// Transitions the one row matching `id` from unread to read. Rows for other
/// notifications are untouched. A missing row is logged and the transition
/// aborted; the next panel refresh will reconcile it.
pub fn apply_mark_read(page: &mut Page, id: NotificationId) {
    match page.items.iter_mut().find(|item| item.id == id) {
        Some(item) => item.read = true,
        None => log::warn!("No rendered row for notification {id}, skipping read transition"),
    }
}

/// Transitions every rendered row to read, hides the badge, resets the
/// unread label to its zero state, and hides the mark-all affordance.
pub fn apply_mark_all_read(page: &mut Page) {
    for item in page.items.iter_mut() {
        item.read = true;
    }

    if let Some(badge) = page.badge.as_mut() {
        badge.visible = false;
    }
    if let Some(label) = page.unread_label.as_mut() {
        label.text = "0 unread".to_string();
    }
    if let Some(button) = page.mark_all_button.as_mut() {
        button.visible = false;
    }
}

/// Replaces the panel rows with a freshly fetched notification list.
pub fn apply_recent_notifications(page: &mut Page, notifications: &[Notification]) {
    page.items = notifications
        .iter()
        .map(|notification| NotificationItem {
            id: notification.id,
            read: notification.read,
        })
        .collect();
}
