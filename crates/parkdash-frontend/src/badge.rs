//! Render half of the unread badge synchronization.
//!
//! The count shown here always comes from the server; the client never
//! computes or decrements it locally.

use crate::page::Page;

/// Mirrors a freshly fetched unread count into the badge and the "N unread"
/// label. The badge is hidden at zero and shows the literal count otherwise.
pub fn apply_unread_count(page: &mut Page, count: u64) {
    if let Some(badge) = page.badge.as_mut() {
        if count > 0 {
            badge.text = count.to_string();
            badge.visible = true;
        } else {
            badge.visible = false;
        }
    }

    if let Some(label) = page.unread_label.as_mut() {
        label.text = format!("{count} unread");
    }
}
