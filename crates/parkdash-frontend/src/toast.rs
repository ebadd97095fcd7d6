//! Transient toast messages.
//!
//! Active toasts are an explicit ordered collection of records, each with
//! its own expiry deadline. Toasts stack without limit and are never
//! deduplicated; each one disappears on its own deadline or on explicit
//! user dismissal, whichever comes first.

use std::time::{Duration, Instant};

use parkdash_bridge::notification::NotificationCategory;
use parkdash_bridge::toast::Toast;

/// Default on-screen lifetime of a toast, used until configuration arrives.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Picks the icon shown next to a toast. Every category the client does not
/// specifically style has already been folded into `Info` at decode time.
pub fn icon_for(category: NotificationCategory) -> &'static str {
    match category {
        NotificationCategory::Success => "fa-check-circle",
        NotificationCategory::Warning => "fa-exclamation-triangle",
        NotificationCategory::Error => "fa-times-circle",
        NotificationCategory::Payment => "fa-credit-card",
        NotificationCategory::Booking => "fa-parking",
        NotificationCategory::Info => "fa-info-circle",
    }
}

/// One active toast.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    /// Monotonic sequence number identifying this record for dismissal.
    pub seq: u64,
    /// The toast payload.
    pub toast: Toast,
    /// Icon derived from the toast's category.
    pub icon: &'static str,
    deadline: Instant,
}

/// Owns the ordered collection of active toasts.
#[derive(Debug)]
pub struct ToastPresenter {
    duration: Duration,
    next_seq: u64,
    toasts: Vec<ToastRecord>,
}

impl ToastPresenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            next_seq: 0,
            toasts: Vec::new(),
        }
    }

    /// Updates the lifetime applied to toasts shown from now on; already
    /// visible toasts keep their original deadline.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Appends a new toast, returning its sequence number.
    pub fn show(&mut self, toast: Toast, now: Instant) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.toasts.push(ToastRecord {
            seq,
            icon: icon_for(toast.category),
            toast,
            deadline: now + self.duration,
        });
        seq
    }

    /// Removes one toast in response to its close affordance.
    pub fn dismiss(&mut self, seq: u64) {
        self.toasts.retain(|record| record.seq != seq);
    }

    /// Drops every toast whose deadline has passed.
    pub fn sweep(&mut self, now: Instant) {
        self.toasts.retain(|record| record.deadline > now);
    }

    /// The active toasts, oldest first.
    pub fn active(&self) -> &[ToastRecord] {
        &self.toasts
    }
}

impl Default for ToastPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(category: NotificationCategory) -> Toast {
        Toast {
            category,
            title: "Booking".to_string(),
            message: "Booking confirmed for slot B-102".to_string(),
        }
    }

    #[test]
    fn toasts_stack_and_expire_independently() {
        let mut presenter = ToastPresenter::default();
        let start = Instant::now();

        presenter.show(toast(NotificationCategory::Booking), start);
        presenter.show(
            toast(NotificationCategory::Payment),
            start + Duration::from_secs(2),
        );
        assert_eq!(presenter.active().len(), 2);

        // First toast is past its 5s deadline, second is not.
        presenter.sweep(start + Duration::from_secs(6));
        assert_eq!(presenter.active().len(), 1);
        assert_eq!(presenter.active()[0].icon, "fa-credit-card");

        presenter.sweep(start + Duration::from_secs(8));
        assert!(presenter.active().is_empty());
    }

    #[test]
    fn explicit_dismissal_removes_one_toast() {
        let mut presenter = ToastPresenter::default();
        let now = Instant::now();

        let first = presenter.show(toast(NotificationCategory::Success), now);
        presenter.show(toast(NotificationCategory::Error), now);

        presenter.dismiss(first);
        assert_eq!(presenter.active().len(), 1);
        assert_eq!(presenter.active()[0].icon, "fa-times-circle");
    }

    #[test]
    fn sweep_keeps_toasts_before_their_deadline() {
        let mut presenter = ToastPresenter::default();
        let now = Instant::now();

        presenter.show(toast(NotificationCategory::Info), now);
        presenter.sweep(now + Duration::from_secs(4));
        assert_eq!(presenter.active().len(), 1);
    }

    #[test]
    fn category_maps_to_distinct_icons() {
        assert_eq!(icon_for(NotificationCategory::Success), "fa-check-circle");
        assert_eq!(
            icon_for(NotificationCategory::Warning),
            "fa-exclamation-triangle"
        );
        assert_eq!(icon_for(NotificationCategory::Booking), "fa-parking");
        assert_eq!(icon_for(NotificationCategory::Info), "fa-info-circle");
    }
}
