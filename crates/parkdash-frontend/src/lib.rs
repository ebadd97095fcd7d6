//! Frontend runtime: typed page state, user interaction entry points, and
//! the loop applying backend events to the page.
//!
//! The rendering layer draws the dashboard; this crate owns everything the
//! original page mutated after load — badge and unread label, notification
//! rows, the two dropdown panels, and the toast stack — and keeps it in sync
//! with the backend over the bridge channels.

use std::time::{Duration, Instant};

use parkdash_bridge::MessageFromBackend;
use parkdash_bridge::notification::NotificationId;
use tokio::sync::mpsc;

use crate::dropdown::DropdownController;
use crate::page::{Page, Point, Rect};
use crate::toast::ToastPresenter;

pub mod actions;
pub mod badge;
pub mod dropdown;
pub mod formatting;
pub mod page;
pub mod read_state;
pub mod toast;

/// How often expired toasts are swept off the page.
const TOAST_SWEEP_INTERVAL: Duration = Duration::from_millis(250);

/// Frontend-side handle for issuing commands to the backend.
#[derive(Clone)]
pub struct DashboardBridge {
    pub to_backend: mpsc::Sender<parkdash_bridge::MessageToBackend>,
}

impl DashboardBridge {
    pub async fn request_config(&self) {
        self.to_backend
            .send(parkdash_bridge::MessageToBackend::ConfigurationRequest)
            .await
            .expect("failed to request config");
    }

    pub async fn refresh_unread_count(&self) {
        self.to_backend
            .send(parkdash_bridge::MessageToBackend::UnreadCountRequest)
            .await
            .expect("failed to request unread count");
    }

    pub async fn mark_read(&self, id: NotificationId) {
        self.to_backend
            .send(parkdash_bridge::MessageToBackend::MarkReadRequest(id))
            .await
            .expect("failed to request read transition");
    }

    pub async fn mark_all_read(&self) {
        self.to_backend
            .send(parkdash_bridge::MessageToBackend::MarkAllReadRequest)
            .await
            .expect("failed to request mark-all-read");
    }

    pub async fn fetch_recent_notifications(&self) {
        self.to_backend
            .send(parkdash_bridge::MessageToBackend::RecentNotificationsRequest { limit: None })
            .await
            .expect("failed to request recent notifications");
    }
}

/// Element geometry handed over by the rendering layer at bootstrap.
///
/// Any `None` leaves the corresponding dropdown permanently inert, matching
/// pages that render without that widget.
#[derive(Debug, Clone)]
pub struct DashboardElements {
    pub page: Page,
    pub notification_trigger: Option<Rect>,
    pub notification_panel: Option<Rect>,
    pub profile_trigger: Option<Rect>,
    pub profile_panel: Option<Rect>,
}

impl Default for DashboardElements {
    fn default() -> Self {
        // Geometry of the stock customer dashboard header on a 1280px page.
        Self {
            page: Page::new(1280.0),
            notification_trigger: Some(Rect {
                x: 1180.0,
                y: 16.0,
                width: 40.0,
                height: 40.0,
            }),
            notification_panel: Some(Rect {
                x: 900.0,
                y: 66.0,
                width: 320.0,
                height: 400.0,
            }),
            profile_trigger: Some(Rect {
                x: 1080.0,
                y: 16.0,
                width: 88.0,
                height: 40.0,
            }),
            profile_panel: Some(Rect {
                x: 988.0,
                y: 66.0,
                width: 180.0,
                height: 220.0,
            }),
        }
    }
}

/// Aggregated frontend state: the page handles, both dropdown controllers,
/// and the active toast stack.
pub struct Dashboard {
    pub page: Page,
    pub notifications_dropdown: DropdownController,
    pub profile_dropdown: DropdownController,
    pub toasts: ToastPresenter,
}

impl Dashboard {
    pub fn new(elements: DashboardElements) -> Self {
        Self {
            page: elements.page,
            notifications_dropdown: DropdownController::new(
                elements.notification_trigger,
                elements.notification_panel,
            ),
            profile_dropdown: DropdownController::new(
                elements.profile_trigger,
                elements.profile_panel,
            ),
            toasts: ToastPresenter::default(),
        }
    }

    /// Applies one backend event to the page state.
    pub fn apply_message(&mut self, message: MessageFromBackend, now: Instant) {
        match message {
            MessageFromBackend::ConfigurationResponse(config) => {
                self.toasts
                    .set_duration(Duration::from_secs(config.toast.duration_secs));
            }
            MessageFromBackend::UnreadCountResponse(count) => {
                badge::apply_unread_count(&mut self.page, count);
            }
            MessageFromBackend::MarkReadConfirmed(id) => {
                read_state::apply_mark_read(&mut self.page, id);
            }
            MessageFromBackend::MarkAllReadConfirmed => {
                read_state::apply_mark_all_read(&mut self.page);
            }
            MessageFromBackend::RecentNotificationsResponse(notifications) => {
                read_state::apply_recent_notifications(&mut self.page, &notifications);
            }
            MessageFromBackend::ToastMessage(toast) => {
                self.toasts.show(toast, now);
            }
        }
    }

    /// Click on the notification bell.
    pub fn toggle_notifications(&mut self) {
        self.notifications_dropdown.toggle(self.page.viewport_width);
    }

    /// Click on the user profile trigger.
    pub fn toggle_profile(&mut self) {
        self.profile_dropdown.toggle(self.page.viewport_width);
    }

    /// Document-level click dispatch. Clicks landing inside an open panel
    /// stop propagating there and never reach the outside-click handling;
    /// everything else lets each panel decide independently whether to
    /// close.
    pub fn handle_click(&mut self, point: Point) {
        if self.notifications_dropdown.swallows_click(point)
            || self.profile_dropdown.swallows_click(point)
        {
            return;
        }
        self.notifications_dropdown.handle_document_click(point);
        self.profile_dropdown.handle_document_click(point);
    }
}

/// Runs the frontend event loop until the backend side of the bridge closes.
///
/// Bootstraps by requesting configuration, the initial unread count, and the
/// recent notifications; then alternates between applying backend events and
/// sweeping expired toasts.
pub fn run(
    mut rx: mpsc::Receiver<parkdash_bridge::MessageFromBackend>,
    tx: mpsc::Sender<parkdash_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let bridge = DashboardBridge { to_backend: tx };
        let mut dashboard = Dashboard::new(DashboardElements::default());

        bridge.request_config().await;
        bridge.refresh_unread_count().await;
        bridge.fetch_recent_notifications().await;

        let mut sweep = tokio::time::interval(TOAST_SWEEP_INTERVAL);
        loop {
            tokio::select! {
                message = rx.recv() => match message {
                    Some(message) => {
                        log::debug!("Got a message from backend: {message:?}");
                        dashboard.apply_message(message, Instant::now());
                    }
                    None => break,
                },
                _ = sweep.tick() => dashboard.toasts.sweep(Instant::now()),
            }
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use parkdash_bridge::notification::{
        Notification, NotificationCategory, NotificationId,
    };
    use parkdash_bridge::toast::Toast;

    use super::*;
    use crate::page::NotificationItem;

    fn dashboard() -> Dashboard {
        Dashboard::new(DashboardElements::default())
    }

    fn unread_items(dashboard: &mut Dashboard, ids: &[u64]) {
        dashboard.page.items = ids
            .iter()
            .map(|&id| NotificationItem {
                id: NotificationId(id),
                read: false,
            })
            .collect();
    }

    #[test]
    fn count_update_shows_badge_and_label() {
        let mut dashboard = dashboard();
        assert!(!dashboard.page.badge.as_ref().unwrap().visible);

        dashboard.apply_message(MessageFromBackend::UnreadCountResponse(3), Instant::now());

        let badge = dashboard.page.badge.as_ref().unwrap();
        assert!(badge.visible);
        assert_eq!(badge.text, "3");
        assert_eq!(dashboard.page.unread_label.as_ref().unwrap().text, "3 unread");
    }

    #[test]
    fn mark_all_read_resets_the_whole_header() {
        let mut dashboard = dashboard();
        unread_items(&mut dashboard, &[1, 2, 3, 4, 5]);
        dashboard.apply_message(MessageFromBackend::UnreadCountResponse(5), Instant::now());

        dashboard.apply_message(MessageFromBackend::MarkAllReadConfirmed, Instant::now());

        assert!(dashboard.page.items.iter().all(|item| item.read));
        assert!(!dashboard.page.badge.as_ref().unwrap().visible);
        assert_eq!(dashboard.page.unread_label.as_ref().unwrap().text, "0 unread");
        assert!(!dashboard.page.mark_all_button.as_ref().unwrap().visible);
    }

    #[test]
    fn recent_notifications_replace_panel_rows() {
        let mut dashboard = dashboard();
        let notifications = vec![Notification {
            id: NotificationId(11),
            title: "Payment received".to_string(),
            message: "Your payment was processed".to_string(),
            category: NotificationCategory::Payment,
            read: false,
            created_at: chrono::Utc::now(),
        }];

        dashboard.apply_message(
            MessageFromBackend::RecentNotificationsResponse(notifications),
            Instant::now(),
        );

        assert_eq!(dashboard.page.items.len(), 1);
        assert_eq!(dashboard.page.items[0].id, NotificationId(11));
    }

    #[test]
    fn toast_messages_stack_on_the_presenter() {
        let mut dashboard = dashboard();
        let toast = Toast {
            category: NotificationCategory::Success,
            title: "Notifications".to_string(),
            message: "All notifications marked as read.".to_string(),
        };

        dashboard.apply_message(MessageFromBackend::ToastMessage(toast), Instant::now());

        assert_eq!(dashboard.toasts.active().len(), 1);
        assert_eq!(dashboard.toasts.active()[0].icon, "fa-check-circle");
    }

    #[test]
    fn click_inside_one_panel_leaves_both_panels_alone() {
        let mut dashboard = dashboard();
        dashboard.toggle_notifications();
        dashboard.toggle_profile();

        // Inside the notification panel: swallowed, neither panel closes.
        dashboard.handle_click(Point { x: 1000.0, y: 200.0 });
        assert!(dashboard.notifications_dropdown.is_open());
        assert!(dashboard.profile_dropdown.is_open());

        // Far outside everything: both close independently.
        dashboard.handle_click(Point { x: 50.0, y: 600.0 });
        assert!(!dashboard.notifications_dropdown.is_open());
        assert!(!dashboard.profile_dropdown.is_open());
    }

    #[test]
    fn configuration_adjusts_toast_lifetime() {
        let mut dashboard = dashboard();
        let mut config = parkdash_bridge::config::Config::default();
        config.toast.duration_secs = 1;
        let now = Instant::now();

        dashboard.apply_message(MessageFromBackend::ConfigurationResponse(config), now);
        let toast = Toast {
            category: NotificationCategory::Info,
            title: "t".to_string(),
            message: "m".to_string(),
        };
        dashboard.apply_message(MessageFromBackend::ToastMessage(toast), now);

        dashboard.toasts.sweep(now + Duration::from_secs(2));
        assert!(dashboard.toasts.active().is_empty());
    }
}
