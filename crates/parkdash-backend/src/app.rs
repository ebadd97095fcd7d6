//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and toasts back to the frontend bridge.

use std::sync::Arc;

use parkdash_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::UnreadCountRequest => {
                services::notification_service::handle_unread_count_request(self.clone()).await;
            }
            MessageToBackend::MarkReadRequest(id) => {
                services::notification_service::handle_mark_read_request(self.clone(), id).await;
            }
            MessageToBackend::MarkAllReadRequest => {
                services::notification_service::handle_mark_all_read_request(self.clone()).await;
            }
            MessageToBackend::RecentNotificationsRequest { limit } => {
                services::notification_service::handle_recent_notifications_request(
                    self.clone(),
                    limit,
                )
                .await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        self.tx
            .send(message)
            .await
            .expect("failed to send message to frontend");
    }

    /// Send a toast message to the frontend bridge.
    pub async fn send_toast(
        &self,
        category: parkdash_bridge::notification::NotificationCategory,
        title: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.send(MessageFromBackend::ToastMessage(
            parkdash_bridge::toast::Toast {
                category,
                title: title.into(),
                message: content.into(),
            },
        ))
        .await;
    }
}
