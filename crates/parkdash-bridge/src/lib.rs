//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the dashboard
//! frontend with an asynchronous backend responsible for talking to the
//! parking service's notification API.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., mark a notification read, refresh
//!   the unread count).
//! - The backend pushes events (e.g., the authoritative unread count,
//!   read-state acknowledgments, toasts).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod notification;
pub mod toast;

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::notification::{Notification, NotificationId};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or pushed by the
/// background unread-count poller. Failed server requests emit nothing: the
/// frontend keeps displaying its prior state.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// Authoritative unread count freshly fetched from the server.
    UnreadCountResponse(u64),
    /// The server acknowledged marking one notification read.
    MarkReadConfirmed(NotificationId),
    /// The server acknowledged marking every notification read.
    MarkAllReadConfirmed,
    /// Most recent notifications for rendering the dropdown panel.
    RecentNotificationsResponse(Vec<Notification>),
    /// Generic message for all toasts in the application.
    ToastMessage(toast::Toast),
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the read-state synchronization flow.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request a fresh unread count from the server.
    UnreadCountRequest,
    /// Request to mark one notification as read.
    MarkReadRequest(NotificationId),
    /// Request to mark every notification as read.
    MarkAllReadRequest,
    /// Request the most recent notifications for the dropdown panel.
    RecentNotificationsRequest {
        /// Maximum number of notifications to fetch; `None` uses the
        /// configured default.
        limit: Option<u32>,
    },
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
