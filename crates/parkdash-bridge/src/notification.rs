use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque server-assigned identifier of a notification.
///
/// The client never interprets or derives these; they are only echoed back
/// to the server when requesting a read-state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Category of a notification, determining its icon and visual styling.
///
/// The server is free to introduce categories this client does not know
/// about; anything unrecognized decodes as [`NotificationCategory::Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    /// Neutral informational message that does not indicate success or failure.
    #[default]
    Info,
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates a non-critical issue that the user should be aware of.
    Warning,
    /// Indicates an error or failure that may affect functionality.
    Error,
    /// Relates to a payment or billing event.
    Payment,
    /// Relates to a parking booking or reservation event.
    Booking,
}

impl NotificationCategory {
    /// Parses a wire category string, falling back to `Info` for anything
    /// this client does not recognize.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "payment" => Self::Payment,
            "booking" => Self::Booking,
            _ => Self::Info,
        }
    }
}

impl<'de> Deserialize<'de> for NotificationCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}

/// A single notification entity as served by the notification API.
///
/// Owned by the server; the client holds these transiently for display and
/// only ever issues read-state transitions against their ids.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Notification {
    /// Server-assigned identifier.
    pub id: NotificationId,
    /// Short human-readable summary line.
    pub title: String,
    /// Full message body.
    pub message: String,
    /// Category used for icon selection and styling.
    #[serde(default)]
    pub category: NotificationCategory,
    /// Whether the notification has already been read.
    pub read: bool,
    /// Server-side creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back_to_info() {
        assert_eq!(
            NotificationCategory::from_wire("promotion"),
            NotificationCategory::Info
        );
        assert_eq!(
            NotificationCategory::from_wire("payment"),
            NotificationCategory::Payment
        );
    }

    #[test]
    fn notification_decodes_from_api_json() {
        let json = r#"{
            "id": 42,
            "title": "Booking confirmed",
            "message": "Booking confirmed for slot B-102",
            "category": "booking",
            "read": false,
            "createdAt": "2026-08-30T10:15:00Z"
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.id, NotificationId(42));
        assert_eq!(notification.category, NotificationCategory::Booking);
        assert!(!notification.read);
    }
}
