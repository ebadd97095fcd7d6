use parkdash_bridge::MessageFromBackend;
use parkdash_bridge::notification::{Notification, NotificationCategory, NotificationId};
use reqwest::StatusCode;
use serde::Deserialize;

/// Errors produced by calls against the notification API.
///
/// Network failures and non-success statuses collapse into the same outcome:
/// the call is logged and the frontend receives nothing, so the previously
/// displayed state persists. No retries, no backoff.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status code.
    #[error("server responded with status {0}")]
    Status(StatusCode),
}

/// Response body of `GET /api/notifications/unread-count`.
#[derive(Debug, Deserialize)]
struct UnreadCountBody {
    count: u64,
}

/// Response body of `GET /api/notifications/recent`.
#[derive(Debug, Deserialize)]
struct RecentNotificationsBody {
    notifications: Vec<Notification>,
    #[serde(rename = "unreadCount")]
    unread_count: u64,
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/api/notifications/{}", base_url.trim_end_matches('/'), path)
}

/// Reads the HTTP client and API base URL out of the shared state.
async fn api_parts(context: &super::AppContextHandle) -> (reqwest::Client, String) {
    let state = context.state.read().await;
    (
        state.request_client.clone(),
        state.config.api.base_url.clone(),
    )
}

/// Handles an incoming unread count request (see
/// [`parkdash_bridge::MessageToBackend::UnreadCountRequest`]).
///
/// Emits [`MessageFromBackend::UnreadCountResponse`] on success. Failures are
/// logged and the frontend keeps its prior badge state.
pub async fn handle_unread_count_request(context: super::AppContextHandle) {
    match fetch_unread_count(&context).await {
        Ok(count) => {
            context
                .send(MessageFromBackend::UnreadCountResponse(count))
                .await;
        }
        Err(err) => log::error!("Failed to refresh the unread count: {err}"),
    }
}

async fn fetch_unread_count(context: &super::AppContextHandle) -> Result<u64, ApiError> {
    let (client, base_url) = api_parts(context).await;

    let response = client
        .get(endpoint(&base_url, "unread-count"))
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }

    let body: UnreadCountBody = response.json().await?;
    Ok(body.count)
}

/// Handles a request to mark one notification as read (see
/// [`parkdash_bridge::MessageToBackend::MarkReadRequest`]).
///
/// On success the acknowledgment is sent to the frontend and the unread count
/// is re-fetched from the server right away; the count shown to the user is
/// never decremented locally.
pub async fn handle_mark_read_request(context: super::AppContextHandle, id: NotificationId) {
    match post_read_transition(&context, &format!("{id}/read")).await {
        Ok(()) => {
            context.send(MessageFromBackend::MarkReadConfirmed(id)).await;
            handle_unread_count_request(context).await;
        }
        Err(err) => log::error!("Failed to mark notification {id} as read: {err}"),
    }
}

/// Handles a request to mark every notification as read (see
/// [`parkdash_bridge::MessageToBackend::MarkAllReadRequest`]).
///
/// All-or-nothing: a single acknowledgment drives the whole UI transition,
/// and a failed request mutates nothing.
pub async fn handle_mark_all_read_request(context: super::AppContextHandle) {
    match post_read_transition(&context, "mark-all-read").await {
        Ok(()) => {
            context.send(MessageFromBackend::MarkAllReadConfirmed).await;
            context
                .send_toast(
                    NotificationCategory::Success,
                    "Notifications",
                    "All notifications marked as read.",
                )
                .await;
        }
        Err(err) => log::error!("Failed to mark all notifications as read: {err}"),
    }
}

async fn post_read_transition(
    context: &super::AppContextHandle,
    path: &str,
) -> Result<(), ApiError> {
    let (client, base_url) = api_parts(context).await;

    let response = client.post(endpoint(&base_url, path)).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }

    Ok(())
}

/// Handles a request for the most recent notifications (see
/// [`parkdash_bridge::MessageToBackend::RecentNotificationsRequest`]).
///
/// The server reports the unread count alongside the list, so both are
/// forwarded to the frontend.
pub async fn handle_recent_notifications_request(
    context: super::AppContextHandle,
    limit: Option<u32>,
) {
    let limit = match limit {
        Some(limit) => limit,
        None => {
            let state = context.state.read().await;
            state.config.sync.recent_limit
        }
    };

    match fetch_recent_notifications(&context, limit).await {
        Ok(body) => {
            context
                .send(MessageFromBackend::RecentNotificationsResponse(
                    body.notifications,
                ))
                .await;
            context
                .send(MessageFromBackend::UnreadCountResponse(body.unread_count))
                .await;
        }
        Err(err) => log::error!("Failed to fetch recent notifications: {err}"),
    }
}

async fn fetch_recent_notifications(
    context: &super::AppContextHandle,
    limit: u32,
) -> Result<RecentNotificationsBody, ApiError> {
    let (client, base_url) = api_parts(context).await;

    let response = client
        .get(endpoint(&base_url, "recent"))
        .query(&[("limit", limit)])
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }

    Ok(response.json().await?)
}
