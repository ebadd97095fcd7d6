//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, the unread-count
//! poller, and the message dispatch loop that listens to frontend bridge
//! requests.

use std::{sync::Arc, thread, time::Duration};

use parkdash_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::services::sync_service::UnreadPoller;
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let config = crate::config::load_config()
        .await
        .expect("failed to load config");
    let poll_interval = Duration::from_secs(config.sync.poll_interval_secs);

    let request_client = reqwest::Client::new();
    let state = Arc::new(RwLock::new(State {
        config,
        request_client,
    }));

    let context = Arc::new(AppContext { state, tx });
    let poller = UnreadPoller::start(context.clone(), poll_interval);

    context.consume_bridge_messages(rx).await;

    // The frontend hung up; the page lifetime is over.
    poller.stop();
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
