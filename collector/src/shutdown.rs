use log::{error, info};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;

/// Notifies `notify` when Ctrl+C is received.
pub fn listen_for_shutdown(notify: Arc<Notify>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received. Stopping session...");
                notify.notify_one();
            }
            Err(e) => error!("Error while waiting for Ctrl+C: {}", e),
        }
    })
}
