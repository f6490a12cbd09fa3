//! Signal handling for the demo session

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{info, warn};

/// Resolve when the process is asked to stop (SIGINT or SIGTERM).
pub async fn shutdown_signal() {
    let mut signals = match Signals::new([SIGINT, SIGTERM]) {
        Ok(signals) => signals,
        Err(e) => {
            // No signal handler; the scripted session ends the process
            // instead.
            warn!("failed to install signal handler: {}", e);
            std::future::pending::<()>().await;
            unreachable!()
        }
    };

    if let Some(signal) = signals.next().await {
        info!("received signal {}, ending session", signal);
    }
}
