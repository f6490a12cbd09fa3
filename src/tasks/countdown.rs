//! Countdown timer task

use std::time::Duration;
use chrono::Utc;
use tokio::{
    sync::watch,
    time::{interval, Instant},
};
use tracing::info;

use crate::config::CountdownConfig;
use crate::state::{CountdownDisplay, CountdownSnapshot};

/// Tick loop for one deadline display. Publishes a fresh display every
/// second until the deadline passes, then hides the timer and returns; the
/// hidden state is terminal. Every timer instance on a page runs its own
/// copy of this loop.
pub async fn countdown_task(config: CountdownConfig, display_tx: watch::Sender<CountdownDisplay>) {
    // The deadline is read exactly once. From here on time is measured
    // against the monotonic clock, so a wall clock stepped backwards cannot
    // resurrect an expired timer.
    let initial_distance = config
        .deadline_epoch
        .map(|deadline| deadline - Utc::now().timestamp())
        .unwrap_or(-1);

    if initial_distance < 0 {
        info!("countdown deadline missing or already passed, hiding timer");
        let _ = display_tx.send(CountdownDisplay::expired());
        return;
    }

    let started = Instant::now();
    let mut tick = interval(Duration::from_secs(1));

    loop {
        tick.tick().await;

        let distance = initial_distance - started.elapsed().as_secs() as i64;
        if distance < 0 {
            info!("countdown expired, hiding timer");
            let _ = display_tx.send(CountdownDisplay::expired());
            return;
        }

        let snapshot = CountdownSnapshot::from_distance(distance);
        if display_tx.send(CountdownDisplay::render(snapshot, config.slots)).is_err() {
            // page torn down
            return;
        }
    }
}
