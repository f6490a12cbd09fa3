//! Stock indicator synchronization task

use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

use crate::bus::{PageBus, VariantChanged};
use crate::config::StockBinding;
use crate::state::StockIndicator;

/// Subscribe the bound indicators to the bus and spawn the mirror loop.
/// Purely reactive: no outbound requests, no polling.
pub fn spawn_stock_sync(
    bus: &PageBus,
    bindings: Vec<StockBinding>,
) -> watch::Receiver<Vec<StockIndicator>> {
    let indicators: Vec<StockIndicator> = bindings
        .into_iter()
        .map(|binding| StockIndicator::new(binding.variant_id))
        .collect();
    let (display_tx, display_rx) = watch::channel(indicators.clone());
    let variant_rx = bus.subscribe_variants();

    tokio::spawn(run(variant_rx, indicators, display_tx));

    display_rx
}

async fn run(
    mut variant_rx: broadcast::Receiver<VariantChanged>,
    mut indicators: Vec<StockIndicator>,
    display_tx: watch::Sender<Vec<StockIndicator>>,
) {
    loop {
        match variant_rx.recv().await {
            Ok(change) => {
                for indicator in &mut indicators {
                    indicator.apply(&change.variant);
                }
                debug!("stock indicators refreshed for variant {}", change.variant.id);
                if display_tx.send(indicators.clone()).is_err() {
                    // page torn down
                    return;
                }
            }
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                warn!("stock sync lagged, skipped {} notifications", missed);
            }
            Err(broadcast::error::RecvError::Closed) => return,
        }
    }
}
