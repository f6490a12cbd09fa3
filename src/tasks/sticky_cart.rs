//! Sticky add-to-cart controller task
//!
//! The one component with real state-machine behavior: scroll visibility,
//! variant changes, clicks, the in-flight cart request, and the label-reset
//! timer all land on a single select loop, so every input applies to one
//! consistent state and the published snapshot can never mix eras.

use std::{future::pending, sync::Arc};
use tokio::{
    sync::{broadcast, mpsc, watch},
    task::JoinHandle,
    time::{sleep_until, Instant},
};
use tracing::{debug, error, info, warn};

use crate::bus::{PageBus, VariantChanged};
use crate::cart::{AddToCartRequest, CartError, CartGateway, CartSummary};
use crate::config::StickyConfig;
use crate::state::{StickyDisplay, StickyState, LABEL_RESET_DELAY};

/// Clicks queued while the controller is between polls. Anything beyond
/// this is dropped, which the re-entrancy guard would do anyway.
const CLICK_CAPACITY: usize = 8;

/// Page-side handle for one sticky control: clicks in, display snapshots
/// out.
#[derive(Debug, Clone)]
pub struct StickyCartHandle {
    click_tx: mpsc::Sender<()>,
    display_rx: watch::Receiver<StickyDisplay>,
}

impl StickyCartHandle {
    /// A user click on the add-to-cart action. Never blocks; a click that
    /// cannot be queued is dropped.
    pub fn click(&self) {
        if self.click_tx.try_send(()).is_err() {
            debug!("sticky cart click dropped: queue full or control gone");
        }
    }

    /// Latest published snapshot.
    pub fn display(&self) -> StickyDisplay {
        self.display_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StickyDisplay> {
        self.display_rx.clone()
    }
}

/// Subscribe to the bus, publish the initial snapshot, and spawn the
/// controller loop.
pub fn spawn_sticky_cart(
    config: StickyConfig,
    bus: &PageBus,
    gateway: Arc<dyn CartGateway>,
    intersection_rx: watch::Receiver<bool>,
) -> StickyCartHandle {
    let (click_tx, click_rx) = mpsc::channel(CLICK_CAPACITY);
    let state = StickyState::new(&config, *intersection_rx.borrow());
    let (display_tx, display_rx) = watch::channel(state.display());
    let variant_rx = bus.subscribe_variants();

    tokio::spawn(run(
        state,
        bus.clone(),
        gateway,
        variant_rx,
        intersection_rx,
        click_rx,
        display_tx,
    ));

    StickyCartHandle { click_tx, display_rx }
}

async fn run(
    mut state: StickyState,
    bus: PageBus,
    gateway: Arc<dyn CartGateway>,
    mut variant_rx: broadcast::Receiver<VariantChanged>,
    mut intersection_rx: watch::Receiver<bool>,
    mut click_rx: mpsc::Receiver<()>,
    display_tx: watch::Sender<StickyDisplay>,
) {
    info!("sticky cart controller started");

    let mut inflight: Option<JoinHandle<Result<CartSummary, CartError>>> = None;
    let mut reset_at: Option<Instant> = None;

    loop {
        // Idle inputs park on a never-resolving future instead of a select
        // precondition, so no branch can spin on an exhausted source.
        let request_done = async {
            match inflight.as_mut() {
                Some(handle) => handle.await,
                None => pending().await,
            }
        };
        let reset_due = async {
            match reset_at {
                Some(deadline) => sleep_until(deadline).await,
                None => pending().await,
            }
        };

        tokio::select! {
            received = variant_rx.recv() => match received {
                Ok(change) => {
                    debug!("sticky cart bound to variant {}", change.variant.id);
                    state.apply_variant(&change.variant);
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!("sticky cart lagged, skipped {} notifications", missed);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },

            changed = intersection_rx.changed() => match changed {
                Ok(()) => {
                    let intersecting = *intersection_rx.borrow_and_update();
                    state.set_intersecting(intersecting);
                }
                Err(_) => break,
            },

            clicked = click_rx.recv() => match clicked {
                Some(()) => {
                    let Some(variant_id) = state.begin_submit() else {
                        debug!("click ignored: no bound variant or request in progress");
                        continue;
                    };
                    // The busy snapshot goes out before the request leaves,
                    // so the guard is closed before anything else can run.
                    publish(&display_tx, &state);
                    info!("submitting add-to-cart for variant {}", variant_id);
                    let gateway = Arc::clone(&gateway);
                    inflight = Some(tokio::spawn(async move {
                        gateway.add_to_cart(AddToCartRequest::single(variant_id)).await
                    }));
                    continue;
                }
                None => break,
            },

            joined = request_done => {
                inflight = None;
                match joined {
                    Ok(Ok(summary)) => {
                        info!("add-to-cart succeeded, cart holds {} item(s)", summary.item_count);
                        state.finish_submit(true);
                        bus.announce_cart_updated(summary.item_count);
                    }
                    Ok(Err(e)) => {
                        error!("add-to-cart failed: {}", e);
                        state.finish_submit(false);
                    }
                    Err(e) => {
                        error!("add-to-cart task died: {}", e);
                        state.finish_submit(false);
                    }
                }
                reset_at = Some(Instant::now() + LABEL_RESET_DELAY);
            },

            () = reset_due => {
                reset_at = None;
                state.reset_request();
            },
        }

        publish(&display_tx, &state);
    }

    info!("sticky cart controller stopped");
}

fn publish(display_tx: &watch::Sender<StickyDisplay>, state: &StickyState) {
    if display_tx.send(state.display()).is_err() {
        debug!("sticky display dropped: no subscribers");
    }
}
