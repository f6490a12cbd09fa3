//! Last Chance - demo storefront session
//!
//! Wires the three widgets against the stub cart endpoint and walks a
//! scripted shopper through the page: scroll past the product form, switch
//! variants, click the sticky control, and let one add fail.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::{net::TcpListener, sync::watch, time::sleep};
use tracing::info;

use last_chance::{
    api::{create_router, ShopState},
    bus::PageBus,
    cart::HttpCartGateway,
    config::{Config, CountdownConfig, DisplaySlots, StickyConfig, StockBinding},
    state::{CountdownDisplay, StockIndicator, VariantId, VariantState, LABEL_RESET_DELAY},
    tasks::{countdown_task, spawn_stock_sync, spawn_sticky_cart, StickyCartHandle},
    utils::{format_price, shutdown_signal},
    viewport::{AnchorBounds, IntersectionObserver, ObserverOptions, Viewport},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("last_chance={},tower_http=info", config.log_level()))
        .init();

    info!("starting demo storefront session");

    // Stub cart endpoint the sticky control talks to.
    let catalog = demo_catalog();
    let shop = Arc::new(ShopState::with_catalog(catalog.clone()));
    let app = create_router(Arc::clone(&shop));
    let listener = TcpListener::bind(config.address()).await?;
    let endpoint = listener.local_addr()?;
    info!("stub cart endpoint on http://{}", endpoint);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("stub endpoint error: {}", e);
        }
    });

    let bus = PageBus::new();

    // Countdown deadline flows in the way a host attribute would: as text.
    let deadline = (Utc::now().timestamp() + config.deadline * 60).to_string();
    let countdown_config = CountdownConfig::from_attribute(Some(&deadline), DisplaySlots::all());
    let (countdown_tx, countdown_rx) = watch::channel(CountdownDisplay::default());
    tokio::spawn(countdown_task(countdown_config, countdown_tx));

    // One low-stock indicator per catalog variant.
    let bindings = catalog.iter().map(|v| StockBinding { variant_id: v.id }).collect();
    let stock_rx = spawn_stock_sync(&bus, bindings);

    // The sticky control watches the product form anchor.
    let (observer, intersection_rx) = IntersectionObserver::new(ObserverOptions::default());
    let gateway = Arc::new(HttpCartGateway::new(endpoint.to_string()));
    let sticky = spawn_sticky_cart(
        StickyConfig { visibility: config.visibility_mode() },
        &bus,
        gateway,
        intersection_rx,
    );

    let session = browse_session(bus, observer, sticky, countdown_rx, stock_rx);

    tokio::select! {
        () = session => info!("scripted session finished"),
        () = shutdown_signal() => info!("session interrupted"),
    }

    Ok(())
}

/// The scripted shopper: lands on the page, scrolls past the form, switches
/// variants, buys one, then tries a variant the shop rejects.
async fn browse_session(
    bus: PageBus,
    observer: IntersectionObserver,
    sticky: StickyCartHandle,
    countdown_rx: watch::Receiver<CountdownDisplay>,
    stock_rx: watch::Receiver<Vec<StockIndicator>>,
) {
    const FORM: AnchorBounds = AnchorBounds { top: 600.0, bottom: 1_100.0 };
    let at = |scroll_top| Viewport { scroll_top, height: 900.0 };
    let catalog = demo_catalog();
    let mut cart_rx = bus.subscribe_cart_updates();

    // Page load: form in view, default variant announced.
    observer.observe(FORM, at(0.0));
    bus.announce_variant(catalog[0].clone());
    sleep(Duration::from_millis(300)).await;
    report(&sticky, &countdown_rx, &stock_rx);

    // Scroll deep into the reviews; the sticky control appears.
    info!("shopper scrolls past the product form");
    observer.observe(FORM, at(2_400.0));
    sleep(Duration::from_millis(300)).await;

    // Switch to the discounted variant, then buy it. The double click
    // exercises the re-entrancy guard; only one request goes out.
    info!("shopper picks the discounted variant and clicks twice");
    bus.announce_variant(catalog[1].clone());
    sleep(Duration::from_millis(300)).await;
    sticky.click();
    sticky.click();
    sleep(Duration::from_millis(500)).await;
    report(&sticky, &countdown_rx, &stock_rx);
    if let Ok(update) = cart_rx.try_recv() {
        info!("page heard cart update: {} item(s)", update.count);
    }

    sleep(LABEL_RESET_DELAY + Duration::from_millis(200)).await;
    report(&sticky, &countdown_rx, &stock_rx);

    // Announce a variant the shop has never heard of and watch the add fail.
    info!("shopper picks a variant the shop rejects");
    bus.announce_variant(ghost_variant());
    sleep(Duration::from_millis(300)).await;
    sticky.click();
    sleep(Duration::from_millis(500)).await;
    report(&sticky, &countdown_rx, &stock_rx);

    sleep(LABEL_RESET_DELAY + Duration::from_millis(200)).await;
    report(&sticky, &countdown_rx, &stock_rx);
}

fn report(
    sticky: &StickyCartHandle,
    countdown_rx: &watch::Receiver<CountdownDisplay>,
    stock_rx: &watch::Receiver<Vec<StockIndicator>>,
) {
    let snapshot = sticky.display();
    let price = snapshot
        .price
        .map(format_price)
        .unwrap_or_else(|| "-".to_string());
    info!(
        "sticky: visible={} busy={} enabled={} label={:?} price={}",
        snapshot.visible, snapshot.busy, snapshot.enabled, snapshot.label, price
    );

    let countdown = countdown_rx.borrow();
    if countdown.hidden {
        info!("countdown: hidden");
    } else {
        let slot = |value: &Option<String>| value.clone().unwrap_or_else(|| "--".to_string());
        info!(
            "countdown: {}d {}h {}m {}s",
            slot(&countdown.days),
            slot(&countdown.hours),
            slot(&countdown.minutes),
            slot(&countdown.seconds)
        );
    }

    for indicator in stock_rx.borrow().iter() {
        if indicator.visible {
            if let Some(quantity) = indicator.quantity {
                info!("stock: variant {} down to {} left", indicator.variant_id, quantity);
            }
        }
    }
}

fn demo_catalog() -> Vec<VariantState> {
    vec![
        VariantState {
            id: VariantId(101),
            price: 2_499,
            compare_at_price: None,
            available: true,
            inventory_quantity: Some(23),
        },
        VariantState {
            id: VariantId(102),
            price: 1_999,
            compare_at_price: Some(2_499),
            available: true,
            inventory_quantity: Some(4),
        },
        VariantState {
            id: VariantId(103),
            price: 2_499,
            compare_at_price: None,
            available: false,
            inventory_quantity: Some(0),
        },
    ]
}

/// Announced by the widget but absent from the shop catalog, so the add is
/// rejected server-side.
fn ghost_variant() -> VariantState {
    VariantState {
        id: VariantId(999),
        price: 2_499,
        compare_at_price: None,
        available: true,
        inventory_quantity: None,
    }
}
