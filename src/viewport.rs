//! Viewport intersection observation
//!
//! In-process stand-in for the browser's intersection observer: the host
//! feeds anchor and viewport geometry per observation tick, subscribers get
//! a boolean intersection signal on a watch channel.

use tokio::sync::watch;

/// Vertical extent of the tracked anchor, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorBounds {
    pub top: f64,
    pub bottom: f64,
}

/// Current scroll viewport, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

/// Observer tuning. Defaults match the host page: an anchor counts as
/// intersecting once 10% of it sits inside the viewport, with the viewport
/// bottom edge pulled up by 100px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin_bottom: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self { threshold: 0.1, root_margin_bottom: 100.0 }
    }
}

/// Reports whether a tracked anchor is inside the margin-contracted
/// viewport. Each `observe` call is one observation tick; consecutive
/// identical results produce no wakeup.
#[derive(Debug)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    tx: watch::Sender<bool>,
}

impl IntersectionObserver {
    /// Starts intersecting, so a scroll-mode sticky control stays hidden
    /// until the first real observation arrives, matching a page load with
    /// the product form in view.
    pub fn new(options: ObserverOptions) -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(true);
        (Self { options, tx }, rx)
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Feed one geometry sample and publish the resulting signal.
    pub fn observe(&self, anchor: AnchorBounds, viewport: Viewport) {
        let intersecting = self.intersects(anchor, viewport);
        self.tx.send_if_modified(|current| {
            if *current == intersecting {
                false
            } else {
                *current = intersecting;
                true
            }
        });
    }

    fn intersects(&self, anchor: AnchorBounds, viewport: Viewport) -> bool {
        let anchor_height = anchor.bottom - anchor.top;
        if anchor_height <= 0.0 {
            return false;
        }
        let view_top = viewport.scroll_top;
        let view_bottom = viewport.scroll_top + viewport.height - self.options.root_margin_bottom;
        let overlap = (anchor.bottom.min(view_bottom) - anchor.top.max(view_top)).max(0.0);
        overlap / anchor_height >= self.options.threshold
    }
}
