//! Configuration and CLI argument handling
//!
//! The demo binary takes its knobs from the command line; the widgets take
//! theirs from explicit per-component records built once at initialization,
//! standing in for the host attributes a page would carry.

use clap::Parser;

use crate::state::VariantId;

/// CLI argument parsing structure for the demo storefront session
#[derive(Parser)]
#[command(name = "last-chance")]
#[command(about = "Event-driven urgency and sticky-cart widgets for product pages")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Port for the stub cart endpoint
    #[arg(short, long, default_value = "20570")]
    pub port: u16,

    /// Host address for the stub cart endpoint
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Countdown deadline, minutes from launch
    #[arg(short, long, default_value = "90")]
    pub deadline: i64,

    /// Keep the sticky control visible instead of scroll-driven
    #[arg(long)]
    pub always_visible: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the endpoint address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn visibility_mode(&self) -> VisibilityMode {
        if self.always_visible {
            VisibilityMode::Always
        } else {
            VisibilityMode::OnScroll
        }
    }
}

/// Which countdown slots the host markup provides. Absent slots are skipped
/// silently when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplaySlots {
    pub days: bool,
    pub hours: bool,
    pub minutes: bool,
    pub seconds: bool,
}

impl DisplaySlots {
    pub fn all() -> Self {
        Self { days: true, hours: true, minutes: true, seconds: true }
    }
}

/// Countdown configuration, read once from the host at initialization.
#[derive(Debug, Clone)]
pub struct CountdownConfig {
    /// Deadline in epoch seconds. `None` renders as already expired.
    pub deadline_epoch: Option<i64>,
    pub slots: DisplaySlots,
}

impl CountdownConfig {
    /// Build from the raw host attribute. A missing or unparsable value maps
    /// to an expired deadline rather than an error.
    pub fn from_attribute(raw: Option<&str>, slots: DisplaySlots) -> Self {
        Self {
            deadline_epoch: raw.and_then(|s| s.trim().parse().ok()),
            slots,
        }
    }
}

/// One stock indicator, bound to the variant named by its host attribute.
#[derive(Debug, Clone)]
pub struct StockBinding {
    pub variant_id: VariantId,
}

/// How the sticky control decides its visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMode {
    /// Shown from initialization onward.
    Always,
    /// Shown only while the tracked anchor is scrolled out of view.
    OnScroll,
}

/// Sticky control configuration.
#[derive(Debug, Clone)]
pub struct StickyConfig {
    pub visibility: VisibilityMode,
}
