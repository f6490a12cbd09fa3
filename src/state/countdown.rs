//! Countdown arithmetic and display rendering

use crate::config::DisplaySlots;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

/// Time left until the deadline, decomposed for display. Recomputed every
/// tick, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownSnapshot {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownSnapshot {
    /// Decompose a distance in whole seconds. Floor division at each unit
    /// level, no rounding.
    pub fn from_distance(distance_secs: i64) -> Self {
        let distance = distance_secs.max(0);
        Self {
            days: distance / SECS_PER_DAY,
            hours: (distance % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (distance % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: distance % SECS_PER_MINUTE,
        }
    }
}

/// What the timer markup shows after a tick. `None` in a slot means the
/// host provides no element for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountdownDisplay {
    pub hidden: bool,
    pub days: Option<String>,
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

impl CountdownDisplay {
    /// Render a snapshot into the slots the host provides, zero-padded to
    /// two digits.
    pub fn render(snapshot: CountdownSnapshot, slots: DisplaySlots) -> Self {
        let pad = |present: bool, value: i64| present.then(|| format!("{:02}", value));
        Self {
            hidden: false,
            days: pad(slots.days, snapshot.days),
            hours: pad(slots.hours, snapshot.hours),
            minutes: pad(slots.minutes, snapshot.minutes),
            seconds: pad(slots.seconds, snapshot.seconds),
        }
    }

    /// Terminal state: the whole timer element is hidden.
    pub fn expired() -> Self {
        Self { hidden: true, ..Self::default() }
    }
}
