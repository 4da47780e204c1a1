use std::rc::Rc;
use std::time::{Duration, Instant};

/// Countdown step length
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Hands out periodic tick registrations and tracks how many are alive.
///
/// The UI polls registrations from its frame loop and asks egui to repaint
/// when the nearest one is due, so no background thread is involved.
#[derive(Debug)]
pub struct TickClock {
    period: Duration,
    live: Rc<()>,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            live: Rc::new(()),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// New registration whose first tick is one period after `now`
    pub fn register(&self, now: Instant) -> TickRegistration {
        TickRegistration {
            next_due: now + self.period,
            period: self.period,
            _live: Rc::clone(&self.live),
        }
    }

    /// Registrations that have not been dropped yet
    pub fn active_registrations(&self) -> usize {
        Rc::strong_count(&self.live) - 1
    }
}

/// A running timer's claim on the tick clock. Dropping it cancels the ticks.
#[derive(Debug)]
pub struct TickRegistration {
    next_due: Instant,
    period: Duration,
    _live: Rc<()>,
}

impl TickRegistration {
    /// Number of whole periods elapsed since the last poll, advancing the
    /// schedule past them.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut ticks = 0u32;
        while now >= self.next_due {
            ticks = ticks.saturating_add(1);
            self.next_due += self.period;
        }
        ticks
    }

    /// Time left until the next tick; zero if one is already due
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
