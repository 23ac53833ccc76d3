use std::{
    thread,
    time::{Duration, Instant},
};

/// Fixed-rate wakeups at `start + k * period`.
///
/// Like a ticker channel with room for one pending tick: a wake that was
/// missed while the caller was busy fires immediately on the next `wait`, and
/// any further missed ticks are dropped so the schedule re-aligns.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    pub fn starting_at(period: Duration, start: Instant) -> Self {
        assert!(!period.is_zero(), "ticker period must be positive");
        Ticker {
            period,
            next: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until the next tick and returns the instant it was due.
    pub fn wait(&mut self) -> Instant {
        let now = Instant::now();
        let due = self.next;
        if due > now {
            thread::sleep(due - now);
        }
        self.advance_past(due.max(now));
        due
    }

    fn advance_past(&mut self, now: Instant) {
        while self.next <= now {
            self.next += self.period;
        }
    }
}
