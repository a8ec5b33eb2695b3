//! Injectable clock
//!
//! The scheduling logic never reads the system time directly. The shell (CLI)
//! supplies the current instant through this trait, so due selection and
//! interval updates can be exercised in tests without waiting real time.
//! Clock monotonicity is assumed, not validated.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Provides the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Steppable clock for tests
///
/// Starts at a fixed instant and only moves when advanced programmatically.
#[derive(Clone)]
pub struct SimulatedClock {
    current: Cell<DateTime<Utc>>,
}

impl SimulatedClock {
    pub fn starting_at(time: DateTime<Utc>) -> Self {
        Self {
            current: Cell::new(time),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.current.set(self.current.get() + duration);
    }

    pub fn advance_days(&self, days: i64) {
        self.advance(Duration::days(days));
    }

    pub fn set(&self, time: DateTime<Utc>) {
        self.current.set(time);
    }
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self::starting_at(Utc::now())
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_returns_current_time() {
        let clock = SystemClock;
        let before = Utc::now();
        let at = clock.now();
        let after = Utc::now();

        assert!(at >= before);
        assert!(at <= after);
    }

    #[test]
    fn test_simulated_clock_advances() {
        let clock = SimulatedClock::default();
        let start = clock.now();

        clock.advance_days(3);

        assert_eq!((clock.now() - start).num_days(), 3);
    }

    #[test]
    fn test_simulated_clock_set() {
        let clock = SimulatedClock::default();
        let target = Utc::now() + Duration::days(100);

        clock.set(target);

        assert_eq!(clock.now(), target);
    }
}
