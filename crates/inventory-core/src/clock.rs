//! # Clock
//!
//! Where "today" comes from.
//!
//! Product timestamps are calendar dates. The catalog asks a [`Clock`] for
//! the current date instead of reading the system time itself, so tests can
//! pin or advance the date. The system-backed clock lives in
//! `inventory-store`; this crate never reads the system time.

use std::sync::atomic::{AtomicI32, Ordering};

use chrono::{Datelike, Days, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// A clock that only moves when told to.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use inventory_core::{Clock, FixedClock};
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// let clock = FixedClock::new(start);
/// clock.advance_days(1);
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// ```
#[derive(Debug)]
pub struct FixedClock {
    /// Days since the Common Era epoch (see `NaiveDate::num_days_from_ce`).
    days_from_ce: AtomicI32,
}

impl FixedClock {
    /// Creates a clock stopped at `date`.
    pub fn new(date: NaiveDate) -> Self {
        FixedClock {
            days_from_ce: AtomicI32::new(date.num_days_from_ce()),
        }
    }

    /// Moves the clock to `date`.
    pub fn set(&self, date: NaiveDate) {
        self.days_from_ce
            .store(date.num_days_from_ce(), Ordering::SeqCst);
    }

    /// Moves the clock forward by `days`.
    pub fn advance_days(&self, days: u64) {
        let next = self
            .today()
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        let days = self.days_from_ce.load(Ordering::SeqCst);
        NaiveDate::from_num_days_from_ce_opt(days).unwrap_or(NaiveDate::MAX)
    }
}
