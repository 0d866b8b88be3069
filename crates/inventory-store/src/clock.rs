//! System-backed [`Clock`] for the running service.

use chrono::{Local, NaiveDate};
use inventory_core::Clock;

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
