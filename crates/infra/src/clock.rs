//! System clock adapter

use cadence_core::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock implementation of the core's `Clock` port
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
