//! Engine configuration
//!
//! Week-start and the duplicate offset are policy choices, carried as
//! configuration rather than hard-coded literals. The infra config
//! loader produces these structs from environment variables or a file.

use chrono::{Duration, Weekday};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS,
    DEFAULT_DUPLICATE_OFFSET_HOURS, DEFAULT_WEEK_START,
};

/// Remote scheduling service connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL, e.g. "https://api.example.com/v1"
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Total attempts per request (initial try + retries)
    pub max_attempts: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            max_attempts: DEFAULT_API_MAX_ATTEMPTS,
        }
    }
}

/// Calendar and mutation policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPolicy {
    /// First day of the week for week and month grids
    pub week_start: Weekday,
    /// Offset applied to `scheduled_time` when duplicating an item
    pub duplicate_offset_hours: i64,
    /// When the remote service is unreachable, commit created items
    /// locally instead of rolling back. Availability over strict
    /// server consistency; every local commit is logged.
    pub allow_local_commit: bool,
}

impl CalendarPolicy {
    pub fn duplicate_offset(&self) -> Duration {
        Duration::hours(self.duplicate_offset_hours)
    }
}

impl Default for CalendarPolicy {
    fn default() -> Self {
        Self {
            week_start: DEFAULT_WEEK_START,
            duplicate_offset_hours: DEFAULT_DUPLICATE_OFFSET_HOURS,
            allow_local_commit: true,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CadenceConfig {
    pub api: ApiConfig,
    pub calendar: CalendarPolicy,
}
