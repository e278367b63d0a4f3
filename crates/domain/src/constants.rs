//! Application constants
//!
//! Centralized location for the domain-level constants and policy
//! defaults used throughout the scheduling engine.

use chrono::Weekday;

// Calendar policy defaults. Week start and the duplicate offset are
// configuration, not literals; these are only the defaults.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Mon;
pub const DEFAULT_DUPLICATE_OFFSET_HOURS: i64 = 24;

// Id policy: client-generated ids carry this prefix until the server
// assigns a permanent one.
pub const LOCAL_ID_PREFIX: &str = "local-";

// Title suffix appended when duplicating an item.
pub const COPY_TITLE_SUFFIX: &str = " (Copy)";

// Remote API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_MAX_ATTEMPTS: usize = 3;
