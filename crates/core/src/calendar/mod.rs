//! Calendar view computation
//!
//! Pure functions turning an anchor date and view granularity into the
//! rendered date range, plus the bucketing that assigns scheduled items
//! to cells, and the navigation state machine that owns the anchor.

pub mod bucket;
pub mod navigation;
pub mod range;
