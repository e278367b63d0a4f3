//! # Cadence Core
//!
//! Pure scheduling-engine logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Calendar range calculation, bucketing, and view navigation
//! - The in-memory scheduled item store
//! - The optimistic mutation / reconciliation service
//! - Port interfaces (traits) for the remote service, clock, and
//!   user notification boundary
//!
//! ## Architecture Principles
//! - Only depends on `cadence-domain`
//! - No HTTP or platform code; all I/O via traits
//! - Pure, testable business logic

pub mod calendar;
pub mod scheduling;

pub use calendar::bucket::{bucket_by_date, bucket_by_hour};
pub use calendar::navigation::CalendarNavigator;
pub use calendar::range::compute_range;
pub use scheduling::classify::{classify, Presentation, PriorityClass, StatusClass};
pub use scheduling::ports::{Clock, Notice, SchedulingApi, UserNotifier};
pub use scheduling::service::SchedulingService;
pub use scheduling::store::ScheduledItemStore;
