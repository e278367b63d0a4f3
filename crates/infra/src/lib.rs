//! # Cadence Infra
//!
//! Adapters behind the core's port interfaces:
//! - HTTP client for the remote scheduling service (retry + backoff)
//! - DTO layer for the wire format (camelCase JSON, ISO-8601 times)
//! - Configuration loading from environment variables or files
//! - System clock, tracing-backed notifier, and the sample data set
//!   used when the service is unreachable

pub mod api;
pub mod clock;
pub mod config;
pub mod notify;
pub mod seed;

pub use api::RemoteSchedulingClient;
pub use clock::SystemClock;
pub use notify::TracingNotifier;
