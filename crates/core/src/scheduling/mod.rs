//! Scheduled content management
//!
//! The store is the single authoritative in-memory collection backing
//! every calendar read; the service wraps each mutation in the
//! optimistic apply / remote call / reconcile-or-rollback protocol.

pub mod classify;
pub mod ports;
pub mod service;
pub mod store;
