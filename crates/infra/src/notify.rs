//! Notification adapter
//!
//! Default `UserNotifier` that forwards notices to the tracing
//! pipeline. The host application swaps in its own toast-backed
//! implementation.

use cadence_core::{Notice, UserNotifier};
use tracing::{error, info, warn};

/// Logs notices instead of rendering them
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl UserNotifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match &notice {
            Notice::Success(message) => info!(%message, "notice"),
            Notice::Warning(message) => warn!(%message, "notice"),
            Notice::Error(message) => error!(%message, "notice"),
        }
    }
}
