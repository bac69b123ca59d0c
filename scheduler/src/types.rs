//! Shared types used by the monitor scheduler.

use std::time::Duration;

use tokio::sync::mpsc::{Receiver, Sender};

use monitor::types::DiagnosticEvent;

/// Configuration knobs for the polling driver.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Time between two validation cycles.
    pub poll_every: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_every: Duration::from_secs(60),
        }
    }
}

/// Convenience aliases for the diagnostic sink queue.
///
/// The sink receives every DiagnosticEvent the validator emits, in
/// emission order.
pub type DiagnosticSender = Sender<DiagnosticEvent>;
pub type DiagnosticReceiver = Receiver<DiagnosticEvent>;
