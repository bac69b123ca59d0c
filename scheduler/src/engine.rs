//! The polling driver.
//!
//! On each tick it runs one validation cycle:
//!   1. Asks the validator for a verdict on the source's current snapshot.
//!   2. Logs every diagnostic through tracing at the mapped level.
//!   3. Forwards every diagnostic to the sink queue, in emission order.
//!
//! Rejected snapshots are a per-cycle outcome, not a loop fault: the
//! ticker keeps running and retry policy stays with the caller.

use std::time::Duration;

use anyhow::Result;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{Instrument, error, info, warn};

use common::logger::{TraceId, root_span, warn_if_slow};
use monitor::source::PriceSource;
use monitor::types::{DiagnosticEvent, Severity, ValidationReport};
use monitor::validator::Validator;

use super::types::{DiagnosticSender, MonitorConfig};

/// A validation cycle is in-memory work plus one source fetch; anything
/// slower than this deserves a warning.
const SLOW_CYCLE: Duration = Duration::from_secs(5);

/// Run validation cycles forever on the configured cadence.
pub async fn run_monitor_loop<S: PriceSource>(
    cfg: MonitorConfig,
    mut validator: Validator<S>,
    diag_tx: DiagnosticSender,
) -> Result<()> {
    let mut ticker = interval(cfg.poll_every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        every_ms = cfg.poll_every.as_millis() as u64,
        "price monitor loop started"
    );

    loop {
        ticker.tick().await;
        run_cycle(&mut validator, &diag_tx).await;
    }
}

/// Run one validation cycle and deliver its diagnostics.
pub async fn run_cycle<S: PriceSource>(
    validator: &mut Validator<S>,
    diag_tx: &DiagnosticSender,
) -> ValidationReport {
    let cycle_id = TraceId::new();
    let span = root_span("validation_cycle", &cycle_id);

    let report = warn_if_slow("validate", SLOW_CYCLE, validator.validate())
        .instrument(span)
        .await;

    for event in &report.events {
        log_event(event);

        if diag_tx.send(event.clone()).await.is_err() {
            warn!(
                severity = ?event.severity,
                "diagnostic sink closed, event not delivered"
            );
        }
    }

    if !report.accepted {
        warn!(cycle = %cycle_id, "snapshot rejected");
    }

    report
}

fn log_event(event: &DiagnosticEvent) {
    match event.severity {
        Severity::Info => info!(price = ?event.price, "{}", event.message),
        Severity::Warn => warn!(price = ?event.price, "{}", event.message),
        Severity::Critical | Severity::Error => {
            error!(price = ?event.price, "{}", event.message)
        }
    }
}
