//! Validator
//!
//! Checks each incoming multi-exchange snapshot before the price may
//! propagate to consumers.
//! Responsibilities:
//!   • Pull the current snapshot from the injected `PriceSource`
//!   • Pick the representative price (first quote in source order)
//!   • Evaluate the rule set in declaration order
//!   • Maintain the rolling history of accepted prices
//!   • Flag abrupt moves against the previous valid price
//!
//! One `validate` call is expected to be in flight at a time per instance;
//! `&mut self` enforces this for a single owner. Wrap the validator in a
//! mutex or a dedicated task if callers overlap.

use common::time::now_ms;

use crate::history::{HistoryBuffer, HistoryEntry};
use crate::rules::{AlertRuleSet, RuleOutcome};
use crate::source::PriceSource;
use crate::types::{DiagnosticEvent, Severity, ValidationReport};

/// Accepted prices may move at most this fraction between consecutive
/// readings before a jump warning is recorded.
pub const MAX_JUMP_RATIO: f64 = 0.20;

/// Mutable validation state carried across calls.
///
/// `last_valid_price`, when present, always equals the price of the most
/// recent entry appended to the history buffer.
#[derive(Debug, Default)]
pub struct MonitorState {
    pub last_valid_price: Option<f64>,
}

pub struct Validator<S> {
    source: S,
    rules: AlertRuleSet,
    history: HistoryBuffer,
    state: MonitorState,
}

impl<S: PriceSource> Validator<S> {
    pub fn new(source: S, rules: AlertRuleSet) -> Self {
        Self {
            source,
            rules,
            history: HistoryBuffer::new(),
            state: MonitorState::default(),
        }
    }

    /// Validate the source's current snapshot.
    ///
    /// Never faults: source failures and bad data are converted into a
    /// rejected report carrying the matching diagnostic. The report's
    /// events preserve emission order.
    pub async fn validate(&mut self) -> ValidationReport {
        let mut events = Vec::new();

        let snapshot = match self.source.current_prices().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                events.push(DiagnosticEvent::new(
                    Severity::Error,
                    format!("price source failure: {err}"),
                ));
                return ValidationReport::reject(events);
            }
        };

        let Some(quote) = snapshot.first() else {
            events.push(DiagnosticEvent::new(
                Severity::Critical,
                "no pricing data available",
            ));
            return ValidationReport::reject(events);
        };

        let price = quote.price;
        if !price.is_finite() || price <= 0.0 {
            events.push(
                DiagnosticEvent::new(Severity::Critical, "invalid price data detected")
                    .with_price(price),
            );
            return ValidationReport::reject(events);
        }

        for rule in self.rules.iter() {
            match rule.check(price) {
                RuleOutcome::Fail => {
                    events.push(
                        DiagnosticEvent::new(Severity::Critical, rule.message())
                            .with_price(price),
                    );
                    return ValidationReport::reject(events);
                }
                RuleOutcome::Warn => {
                    events.push(
                        DiagnosticEvent::new(Severity::Warn, rule.message()).with_price(price),
                    );
                }
                RuleOutcome::Pass => {}
            }
        }

        self.history.push(HistoryEntry {
            price,
            ts_ms: now_ms(),
        });

        if let Some(last) = self.state.last_valid_price {
            let jump = ((price - last) / last).abs();
            if jump > MAX_JUMP_RATIO {
                events.push(
                    DiagnosticEvent::new(
                        Severity::Warn,
                        format!(
                            "price moved {:.1}% since last valid reading ({last} -> {price})",
                            jump * 100.0
                        ),
                    )
                    .with_price(price),
                );
            }
        }

        self.state.last_valid_price = Some(price);
        events.push(
            DiagnosticEvent::new(
                Severity::Info,
                format!("price validated from {}", quote.exchange),
            )
            .with_price(price),
        );

        ValidationReport::accept(events)
    }

    /// Current rolling history, oldest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    /// Price of the most recent accepted snapshot.
    pub fn last_valid_price(&self) -> Option<f64> {
        self.state.last_valid_price
    }
}
