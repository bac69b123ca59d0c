use serde::{Deserialize, Serialize};

/// One exchange's price reading within a polling cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    pub exchange: String,
    pub price: f64,
    pub ts_ms: u64,
}

/// All quotes gathered for one polling cycle.
///
/// Quotes keep the order the source produced them in; the first quote is
/// the representative one for validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    quotes: Vec<ExchangeQuote>,
}

impl PriceSnapshot {
    pub fn new(quotes: Vec<ExchangeQuote>) -> Self {
        Self { quotes }
    }

    /// The representative quote: first in source order.
    pub fn first(&self) -> Option<&ExchangeQuote> {
        self.quotes.first()
    }

    pub fn get(&self, exchange: &str) -> Option<&ExchangeQuote> {
        self.quotes.iter().find(|q| q.exchange == exchange)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExchangeQuote> {
        self.quotes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }
}

/// How serious a diagnostic event is.
///
/// `Critical` and `Error` always accompany a rejected snapshot; `Warn` and
/// `Info` never change the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Info,
    Warn,
    Critical,
    Error,
}

/// A single observation produced while validating one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEvent {
    pub severity: Severity,
    pub message: String,
    pub price: Option<f64>,
}

impl DiagnosticEvent {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            price: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

/// Outcome of one validation pass: the verdict plus every diagnostic
/// emitted along the way, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub accepted: bool,
    pub events: Vec<DiagnosticEvent>,
}

impl ValidationReport {
    pub fn accept(events: Vec<DiagnosticEvent>) -> Self {
        Self {
            accepted: true,
            events,
        }
    }

    pub fn reject(events: Vec<DiagnosticEvent>) -> Self {
        Self {
            accepted: false,
            events,
        }
    }
}
