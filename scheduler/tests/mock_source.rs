use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use monitor::source::{PriceSource, SourceError};
use monitor::types::{ExchangeQuote, PriceSnapshot};

pub fn single_quote_snapshot(price: f64) -> PriceSnapshot {
    PriceSnapshot::new(vec![ExchangeQuote {
        exchange: "mock".into(),
        price,
        ts_ms: 0,
    }])
}

/// Source that returns the same price on every call.
pub struct FixedSource {
    price: f64,
}

impl FixedSource {
    pub fn with_price(price: f64) -> Self {
        Self { price }
    }
}

#[async_trait]
impl PriceSource for FixedSource {
    async fn current_prices(&self) -> Result<PriceSnapshot, SourceError> {
        Ok(single_quote_snapshot(self.price))
    }
}

/// Source that pops one scripted price per call.
pub struct ScriptedSource {
    prices: Mutex<VecDeque<f64>>,
}

impl ScriptedSource {
    pub fn new(prices: &[f64]) -> Self {
        Self {
            prices: Mutex::new(prices.iter().copied().collect()),
        }
    }
}

#[async_trait]
impl PriceSource for ScriptedSource {
    async fn current_prices(&self) -> Result<PriceSnapshot, SourceError> {
        let price = self
            .prices
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted");

        Ok(single_quote_snapshot(price))
    }
}

/// Source whose fetch always faults.
pub struct FailingSource;

#[async_trait]
impl PriceSource for FailingSource {
    async fn current_prices(&self) -> Result<PriceSnapshot, SourceError> {
        Err(SourceError::Transport("connection refused".into()))
    }
}
