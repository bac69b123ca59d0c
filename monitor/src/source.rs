use async_trait::async_trait;
use thiserror::Error;

use crate::types::PriceSnapshot;

/// Failure modes a price source may surface.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A collaborator that produces the current multi-exchange snapshot.
///
/// Implementations own all transport concerns (HTTP, caching, timeouts).
/// The validator only consumes the finished snapshot and treats any error
/// as fatal for that call.
#[async_trait]
pub trait PriceSource: Send + Sync + 'static {
    async fn current_prices(&self) -> Result<PriceSnapshot, SourceError>;
}
