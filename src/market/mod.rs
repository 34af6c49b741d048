//! Market data provider module
//!
//! Abstraction over the external source of stock price history. The stock
//! lookup depends on the trait, so tests run against a fake provider without
//! network access.

pub mod yahoo;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// A single close-price observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Faults a provider call can produce.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("provider error: {code} - {description}")]
    Upstream { code: String, description: String },
}

/// External source of daily close prices.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the most recent trading day's close history for a symbol.
    ///
    /// An unknown or delisted symbol yields an empty list, not an error;
    /// errors are reserved for faults of the provider call itself.
    async fn fetch_close_history(&self, symbol: &str) -> Result<Vec<PricePoint>, ProviderError>;
}
