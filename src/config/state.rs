// Application state module
// Startup configuration plus the market data provider shared across requests

use std::sync::Arc;

use crate::market::MarketDataProvider;

use super::types::Config;

/// Application state
///
/// Everything here is read-only after startup; request handlers share it
/// without locking.
pub struct AppState {
    pub config: Config,
    pub provider: Arc<dyn MarketDataProvider>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { config, provider }
    }
}
