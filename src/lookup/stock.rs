//! Stock price lookup module
//!
//! Delegates to the market data provider for the latest closing price. Every
//! provider fault is folded into the error envelope; nothing propagates past
//! this boundary.

use serde::Serialize;

use super::envelope::Envelope;
use crate::market::MarketDataProvider;

/// Latest closing price for a ticker symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
}

/// Fetch the latest closing price for a ticker symbol.
///
/// The symbol is passed to the provider and echoed back with its original
/// casing. Every call re-fetches; there is no caching and no retry.
pub async fn stock_price(provider: &dyn MarketDataProvider, symbol: &str) -> Envelope<StockQuote> {
    match provider.fetch_close_history(symbol).await {
        Ok(points) => match points.last() {
            Some(latest) => Envelope::success(StockQuote {
                symbol: symbol.to_string(),
                price: latest.close,
            }),
            None => Envelope::error(format!("No data available for stock symbol '{symbol}'.")),
        },
        Err(fault) => Envelope::error(format!(
            "Error retrieving stock price for {symbol}: {fault}."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{PricePoint, ProviderError};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    /// Canned provider: either a fixed close history or a fixed fault.
    struct FakeProvider {
        outcome: Result<Vec<f64>, &'static str>,
    }

    #[async_trait]
    impl MarketDataProvider for FakeProvider {
        async fn fetch_close_history(
            &self,
            _symbol: &str,
        ) -> Result<Vec<PricePoint>, ProviderError> {
            match &self.outcome {
                Ok(closes) => Ok(closes
                    .iter()
                    .enumerate()
                    .map(|(i, close)| PricePoint {
                        timestamp: DateTime::<Utc>::from_timestamp(1_700_000_000 + i as i64, 0)
                            .unwrap(),
                        close: *close,
                    })
                    .collect()),
                Err(message) => Err(ProviderError::MalformedResponse((*message).to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_latest_close_wins() {
        let provider = FakeProvider {
            outcome: Ok(vec![101.5, 102.25, 99.75]),
        };
        let envelope = stock_price(&provider, "AAPL").await;
        assert_eq!(
            envelope,
            Envelope::success(StockQuote {
                symbol: "AAPL".to_string(),
                price: 99.75,
            })
        );
    }

    #[tokio::test]
    async fn test_symbol_echoed_verbatim() {
        let provider = FakeProvider {
            outcome: Ok(vec![10.0]),
        };
        let Envelope::Success { payload } = stock_price(&provider, "aapl").await else {
            panic!("expected success");
        };
        assert_eq!(payload.symbol, "aapl");
    }

    #[tokio::test]
    async fn test_empty_history_is_no_data() {
        let provider = FakeProvider {
            outcome: Ok(Vec::new()),
        };
        let envelope = stock_price(&provider, "NOSUCH").await;
        assert_eq!(
            envelope.error_message(),
            Some("No data available for stock symbol 'NOSUCH'.")
        );
    }

    #[tokio::test]
    async fn test_provider_fault_becomes_error_envelope() {
        let provider = FakeProvider {
            outcome: Err("unexpected payload"),
        };
        let envelope = stock_price(&provider, "GOOG").await;
        assert_eq!(
            envelope.error_message(),
            Some("Error retrieving stock price for GOOG: malformed response: unexpected payload.")
        );
    }
}
