//! Yahoo Finance chart API client
//!
//! Fetches one day of price history per call. The chart endpoint needs no
//! credential. Faults are mapped onto `ProviderError`; unknown symbols come
//! back as an upstream error object or an empty result set.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{MarketDataProvider, PricePoint, ProviderError};
use crate::config::ProviderConfig;

pub struct YahooFinanceClient {
    http: reqwest::Client,
    base_url: String,
}

impl YahooFinanceClient {
    /// Build a client from provider configuration.
    pub fn new(config: &ProviderConfig) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceClient {
    async fn fetch_close_history(&self, symbol: &str) -> Result<Vec<PricePoint>, ProviderError> {
        let url = format!("{}/v8/finance/chart/{symbol}", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("range", "1d"), ("interval", "1d")])
            .send()
            .await?;

        // Unknown symbols arrive as a non-2xx status with an error object in
        // the body, so the body is decoded regardless of status.
        let body: ChartResponse = response.json().await?;
        extract_points(body)
    }
}

// Wire format of the chart endpoint, reduced to the fields used here.

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    /// Close series; entries are null for intervals without a trade.
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Flatten a decoded chart payload into close-price points.
///
/// Null closes are skipped; an empty or missing result set yields an empty
/// list so the caller can distinguish "no data" from a fault.
fn extract_points(body: ChartResponse) -> Result<Vec<PricePoint>, ProviderError> {
    if let Some(error) = body.chart.error {
        return Err(ProviderError::Upstream {
            code: error.code,
            description: error.description,
        });
    }

    let Some(result) = body
        .chart
        .result
        .and_then(|results| results.into_iter().next())
    else {
        return Ok(Vec::new());
    };

    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Ok(Vec::new());
    };

    let mut points = Vec::new();
    for (seconds, close) in result.timestamp.iter().zip(quote.close) {
        let Some(close) = close else { continue };
        let Some(timestamp) = DateTime::<Utc>::from_timestamp(*seconds, 0) else {
            return Err(ProviderError::MalformedResponse(format!(
                "timestamp {seconds} out of range"
            )));
        };
        points.push(PricePoint { timestamp, close });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> ChartResponse {
        serde_json::from_str(json).expect("fixture should decode")
    }

    #[test]
    fn test_extract_happy_path() {
        let body = decode(
            r#"{"chart":{"result":[{"timestamp":[1700000000,1700003600],
                "indicators":{"quote":[{"close":[189.37,190.04]}]}}],"error":null}}"#,
        );
        let points = extract_points(body).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].close, 190.04);
        assert_eq!(points[0].timestamp.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_extract_skips_null_closes() {
        let body = decode(
            r#"{"chart":{"result":[{"timestamp":[1700000000,1700003600,1700007200],
                "indicators":{"quote":[{"close":[null,188.5,null]}]}}],"error":null}}"#,
        );
        let points = extract_points(body).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].close, 188.5);
    }

    #[test]
    fn test_extract_upstream_error() {
        let body = decode(
            r#"{"chart":{"result":null,"error":{"code":"Not Found",
                "description":"No data found, symbol may be delisted"}}}"#,
        );
        let error = extract_points(body).unwrap_err();
        assert_eq!(
            error.to_string(),
            "provider error: Not Found - No data found, symbol may be delisted"
        );
    }

    #[test]
    fn test_extract_empty_result_is_no_data() {
        let body = decode(r#"{"chart":{"result":[],"error":null}}"#);
        assert!(extract_points(body).unwrap().is_empty());

        let body = decode(
            r#"{"chart":{"result":[{"timestamp":[],"indicators":{"quote":[]}}],"error":null}}"#,
        );
        assert!(extract_points(body).unwrap().is_empty());
    }
}
