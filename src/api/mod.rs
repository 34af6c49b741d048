// API module entry
// JSON endpoints backed by the lookup core

mod query;
mod response;

use std::collections::HashMap;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::config::AppState;
use crate::logger;
use crate::lookup::{self, Envelope};

/// Dispatch an /api request to its endpoint handler
///
/// Every endpoint answers HTTP 200 with an envelope body; the envelope itself
/// carries the failure signal. Unknown paths get a JSON 404.
pub async fn dispatch(
    path: &str,
    raw_query: Option<&str>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let params = query::parse(raw_query);

    match path {
        "/api/airbnb" => airbnb(path, &params),
        "/api/time" => time(path, &params),
        "/api/weather" => weather(path, &params),
        "/api/stock" => stock(path, &params, state).await,
        _ => {
            logger::log_api_request("GET", path, 404);
            response::not_found()
        }
    }
}

fn airbnb(path: &str, params: &HashMap<String, String>) -> Response<Full<Bytes>> {
    let Some(city) = query::non_empty(params, "city") else {
        return missing_parameter(path, "City parameter is required");
    };
    envelope_response(path, &lookup::find_listings(city))
}

fn time(path: &str, params: &HashMap<String, String>) -> Response<Full<Bytes>> {
    let Some(city) = query::non_empty(params, "city") else {
        return missing_parameter(path, "City parameter is required");
    };
    envelope_response(path, &lookup::current_time(city))
}

fn weather(path: &str, params: &HashMap<String, String>) -> Response<Full<Bytes>> {
    let Some(city) = query::non_empty(params, "city") else {
        return missing_parameter(path, "City parameter is required");
    };
    envelope_response(path, &lookup::current_weather(city))
}

async fn stock(
    path: &str,
    params: &HashMap<String, String>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let Some(symbol) = query::non_empty(params, "symbol") else {
        return missing_parameter(path, "Stock symbol parameter is required");
    };
    envelope_response(path, &lookup::stock_price(state.provider.as_ref(), symbol).await)
}

/// Serialize a lookup envelope; success and error both travel as HTTP 200
fn envelope_response<T: Serialize>(path: &str, envelope: &Envelope<T>) -> Response<Full<Bytes>> {
    logger::log_api_request("GET", path, 200);
    response::json_response(StatusCode::OK, envelope)
}

/// Parameter missing or empty: rejected before the lookup core is invoked
fn missing_parameter(path: &str, message: &str) -> Response<Full<Bytes>> {
    logger::log_api_request("GET", path, 200);
    response::json_response(
        StatusCode::OK,
        &serde_json::json!({
            "status": "error",
            "error_message": message,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::market::{MarketDataProvider, PricePoint, ProviderError};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use http_body_util::BodyExt;
    use std::sync::Arc;

    /// Provider that panics when reached: proves the dispatcher
    /// short-circuits before the core runs.
    struct UnreachableProvider;

    #[async_trait]
    impl MarketDataProvider for UnreachableProvider {
        async fn fetch_close_history(
            &self,
            _symbol: &str,
        ) -> Result<Vec<PricePoint>, ProviderError> {
            unreachable!("dispatcher must reject the request before the provider is called");
        }
    }

    struct FixedProvider {
        closes: Vec<f64>,
    }

    #[async_trait]
    impl MarketDataProvider for FixedProvider {
        async fn fetch_close_history(
            &self,
            _symbol: &str,
        ) -> Result<Vec<PricePoint>, ProviderError> {
            Ok(self
                .closes
                .iter()
                .enumerate()
                .map(|(i, close)| PricePoint {
                    timestamp: DateTime::<Utc>::from_timestamp(1_700_000_000 + i as i64, 0)
                        .unwrap(),
                    close: *close,
                })
                .collect())
        }
    }

    fn test_state(provider: Arc<dyn MarketDataProvider>) -> AppState {
        let config = Config::load_from("does-not-exist").expect("defaults should load");
        AppState::new(config, provider)
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).expect("API responses are JSON")
    }

    #[tokio::test]
    async fn test_weather_endpoint_success() {
        let state = test_state(Arc::new(UnreachableProvider));
        let response = dispatch("/api/weather", Some("city=london"), &state).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "status": "success",
                "report": "The weather in London is Cloudy, 16°C (61°F)."
            })
        );
    }

    #[tokio::test]
    async fn test_airbnb_endpoint_lists_city() {
        let state = test_state(Arc::new(UnreachableProvider));
        let response = dispatch("/api/airbnb", Some("city=new+york"), &state).await;
        let json = body_json(response).await;
        assert_eq!(json["status"], "success");
        assert_eq!(json["listings"].as_array().unwrap().len(), 2);
        assert_eq!(json["listings"][0]["title"], "Cozy Studio in Manhattan");
    }

    #[tokio::test]
    async fn test_missing_city_short_circuits() {
        let state = test_state(Arc::new(UnreachableProvider));
        for raw_query in [None, Some(""), Some("city="), Some("other=x")] {
            let response = dispatch("/api/time", raw_query, &state).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({
                    "status": "error",
                    "error_message": "City parameter is required"
                })
            );
        }
    }

    #[tokio::test]
    async fn test_missing_symbol_never_reaches_provider() {
        let state = test_state(Arc::new(UnreachableProvider));
        for raw_query in [None, Some("symbol=")] {
            let response = dispatch("/api/stock", raw_query, &state).await;
            assert_eq!(
                body_json(response).await,
                serde_json::json!({
                    "status": "error",
                    "error_message": "Stock symbol parameter is required"
                })
            );
        }
    }

    #[tokio::test]
    async fn test_stock_endpoint_success() {
        let state = test_state(Arc::new(FixedProvider {
            closes: vec![187.2, 189.5],
        }));
        let response = dispatch("/api/stock", Some("symbol=AAPL"), &state).await;
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "status": "success",
                "symbol": "AAPL",
                "price": 189.5
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_404() {
        let state = test_state(Arc::new(UnreachableProvider));
        let response = dispatch("/api/nope", None, &state).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
