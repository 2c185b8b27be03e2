use dioxus::logger::tracing::debug;

use super::{config::AppConfig, server::{AppError, PriceResponse}};

/// Market cap derived from the reported unit price and the fixed token supply.
pub fn capitalization(usd_price: f64, total_supply: f64) -> f64 {
  usd_price * total_supply
}

/// Pulls the numeric `usdPrice` out of a price API body.
pub fn parse_price_body(body: &str) -> Result<f64, AppError> {
  let resp = serde_json::from_str::<PriceResponse>(body).map_err(|e| AppError::InvalidFormat(e.to_string()))?;
  resp.usd_price().ok_or_else(|| AppError::InvalidFormat("usdPrice is missing or not a number".to_string()))
}

// a request that could not even be built (bad url) never reached the network
fn request_error(e: reqwest::Error) -> AppError {
  if e.is_builder() {
    AppError::Unknown(e.to_string())
  } else {
    AppError::Network(e.to_string())
  }
}

#[derive(Clone)]
pub struct PriceFetcher {
  client: reqwest::Client,
  api_url: String,
  api_key: String,
  total_supply: f64
}

impl PriceFetcher {
  pub fn new(api_url: &str, api_key: &str, total_supply: f64) -> Self {
    PriceFetcher {
      client: reqwest::Client::new(),
      api_url: api_url.to_string(),
      api_key: api_key.to_string(),
      total_supply
    }
  }

  pub fn from_config(config: &AppConfig) -> Self {
    Self::new(&config.api_url, &config.api_key, config.total_supply)
  }

  // Single attempt. Retrying is left to the polling schedule.
  pub async fn fetch(&self) -> Result<f64, AppError> {
    let resp = self.client.get(&self.api_url)
      .header("accept", "application/json")
      .header("X-API-Key", &self.api_key)
      .send()
      .await
      .map_err(request_error)?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| AppError::Network(e.to_string()))?;

    if !status.is_success() {
      return Err(AppError::HttpStatus(status.as_u16(), body));
    }

    let usd_price = parse_price_body(&body)?;
    let cap = capitalization(usd_price, self.total_supply);
    debug!("price update: usd {} -> market cap {}", usd_price, cap);
    Ok(cap)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reference_price_gives_sixty() {
    let price = parse_price_body(r#"{"usdPrice": 0.00006, "exchangeName": "Raydium"}"#).unwrap();
    assert_eq!(capitalization(price, 1_000_000.0), 60.0);
  }

  #[test]
  fn missing_price_is_invalid_format() {
    let err = parse_price_body(r#"{"tokenAddress": "0xabc"}"#).unwrap_err();
    assert!(matches!(err, AppError::InvalidFormat(_)));
  }

  #[test]
  fn null_or_string_price_is_invalid_format() {
    assert!(matches!(parse_price_body(r#"{"usdPrice": null}"#), Err(AppError::InvalidFormat(_))));
    assert!(matches!(parse_price_body(r#"{"usdPrice": "0.2"}"#), Err(AppError::InvalidFormat(_))));
  }

  #[test]
  fn non_json_body_is_invalid_format() {
    assert!(matches!(parse_price_body("<html>gateway</html>"), Err(AppError::InvalidFormat(_))));
    assert!(matches!(parse_price_body("[1, 2]"), Err(AppError::InvalidFormat(_))));
  }
}
