use std::fmt;
use serde::Deserialize;

/* Price API Responses */
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct NativePrice {
  pub value: String,
  pub symbol: String,
  pub name: String,
  pub decimals: u32
}

// Moralis token price payload. Only `usdPrice` is needed, the rest is kept for logging.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
  pub token_address: Option<String>,
  pub pair_address: Option<String>,
  pub exchange_name: Option<String>,
  pub exchange_address: Option<String>,
  pub native_price: Option<NativePrice>,
  // kept untyped so a string or null price is reported as a format error, not a parse error
  pub usd_price: Option<serde_json::Value>
}

impl PriceResponse {
  pub fn usd_price(&self) -> Option<f64> {
    self.usd_price.as_ref().and_then(|v| v.as_f64())
  }
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  HttpStatus(u16, String),
  InvalidFormat(String),
  Network(String),
  ConfigError(String),
  ClipboardError(String),
  Unknown(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::HttpStatus(code, body) => write!(f, "API Error: {} - {}", code, body),
      AppError::InvalidFormat(_) => write!(f, "Invalid data format from API"),
      AppError::Network(msg) => write!(f, "Network error: {}", msg),
      AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
      AppError::ClipboardError(msg) => write!(f, "Clipboard error: {}", msg),
      AppError::Unknown(_) => write!(f, "An unknown error occurred."),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn http_status_message_carries_code_and_body() {
    let err = AppError::HttpStatus(500, "upstream down".to_string());
    assert_eq!(err.to_string(), "API Error: 500 - upstream down");
  }

  #[test]
  fn format_and_unknown_errors_hide_details() {
    assert_eq!(AppError::InvalidFormat("missing usdPrice".into()).to_string(), "Invalid data format from API");
    assert_eq!(AppError::Unknown("??".into()).to_string(), "An unknown error occurred.");
  }

  #[test]
  fn full_moralis_payload_deserializes() {
    let body = r#"{
      "tokenAddress": "0xabc",
      "pairAddress": "0xdef",
      "exchangeName": "Raydium",
      "exchangeAddress": "0x123",
      "nativePrice": { "value": "1000", "symbol": "SOL", "name": "Solana", "decimals": 9 },
      "usdPrice": 0.00006
    }"#;
    let resp: PriceResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.exchange_name.as_deref(), Some("Raydium"));
    assert_eq!(resp.native_price.as_ref().map(|p| p.decimals), Some(9));
    assert_eq!(resp.usd_price(), Some(0.00006));
  }

  #[test]
  fn string_price_is_not_numeric() {
    let resp: PriceResponse = serde_json::from_str(r#"{"usdPrice": "0.1"}"#).unwrap();
    assert_eq!(resp.usd_price(), None);
  }
}
