use std::time::Duration;

use super::server::AppError;

pub const API_URL: &str = env!("API_URL");
pub const API_KEY: &str = env!("API_KEY");
pub const TOKEN_ADDRESS: &str = env!("TOKEN_ADDRESS");
pub const TOTAL_SUPPLY: &str = env!("TOTAL_SUPPLY");
pub const UPDATE_INTERVAL_MS: &str = env!("UPDATE_INTERVAL_MS");
pub const MARKET_CAP_THRESHOLD: &str = env!("MARKET_CAP_THRESHOLD");
pub const MAX_IMAGE_LEVEL: &str = env!("MAX_IMAGE_LEVEL");

/// Unparsed values as they were baked in by `build.rs`.
pub struct RawConfig<'a> {
  pub api_url: &'a str,
  pub api_key: &'a str,
  pub token_address: &'a str,
  pub total_supply: &'a str,
  pub update_interval_ms: &'a str,
  pub market_cap_threshold: &'a str,
  pub max_image_level: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub api_url: String,
  pub api_key: String,
  pub token_address: String,
  pub total_supply: f64,
  pub update_interval: Duration,
  pub market_cap_threshold: f64,
  pub max_image_level: u32,
}

impl AppConfig {
  pub fn from_build_env() -> Result<Self, AppError> {
    Self::parse(RawConfig {
      api_url: API_URL,
      api_key: API_KEY,
      token_address: TOKEN_ADDRESS,
      total_supply: TOTAL_SUPPLY,
      update_interval_ms: UPDATE_INTERVAL_MS,
      market_cap_threshold: MARKET_CAP_THRESHOLD,
      max_image_level: MAX_IMAGE_LEVEL,
    })
  }

  pub fn parse(raw: RawConfig<'_>) -> Result<Self, AppError> {
    let api_url = non_empty("API_URL", raw.api_url)?;
    let api_key = non_empty("API_KEY", raw.api_key)?;
    let token_address = non_empty("TOKEN_ADDRESS", raw.token_address)?;

    let total_supply = positive_f64("TOTAL_SUPPLY", raw.total_supply)?;
    let market_cap_threshold = positive_f64("MARKET_CAP_THRESHOLD", raw.market_cap_threshold)?;

    let interval_ms = raw.update_interval_ms.trim().parse::<u64>()
      .map_err(|e| AppError::ConfigError(format!("UPDATE_INTERVAL_MS: {}", e)))?;
    if interval_ms == 0 {
      return Err(AppError::ConfigError("UPDATE_INTERVAL_MS must be greater than zero".to_string()));
    }

    let max_image_level = raw.max_image_level.trim().parse::<u32>()
      .map_err(|e| AppError::ConfigError(format!("MAX_IMAGE_LEVEL: {}", e)))?;
    if max_image_level == 0 {
      return Err(AppError::ConfigError("MAX_IMAGE_LEVEL must be at least 1".to_string()));
    }

    Ok(Self {
      api_url,
      api_key,
      token_address,
      total_supply,
      update_interval: Duration::from_millis(interval_ms),
      market_cap_threshold,
      max_image_level,
    })
  }
}

fn non_empty(key: &str, value: &str) -> Result<String, AppError> {
  let value = value.trim();
  if value.is_empty() {
    return Err(AppError::ConfigError(format!("{} must not be empty", key)));
  }
  Ok(value.to_string())
}

fn positive_f64(key: &str, value: &str) -> Result<f64, AppError> {
  let parsed = value.trim().parse::<f64>().map_err(|e| AppError::ConfigError(format!("{}: {}", key, e)))?;
  if !parsed.is_finite() || parsed <= 0.0 {
    return Err(AppError::ConfigError(format!("{} must be a positive number, got {}", key, value)));
  }
  Ok(parsed)
}
