pub mod config;
pub mod expiry;
pub mod format;
pub mod presentation;
pub mod price_fetcher;
pub mod scheduler;
pub mod server;
pub mod spawner;
pub mod thresholds;
