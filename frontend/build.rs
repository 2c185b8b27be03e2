use dotenvy::{dotenv, from_filename};

const CONFIG_KEYS: [&str; 7] = [
  "API_URL",
  "API_KEY",
  "TOKEN_ADDRESS",
  "TOTAL_SUPPLY",
  "UPDATE_INTERVAL_MS",
  "MARKET_CAP_THRESHOLD",
  "MAX_IMAGE_LEVEL",
];

fn main() {
  // Tell Cargo that if the env files change, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");
  println!("cargo::rerun-if-changed=.env.example");

  if dotenv().is_err() {
    println!("cargo::warning=no .env file found, using .env.example defaults");
    from_filename(".env.example").expect("failed to load .env or .env.example file");
  }

  for key in CONFIG_KEYS {
    if let Ok(value) = std::env::var(key) {
      println!("cargo::rustc-env={}={}", key, value);
    } else {
      panic!("{} must be set at compile time!", key);
    }
  }
}
