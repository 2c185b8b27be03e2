use std::time::Duration;
use chrono::{DateTime, Datelike, Local, TimeZone};

/// `$1,234.56K`, or `Loading...` before the first price arrives.
pub fn format_market_cap(cap: Option<f64>) -> String {
  match cap {
    Some(c) => format!("${}K", group_thousands(c)),
    None => "Loading...".to_string()
  }
}

// en-US grouping with exactly two decimals
fn group_thousands(value: f64) -> String {
  let fixed = format!("{:.2}", value.abs());
  let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (idx, ch) in int_part.chars().enumerate() {
    if idx > 0 && (int_part.len() - idx) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }

  let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
  format!("{}{}.{}", sign, grouped, frac_part)
}

pub fn refresh_note(interval: Duration) -> String {
  let secs = interval.as_secs_f64();
  if secs.fract() == 0.0 {
    format!("Data refreshed every {} seconds, with a few secs delay.", secs as u64)
  } else {
    format!("Data refreshed every {:.1} seconds, with a few secs delay.", secs)
  }
}

pub fn current_year() -> i32 {
  calendar_year(&Local::now())
}

fn calendar_year<Tz: TimeZone>(at: &DateTime<Tz>) -> i32 {
  at.year()
}
