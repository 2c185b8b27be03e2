/* Market cap -> cosmetic state. Everything here is a pure function of the latest cap. */

/// Caps at or above this multiple of the threshold switch click bursts to the intense variant.
pub const INTENSE_THRESHOLD_MULTIPLE: f64 = 5.0;
/// Headline figure gets the animated shine from here on.
pub const SHINE_FROM_CAP: f64 = 300.0;

const ROCKET_MAX_WEIGHT: f64 = 20.0;
const ROCKET_WEIGHT_STEP: f64 = 3.0;
const CASH_BASE_WEIGHT: f64 = 20.0;
const CASH_MAX_WEIGHT: f64 = 300.0;
const WEIGHT_BAND: f64 = 15.0;
const CASH_FROM_CAP: f64 = 90.0;
const CASH_SATURATES_AT: f64 = 300.0;
const SPEEDUP_FROM_CAP: f64 = 300.0;
const SPEEDUP_FULL_AT: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
  Loading,
  Red,
  Orange,
  Green,
  Gold,
  Platinum,
  Diamond,
  DiamondShine,
}

// [low, high) bands, lowest first
const TIER_BANDS: [(f64, ColorTier); 6] = [
  (60.0, ColorTier::Red),
  (90.0, ColorTier::Orange),
  (180.0, ColorTier::Green),
  (300.0, ColorTier::Gold),
  (500.0, ColorTier::Platinum),
  (1_000_000.0, ColorTier::Diamond),
];

impl ColorTier {
  pub fn from_cap(cap: Option<f64>) -> Self {
    let Some(cap) = cap else {
      return ColorTier::Loading;
    };
    TIER_BANDS.iter()
      .find(|(upper, _)| cap < *upper)
      .map(|(_, tier)| *tier)
      .unwrap_or(ColorTier::DiamondShine)
  }

  pub fn name(&self) -> &'static str {
    match self {
      ColorTier::Loading => "loading",
      ColorTier::Red => "red",
      ColorTier::Orange => "orange",
      ColorTier::Green => "green",
      ColorTier::Gold => "gold",
      ColorTier::Platinum => "platinum",
      ColorTier::Diamond => "diamond",
      ColorTier::DiamondShine => "diamond-shine",
    }
  }

  /// CSS color or gradient for the tier.
  pub fn paint(&self) -> &'static str {
    match self {
      ColorTier::Loading => "#aaa",
      ColorTier::Red => "#e3342f",
      ColorTier::Orange => "#f59e42",
      ColorTier::Green => "#22c55e",
      ColorTier::Gold => "gold",
      ColorTier::Platinum => "linear-gradient(90deg, #b8b8b8, #e5e4e2, #b8b8b8)",
      ColorTier::Diamond => "linear-gradient(90deg, #00e6e6, #b9f2ff, #fff, #00e6e6)",
      ColorTier::DiamondShine => "linear-gradient(90deg, #00e6e6, #b9f2ff, #fff, #00e6e6, #b9f2ff 90%)",
    }
  }

  pub fn is_gradient(&self) -> bool {
    matches!(self, ColorTier::Platinum | ColorTier::Diamond | ColorTier::DiamondShine)
  }

  /// Inline style that paints text with the tier. Gradients are clipped to the glyphs.
  pub fn text_style(&self) -> String {
    if self.is_gradient() {
      format!(
        "background: {}; -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;",
        self.paint()
      )
    } else {
      format!("color: {};", self.paint())
    }
  }
}

pub fn is_shiny(cap: Option<f64>) -> bool {
  cap.is_some_and(|c| c >= SHINE_FROM_CAP)
}

pub fn is_intense(cap: Option<f64>, threshold: f64) -> bool {
  cap.is_some_and(|c| c >= INTENSE_THRESHOLD_MULTIPLE * threshold)
}

/// `floor(cap > T ? cap / T : 1) + 1`, so any cap up to the threshold sits at level 2.
pub fn evolution_level(cap: f64, threshold: f64) -> u32 {
  let ratio = if cap > threshold { cap / threshold } else { 1.0 };
  // `as` saturates, NaN lands on 0
  (ratio.floor() as u32).saturating_add(1).max(1)
}

/// Zero-based illustration index. Levels past the last illustration reuse it.
pub fn image_index(level: u32, max_level: u32) -> usize {
  level.clamp(1, max_level.max(1)) as usize - 1
}

pub fn rocket_spawn_weight(cap: Option<f64>) -> u32 {
  match cap {
    Some(c) if c < CASH_FROM_CAP => {
      let band = (c / WEIGHT_BAND).floor();
      (ROCKET_MAX_WEIGHT - ROCKET_WEIGHT_STEP * band).max(1.0) as u32
    },
    _ => 0
  }
}

pub fn cash_spawn_weight(cap: Option<f64>) -> u32 {
  match cap {
    Some(c) if c >= CASH_FROM_CAP => {
      let band = ((c.min(CASH_SATURATES_AT) - CASH_FROM_CAP) / WEIGHT_BAND).floor() + 1.0;
      (CASH_BASE_WEIGHT * band).min(CASH_MAX_WEIGHT) as u32
    },
    _ => 0
  }
}

pub fn cash_speed_multiplier(cap: Option<f64>) -> f64 {
  match cap {
    Some(c) if c >= SPEEDUP_FULL_AT => 2.0,
    Some(c) if c >= SPEEDUP_FROM_CAP => 1.0 + (c - SPEEDUP_FROM_CAP) / (SPEEDUP_FULL_AT - SPEEDUP_FROM_CAP),
    _ => 1.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tier_bands_are_closed_low_open_high() {
    assert_eq!(ColorTier::from_cap(None), ColorTier::Loading);
    assert_eq!(ColorTier::from_cap(Some(0.0)), ColorTier::Red);
    assert_eq!(ColorTier::from_cap(Some(59.999)), ColorTier::Red);
    assert_eq!(ColorTier::from_cap(Some(60.0)), ColorTier::Orange);
    assert_eq!(ColorTier::from_cap(Some(90.0)), ColorTier::Green);
    assert_eq!(ColorTier::from_cap(Some(180.0)), ColorTier::Gold);
    assert_eq!(ColorTier::from_cap(Some(300.0)), ColorTier::Platinum);
    assert_eq!(ColorTier::from_cap(Some(499.99)), ColorTier::Platinum);
    assert_eq!(ColorTier::from_cap(Some(500.0)), ColorTier::Diamond);
    assert_eq!(ColorTier::from_cap(Some(999_999.99)), ColorTier::Diamond);
    assert_eq!(ColorTier::from_cap(Some(1_000_000.0)), ColorTier::DiamondShine);
    assert_eq!(ColorTier::from_cap(Some(5e9)).name(), "diamond-shine");
  }

  #[test]
  fn gradients_clip_to_text() {
    assert!(ColorTier::Platinum.text_style().contains("background-clip: text"));
    assert_eq!(ColorTier::Gold.text_style(), "color: gold;");
    assert!(!ColorTier::Loading.is_gradient());
  }

  #[test]
  fn evolution_level_steps_per_threshold_multiple() {
    let t = 30.0;
    assert_eq!(evolution_level(0.0, t), 2);
    assert_eq!(evolution_level(30.0, t), 2);
    assert_eq!(evolution_level(59.9, t), 2);
    assert_eq!(evolution_level(60.0, t), 3);
    assert_eq!(evolution_level(89.9, t), 3);
    assert_eq!(evolution_level(90.0, t), 4);

    let mut last = 0;
    for i in 0..2_000 {
      let level = evolution_level(i as f64 * 0.75, t);
      assert!(level >= last);
      last = level;
    }
  }

  #[test]
  fn levels_beyond_max_reuse_last_image() {
    assert_eq!(image_index(2, 8), 1);
    assert_eq!(image_index(8, 8), 7);
    assert_eq!(image_index(40, 8), 7);
    assert_eq!(image_index(0, 8), 0);
  }

  #[test]
  fn rocket_and_cash_weights_are_exclusive() {
    for i in 0..4_000 {
      let cap = Some(i as f64 * 0.1);
      let (r, c) = (rocket_spawn_weight(cap), cash_spawn_weight(cap));
      assert!(r == 0 || c == 0, "both active at {:?}", cap);
      assert!(r > 0 || c > 0, "neither active at {:?}", cap);
    }
    assert_eq!(rocket_spawn_weight(None), 0);
    assert_eq!(cash_spawn_weight(None), 0);
  }

  #[test]
  fn rocket_weight_fades_in_bands() {
    assert_eq!(rocket_spawn_weight(Some(0.0)), 20);
    assert_eq!(rocket_spawn_weight(Some(14.9)), 20);
    assert_eq!(rocket_spawn_weight(Some(15.0)), 17);
    assert_eq!(rocket_spawn_weight(Some(75.0)), 5);
    assert_eq!(rocket_spawn_weight(Some(89.99)), 5);
    assert_eq!(rocket_spawn_weight(Some(90.0)), 0);
  }

  #[test]
  fn cash_weight_grows_and_saturates() {
    assert_eq!(cash_spawn_weight(Some(89.99)), 0);
    assert_eq!(cash_spawn_weight(Some(90.0)), 20);
    assert_eq!(cash_spawn_weight(Some(105.0)), 40);
    assert_eq!(cash_spawn_weight(Some(299.0)), 280);
    assert_eq!(cash_spawn_weight(Some(300.0)), 300);
    assert_eq!(cash_spawn_weight(Some(50_000.0)), 300);
  }

  #[test]
  fn cash_speed_is_linear_between_bounds() {
    assert_eq!(cash_speed_multiplier(None), 1.0);
    assert_eq!(cash_speed_multiplier(Some(299.0)), 1.0);
    assert_eq!(cash_speed_multiplier(Some(300.0)), 1.0);
    assert_eq!(cash_speed_multiplier(Some(1_000_000.0)), 2.0);
    assert_eq!(cash_speed_multiplier(Some(7e7)), 2.0);

    let mid = (300.0 + 1_000_000.0) / 2.0;
    assert!((cash_speed_multiplier(Some(mid)) - 1.5).abs() < 1e-12);
    let just_below = cash_speed_multiplier(Some(999_999.999));
    assert!(just_below < 2.0 && 2.0 - just_below < 1e-8);
  }

  #[test]
  fn intense_and_shine_cutoffs() {
    assert!(!is_intense(None, 30.0));
    assert!(!is_intense(Some(149.9), 30.0));
    assert!(is_intense(Some(150.0), 30.0));
    assert!(!is_shiny(Some(299.0)));
    assert!(is_shiny(Some(300.0)));
  }

  #[test]
  fn reference_scenario() {
    let cap = Some(60.0);
    assert_eq!(ColorTier::from_cap(cap).name(), "orange");
    assert_eq!(evolution_level(60.0, 30.0), 3);
  }
}
