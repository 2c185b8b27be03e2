use std::{f64::consts::PI, time::Duration};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::{presentation::Transient, thresholds::{cash_spawn_weight, cash_speed_multiplier, rocket_spawn_weight}};

pub const CLICK_BURST_LIFESPAN: Duration = Duration::from_millis(1_200);
pub const DECORATION_CADENCE: Duration = Duration::from_millis(350);
pub const MAX_LIVE_DECORATIONS: usize = 500;

const ROCKETS_PER_TICK_DIVISOR: f64 = 8.0;
const CASH_PER_TICK_DIVISOR: f64 = 15.0;

/// Source of uniform draws in `[0, 1)`. Kept behind a trait so tests can script it.
pub trait MotionSource {
  fn next_unit(&mut self) -> f64;

  fn between(&mut self, low: f64, high: f64) -> f64 {
    low + self.next_unit() * (high - low)
  }

  fn chance(&mut self, probability: f64) -> bool {
    self.next_unit() < probability
  }
}

pub struct RngMotion(SmallRng);

impl RngMotion {
  pub fn from_seed(seed: u64) -> Self {
    RngMotion(SmallRng::seed_from_u64(seed))
  }

  pub fn from_clock() -> Self {
    Self::from_seed(clock_seed())
  }
}

impl MotionSource for RngMotion {
  fn next_unit(&mut self) -> f64 {
    self.0.random::<f64>()
  }
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
  js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
  std::time::SystemTime::now()
    .duration_since(std::time::UNIX_EPOCH)
    .map(|d| d.as_nanos() as u64)
    .unwrap_or(0)
}

/* Click bursts */

#[derive(Debug, Clone, PartialEq)]
pub struct ClickBurst {
  pub origin_x: f64,
  pub origin_y: f64,
  pub delta_x: f64,
  pub delta_y: f64,
  pub rotation: f64,
  pub scale: f64,
  pub intense: bool
}

impl ClickBurst {
  pub fn label(&self) -> &'static str {
    if self.intense { "Ahhh...Ahh..." } else { "Ffffff..." }
  }
}

impl Transient for ClickBurst {
  fn lifespan(&self) -> Duration {
    CLICK_BURST_LIFESPAN
  }
}

pub fn click_burst(src: &mut impl MotionSource, x: f64, y: f64, intense: bool) -> ClickBurst {
  let angle = src.between(0.0, 2.0 * PI);
  let distance = src.between(400.0, 700.0);
  ClickBurst {
    origin_x: x,
    origin_y: y,
    delta_x: angle.cos() * distance,
    delta_y: angle.sin() * distance,
    rotation: src.between(-30.0, 30.0),
    scale: src.between(1.0, 1.5),
    intense
  }
}

/* Falling decorations */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
  Rocket,
  Cash
}

impl DecorationKind {
  pub fn image_src(&self) -> &'static str {
    match self {
      DecorationKind::Rocket => "/images/rocket.png",
      DecorationKind::Cash => "/images/cash.png",
    }
  }

  pub fn width_px(&self) -> u32 {
    match self {
      DecorationKind::Rocket => 96,
      DecorationKind::Cash => 80,
    }
  }

  pub fn key_prefix(&self) -> char {
    match self {
      DecorationKind::Rocket => 'r',
      DecorationKind::Cash => 'c',
    }
  }

  fn front_probability(&self) -> f64 {
    match self {
      DecorationKind::Rocket => 0.2,
      DecorationKind::Cash => 0.1,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
  Front,
  Back
}

impl Layer {
  pub fn z_index(&self) -> u32 {
    match self {
      Layer::Front => 30,
      Layer::Back => 0,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FallingDecoration {
  pub kind: DecorationKind,
  pub left_percent: f64,
  pub duration_secs: f64,
  pub delay_secs: f64,
  pub rotation: f64,
  pub layer: Layer
}

impl Transient for FallingDecoration {
  fn lifespan(&self) -> Duration {
    Duration::from_secs_f64((self.duration_secs + self.delay_secs).max(0.0))
  }
}

fn decoration(src: &mut impl MotionSource, kind: DecorationKind, speed_multiplier: f64) -> FallingDecoration {
  let left_percent = src.between(0.0, 100.0);
  let duration_secs = src.between(6.0, 12.0) / speed_multiplier;
  let delay_secs = src.between(0.0, 4.0);
  let rotation = src.between(-45.0, 45.0);
  let layer = if src.chance(kind.front_probability()) { Layer::Front } else { Layer::Back };
  FallingDecoration { kind, left_percent, duration_secs, delay_secs, rotation, layer }
}

// a positive weight always yields at least one item per tick
fn per_tick(weight: u32, divisor: f64) -> usize {
  if weight == 0 {
    return 0;
  }
  ((weight as f64 / divisor).round() as usize).max(1)
}

pub fn rockets_per_tick(cap: Option<f64>) -> usize {
  per_tick(rocket_spawn_weight(cap), ROCKETS_PER_TICK_DIVISOR)
}

pub fn cash_per_tick(cap: Option<f64>) -> usize {
  per_tick(cash_spawn_weight(cap), CASH_PER_TICK_DIVISOR)
}

/// Decorations to add on one cadence tick for the current cap.
pub fn decoration_tick(src: &mut impl MotionSource, cap: Option<f64>) -> Vec<FallingDecoration> {
  let rockets = rockets_per_tick(cap);
  let cash = cash_per_tick(cap);
  let mut items = Vec::with_capacity(rockets + cash);

  for _ in 0..rockets {
    items.push(decoration(src, DecorationKind::Rocket, 1.0));
  }
  if cash > 0 {
    let speed = cash_speed_multiplier(cap);
    for _ in 0..cash {
      items.push(decoration(src, DecorationKind::Cash, speed));
    }
  }
  items
}

#[cfg(test)]
pub(crate) mod testing {
  use std::collections::VecDeque;
  use super::MotionSource;

  /// Replays a fixed list of draws, cycling when exhausted.
  pub struct ScriptedMotion {
    draws: VecDeque<f64>
  }

  impl ScriptedMotion {
    pub fn new(draws: &[f64]) -> Self {
      assert!(!draws.is_empty());
      ScriptedMotion { draws: draws.iter().copied().collect() }
    }
  }

  impl MotionSource for ScriptedMotion {
    fn next_unit(&mut self) -> f64 {
      let v = self.draws.pop_front().unwrap_or(0.0);
      self.draws.push_back(v);
      v
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{testing::ScriptedMotion, *};

  #[test]
  fn click_burst_maps_draws_onto_ranges() {
    // angle 0, distance 400, rotation -30, scale 1.0
    let burst = click_burst(&mut ScriptedMotion::new(&[0.0]), 10.0, 20.0, false);
    assert_eq!((burst.origin_x, burst.origin_y), (10.0, 20.0));
    assert!((burst.delta_x - 400.0).abs() < 1e-9);
    assert!(burst.delta_y.abs() < 1e-9);
    assert_eq!(burst.rotation, -30.0);
    assert_eq!(burst.scale, 1.0);
    assert_eq!(burst.label(), "Ffffff...");

    // angle pi, distance 550, rotation 0, scale 1.25
    let burst = click_burst(&mut ScriptedMotion::new(&[0.5]), 0.0, 0.0, true);
    assert!((burst.delta_x + 550.0).abs() < 1e-9);
    assert_eq!(burst.rotation, 0.0);
    assert_eq!(burst.scale, 1.25);
    assert_eq!(burst.label(), "Ahhh...Ahh...");
    assert_eq!(burst.lifespan(), Duration::from_millis(1_200));
  }

  #[test]
  fn seeded_bursts_stay_in_range() {
    let mut rng = RngMotion::from_seed(7);
    for _ in 0..1_000 {
      let b = click_burst(&mut rng, 0.0, 0.0, false);
      let distance = (b.delta_x * b.delta_x + b.delta_y * b.delta_y).sqrt();
      assert!((400.0 - 1e-9..700.0 + 1e-9).contains(&distance), "distance {}", distance);
      assert!((-30.0..30.0).contains(&b.rotation));
      assert!((1.0..1.5).contains(&b.scale));
    }
  }

  #[test]
  fn per_tick_counts_follow_weights() {
    assert_eq!(rockets_per_tick(None), 0);
    assert_eq!(cash_per_tick(None), 0);
    // weight 20 -> round(2.5) = 3
    assert_eq!(rockets_per_tick(Some(0.0)), 3);
    // weight 5 -> round(0.625) = 1
    assert_eq!(rockets_per_tick(Some(80.0)), 1);
    assert_eq!(cash_per_tick(Some(80.0)), 0);
    // weight 20 -> round(1.33) = 1
    assert_eq!(cash_per_tick(Some(90.0)), 1);
    // weight 300 -> 20
    assert_eq!(cash_per_tick(Some(10_000.0)), 20);
    assert_eq!(rockets_per_tick(Some(10_000.0)), 0);
  }

  #[test]
  fn low_cap_tick_spawns_only_rockets() {
    let items = decoration_tick(&mut RngMotion::from_seed(1), Some(10.0));
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|d| d.kind == DecorationKind::Rocket));
    assert!(decoration_tick(&mut RngMotion::from_seed(1), None).is_empty());
  }

  #[test]
  fn cash_falls_faster_at_high_caps() {
    // left 0, duration 12 (draw just under 1), delay 0, rotation -45, layer back
    let mut src = ScriptedMotion::new(&[0.0, 0.999_999, 0.0, 0.0, 0.9]);
    let items = decoration_tick(&mut src, Some(1_000_000.0));
    assert_eq!(items.len(), 20);
    let first = &items[0];
    assert_eq!(first.kind, DecorationKind::Cash);
    assert!(first.duration_secs < 6.0 && first.duration_secs > 5.99);
    assert_eq!(first.layer, Layer::Back);
    assert_eq!(first.rotation, -45.0);
  }

  #[test]
  fn decoration_ranges_and_lifespan() {
    let mut rng = RngMotion::from_seed(42);
    for _ in 0..200 {
      for d in decoration_tick(&mut rng, Some(150.0)) {
        assert!((0.0..100.0).contains(&d.left_percent));
        assert!((6.0..12.0).contains(&d.duration_secs));
        assert!((0.0..4.0).contains(&d.delay_secs));
        assert!((-45.0..45.0).contains(&d.rotation));
        let expected = Duration::from_secs_f64(d.duration_secs + d.delay_secs);
        assert_eq!(d.lifespan(), expected);
      }
    }
  }

  #[test]
  fn front_layer_share_roughly_matches_kind() {
    let mut rng = RngMotion::from_seed(99);
    let rockets: Vec<_> = (0..2_000).flat_map(|_| decoration_tick(&mut rng, Some(0.0))).collect();
    let front = rockets.iter().filter(|d| d.layer == Layer::Front).count() as f64 / rockets.len() as f64;
    assert!((0.15..0.25).contains(&front), "rocket front share {}", front);

    let cash: Vec<_> = (0..500).flat_map(|_| decoration_tick(&mut rng, Some(400.0))).collect();
    let front = cash.iter().filter(|d| d.layer == Layer::Front).count() as f64 / cash.len() as f64;
    assert!((0.06..0.14).contains(&front), "cash front share {}", front);
  }
}
