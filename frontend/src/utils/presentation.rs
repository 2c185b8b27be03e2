use std::{collections::{HashMap, VecDeque}, fmt, time::Duration};
use dioxus::prelude::Task;

use super::server::AppError;

/* Price snapshot */

/// The one live view of the polled price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSnapshot {
  pub capitalization: Option<f64>,
  pub is_loading: bool,
  pub last_error: Option<String>
}

impl Default for PriceSnapshot {
  fn default() -> Self {
    // the first fetch is issued on mount, so start out loading
    PriceSnapshot { capitalization: None, is_loading: true, last_error: None }
  }
}

impl PriceSnapshot {
  // The previous error is kept while a new fetch is in flight so repeated failures don't flash.
  pub fn begin_fetch(&mut self) {
    self.is_loading = true;
  }

  pub fn apply_fetch_result(&mut self, result: Result<f64, AppError>) {
    match result {
      Ok(cap) => {
        self.capitalization = Some(cap);
        self.last_error = None;
      },
      Err(e) => {
        // stale cap stays on screen
        self.last_error = Some(e.to_string());
      }
    }
    self.is_loading = false;
  }

  /// Errors only take over the page while no cap has ever been obtained.
  pub fn shows_error_banner(&self) -> bool {
    self.last_error.is_some() && self.capitalization.is_none()
  }
}

/* Transient entities */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Anything that removes itself a fixed time after creation.
pub trait Transient {
  fn lifespan(&self) -> Duration;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Live<T> {
  pub id: EntityId,
  pub entity: T
}

#[derive(Debug, Default, PartialEq)]
pub struct SpawnReport {
  /// New ids with the delay after which each must be expired.
  pub spawned: Vec<(EntityId, Duration)>,
  /// Oldest entries pushed out by the capacity limit.
  pub evicted: Vec<EntityId>
}

/// Live collection of transient entities, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientSet<T> {
  next_id: u64,
  capacity: Option<usize>,
  live: VecDeque<Live<T>>
}

impl<T> Default for TransientSet<T> {
  fn default() -> Self {
    Self::new(None)
  }
}

impl<T> TransientSet<T> {
  pub fn new(capacity: Option<usize>) -> Self {
    TransientSet { next_id: 0, capacity, live: VecDeque::new() }
  }

  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.live.len()
  }

  #[cfg(test)]
  pub fn is_empty(&self) -> bool {
    self.live.is_empty()
  }

  #[cfg(test)]
  pub fn contains(&self, id: EntityId) -> bool {
    self.live.iter().any(|l| l.id == id)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Live<T>> {
    self.live.iter()
  }

  /// Removes exactly the entity with this id. Returns false if it is already gone.
  pub fn expire(&mut self, id: EntityId) -> bool {
    match self.live.iter().position(|l| l.id == id) {
      Some(idx) => {
        self.live.remove(idx);
        true
      },
      None => false
    }
  }
}

impl<T: Transient> TransientSet<T> {
  pub fn spawn(&mut self, items: impl IntoIterator<Item = T>) -> SpawnReport {
    let mut report = SpawnReport::default();
    for entity in items {
      let id = EntityId(self.next_id);
      self.next_id += 1;
      report.spawned.push((id, entity.lifespan()));
      self.live.push_back(Live { id, entity });
    }

    if let Some(cap) = self.capacity {
      while self.live.len() > cap {
        if let Some(oldest) = self.live.pop_front() {
          report.evicted.push(oldest.id);
        }
      }
      // an item spawned and evicted in the same batch never needs a timer
      report.spawned.retain(|(id, _)| !report.evicted.contains(id));
    }
    report
  }
}

/* Expiry timers */

pub trait Cancel {
  fn cancel(self);
}

impl Cancel for Task {
  fn cancel(self) {
    Task::cancel(self)
  }
}

/// Pending one-shot removal timers, keyed by the entity they expire.
#[derive(Debug)]
pub struct ExpiryTimers<H: Cancel> {
  pending: HashMap<EntityId, H>
}

impl<H: Cancel> Default for ExpiryTimers<H> {
  fn default() -> Self {
    ExpiryTimers { pending: HashMap::new() }
  }
}

impl<H: Cancel> ExpiryTimers<H> {
  pub fn insert(&mut self, id: EntityId, handle: H) {
    if let Some(previous) = self.pending.insert(id, handle) {
      previous.cancel();
    }
  }

  /// The timer fired on its own; forget the handle.
  pub fn settle(&mut self, id: EntityId) {
    self.pending.remove(&id);
  }

  pub fn cancel(&mut self, id: EntityId) {
    if let Some(handle) = self.pending.remove(&id) {
      handle.cancel();
    }
  }

  pub fn cancel_all(&mut self) {
    for (_, handle) in self.pending.drain() {
      handle.cancel();
    }
  }

  pub fn len(&self) -> usize {
    self.pending.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pending.is_empty()
  }
}
