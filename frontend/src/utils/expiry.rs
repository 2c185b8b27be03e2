use dioxus::{logger::tracing::debug, prelude::*};

use super::presentation::{ExpiryTimers, Transient, TransientSet};

/// A live transient collection plus the one-shot timers that expire its entries.
pub struct TransientStore<T: 'static> {
  pub live: Signal<TransientSet<T>>,
  timers: Signal<ExpiryTimers<Task>>
}

impl<T: 'static> Clone for TransientStore<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T: 'static> Copy for TransientStore<T> {}

impl<T: 'static> TransientStore<T> {
  /// Cancels every expiry still waiting and returns how many there were.
  pub fn cancel_pending(&self) -> usize {
    let mut timers = self.timers;
    // the signal may already be gone if the whole scope is torn down
    let Ok(mut pending) = timers.try_write() else {
      return 0;
    };
    if pending.is_empty() {
      return 0;
    }
    let count = pending.len();
    pending.cancel_all();
    count
  }
}

impl<T: Transient + 'static> TransientStore<T> {
  /// Adds the entities and schedules each one's removal after its own lifespan.
  pub fn spawn_all(&self, items: impl IntoIterator<Item = T>) {
    let mut live = self.live;
    let mut timers = self.timers;

    let report = live.write().spawn(items);
    for id in report.evicted {
      timers.write().cancel(id);
    }

    for (id, lifespan) in report.spawned {
      let task = spawn(async move {
        async_std::task::sleep(lifespan).await;
        live.write().expire(id);
        timers.write().settle(id);
      });
      timers.write().insert(id, task);
    }
  }
}

pub fn use_transient_set<T: Transient + 'static>(capacity: Option<usize>) -> TransientStore<T> {
  let live = use_signal(|| TransientSet::new(capacity));
  let timers = use_signal(ExpiryTimers::<Task>::default);
  let store = TransientStore { live, timers };

  use_drop(move || {
    let cancelled = store.cancel_pending();
    if cancelled > 0 {
      debug!("cancelled {} pending expiry timers", cancelled);
    }
  });

  store
}
