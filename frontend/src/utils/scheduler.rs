use std::{future::Future, time::Duration};

/// Fires a tick immediately and then once per interval until the owning task is dropped.
///
/// The sleep primitive is injected: the page passes `async_std::task::sleep`, tests pass
/// tokio's so they can run on a paused clock. A tick never waits on the work it starts,
/// so slow fetches may overlap the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollingScheduler {
  interval: Duration
}

impl PollingScheduler {
  pub fn new(interval: Duration) -> Self {
    PollingScheduler { interval }
  }

  pub async fn run<F, S, Fut>(self, mut tick: F, sleep: S)
  where
    F: FnMut(u64),
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
  {
    let mut tick_no: u64 = 0;
    loop {
      tick(tick_no);
      tick_no = tick_no.wrapping_add(1);
      sleep(self.interval).await;
    }
  }
}
