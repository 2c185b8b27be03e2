use dioxus::{logger::tracing::debug, prelude::*};

use crate::utils::{
  expiry::use_transient_set,
  presentation::PriceSnapshot,
  scheduler::PollingScheduler,
  spawner::{decoration_tick, FallingDecoration, RngMotion, DECORATION_CADENCE, MAX_LIVE_DECORATIONS}
};

fn decoration_style(d: &FallingDecoration) -> String {
  format!(
    "position: fixed; left: {}%; top: -80px; width: {}px; height: auto; z-index: {}; pointer-events: none; \
     animation: falling-item {}s linear {}s forwards, rotate-item {}s linear {}s; \
     transform: rotate({}deg); will-change: transform, top;",
    d.left_percent, d.kind.width_px(), d.layer.z_index(),
    d.duration_secs, d.delay_secs, d.duration_secs, d.delay_secs,
    d.rotation
  )
}

/// Rockets and cash raining down at a density set by the current cap.
#[component]
pub fn FallingItems(snapshot: ReadOnlySignal<PriceSnapshot>) -> Element {
  let items = use_transient_set::<FallingDecoration>(Some(MAX_LIVE_DECORATIONS));
  let mut motion = use_signal(RngMotion::from_clock);

  let cadence = use_hook(move || spawn(async move {
    PollingScheduler::new(DECORATION_CADENCE).run(move |_| {
      let cap = snapshot.peek().capitalization;
      let batch = decoration_tick(&mut *motion.write(), cap);
      if !batch.is_empty() {
        items.spawn_all(batch);
      }
    }, async_std::task::sleep).await;
  }));

  use_drop(move || {
    cadence.cancel();
    debug!("decoration cadence stopped");
  });

  let rendered: Vec<(String, &'static str, String)> = items.live.read()
    .iter()
    .map(|live| (
      format!("{}{}", live.entity.kind.key_prefix(), live.id),
      live.entity.kind.image_src(),
      decoration_style(&live.entity)
    ))
    .collect();

  rsx! {
    for (key, src, style) in rendered {
      img {
        key: "{key}",
        class: "falling-item",
        src: "{src}",
        alt: "",
        style: "{style}",
      }
    }
  }
}
