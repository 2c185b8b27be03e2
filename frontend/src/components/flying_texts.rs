use dioxus::prelude::*;

use crate::utils::{presentation::TransientSet, spawner::ClickBurst};

fn burst_style(b: &ClickBurst) -> String {
  format!(
    "left: {}px; top: {}px; transform: translate(-50%, -50%) scale({}) rotate({}deg); opacity: 1; \
     animation: fffff-fly 1.2s cubic-bezier(.4,1.6,.6,1) forwards, fffff-fade 1.2s linear forwards; \
     animation-delay: 0s, 0s; --fffff-dx: {}px; --fffff-dy: {}px;",
    b.origin_x, b.origin_y, b.scale, b.rotation, b.delta_x, b.delta_y
  )
}

#[component]
pub fn FlyingTexts(bursts: ReadOnlySignal<TransientSet<ClickBurst>>) -> Element {
  let rendered: Vec<(String, String, &'static str)> = bursts.read()
    .iter()
    .map(|live| (live.id.to_string(), burst_style(&live.entity), live.entity.label()))
    .collect();

  rsx! {
    for (key, style, label) in rendered {
      span {
        key: "{key}",
        class: "flying-fffff",
        style: "{style}",
        "{label}"
      }
    }
  }
}
