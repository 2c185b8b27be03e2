use dioxus::prelude::*;

use crate::utils::{format::format_market_cap, thresholds::{is_shiny, ColorTier}};

#[component]
pub fn MarketCapDisplay(market_cap: Option<f64>) -> Element {
  let tier = ColorTier::from_cap(market_cap);
  let tier_style = tier.text_style();
  let shiny = is_shiny(market_cap);
  let figure = format_market_cap(market_cap);

  rsx! {
    div {
      class: "cap-display",
      h2 {
        class: "cap-title",
        style: "{tier_style}",
        "Current Market Cap"
      },
      // the shine class brings its own animated gradient
      if shiny {
        p { class: "cap-figure shine-text", "{figure}" }
      } else {
        p { class: "cap-figure", style: "{tier_style}", "{figure}" }
      }
    }
  }
}
