use dioxus::{logger::tracing::{error, info}, prelude::*};

use crate::{
  components::{
    audio::{play_click_sound, AudioPlayer},
    ca_copy_box::CaCopyBox,
    cap_display::MarketCapDisplay,
    dynamic_image::DynamicImage,
    falling_items::FallingItems,
    flying_texts::FlyingTexts,
    status::{ErrorPanel, LoadingSpinner}
  },
  utils::{
    config::AppConfig,
    expiry::use_transient_set,
    format::{current_year, refresh_note},
    presentation::PriceSnapshot,
    price_fetcher::PriceFetcher,
    scheduler::PollingScheduler,
    spawner::{click_burst, ClickBurst, RngMotion},
    thresholds::{evolution_level, is_intense, ColorTier}
  }
};

#[component]
pub fn Home() -> Element {
  let config = use_hook(|| {
    let config = AppConfig::from_build_env();
    if let Err(e) = &config {
      error!("invalid build configuration: {}", e);
    }
    config
  });

  match config {
    Ok(config) => rsx! { EvolvingPage { config } },
    Err(e) => rsx! {
      div {
        class: "container",
        ErrorPanel { message: e.to_string() }
      }
    }
  }
}

#[component]
fn EvolvingPage(config: AppConfig) -> Element {
  let threshold = config.market_cap_threshold;
  let mut snapshot = use_signal(PriceSnapshot::default);
  let bursts = use_transient_set::<ClickBurst>(None);
  let mut motion = use_signal(RngMotion::from_clock);

  // Poll once now, then every interval. Each fetch runs as its own task so a slow
  // response never holds up the schedule.
  let fetcher = use_hook(|| PriceFetcher::from_config(&config));
  let interval = config.update_interval;
  let poller = use_hook(move || spawn(async move {
    info!("polling price every {:?}", interval);
    PollingScheduler::new(interval).run(move |_| {
      let fetcher = fetcher.clone();
      spawn(async move {
        snapshot.write().begin_fetch();
        let result = fetcher.fetch().await;
        if let Err(e) = &result {
          error!("price fetch failed: {}", e);
        }
        snapshot.write().apply_fetch_result(result);
      });
    }, async_std::task::sleep).await;
  }));

  use_drop(move || {
    poller.cancel();
    info!("price polling stopped");
  });

  let on_click = move |evt: MouseEvent| {
    let point = evt.client_coordinates();
    let intense = is_intense(snapshot.peek().capitalization, threshold);
    let burst = click_burst(&mut *motion.write(), point.x, point.y, intense);
    bursts.spawn_all([burst]);
    play_click_sound(intense);
  };

  let snap = snapshot.read().clone();
  let tier = ColorTier::from_cap(snap.capitalization);
  let tier_style = tier.text_style();
  let root_class = format!("app-root tier-{}", tier.name());
  let image_level = snap.capitalization.map(|cap| evolution_level(cap, threshold)).unwrap_or(0);
  let error_message = snap.last_error.clone().unwrap_or_default();
  let refresh = refresh_note(config.update_interval);
  let year = current_year();

  rsx! {
    div {
      class: "{root_class}",
      onclick: on_click,
      AudioPlayer { },
      FlyingTexts { bursts: bursts.live },
      FallingItems { snapshot },
      div {
        class: "container",
        header {
          class: "hero",
          h1 { class: "hero-title", style: "{tier_style}", "$REGOVER" },
          p { class: "hero-tagline", style: "{tier_style}", "The coin that evolves." }
        },
        main {
          div {
            class: "card",
            div {
              class: "cap-row",
              div {
                class: "cap-center",
                MarketCapDisplay { market_cap: snap.capitalization }
              },
              div {
                class: "cap-spinner",
                if snap.is_loading {
                  LoadingSpinner { }
                }
              }
            },
            if snap.shows_error_banner() {
              ErrorPanel { message: error_message }
            } else if image_level > 0 {
              DynamicImage { level: image_level, max_level: config.max_image_level }
            }
          },
          CaCopyBox { address: config.token_address.clone() }
        },
        footer {
          class: "page-footer",
          style: "{tier_style}",
          p { "{refresh}" },
          p { "© {year} Regovernment." }
        }
      }
    }
  }
}
