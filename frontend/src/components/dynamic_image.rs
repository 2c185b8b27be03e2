use dioxus::prelude::*;

use crate::utils::thresholds::image_index;

#[component]
pub fn DynamicImage(level: u32, max_level: u32) -> Element {
  let src = format!("/images/{}.png", image_index(level, max_level) + 1);
  let alt = format!("Regovernment evolution level {}", level);

  rsx! {
    div {
      class: "evolution-frame",
      img {
        class: "evolution-image",
        src: "{src}",
        alt: "{alt}",
      }
    }
  }
}
