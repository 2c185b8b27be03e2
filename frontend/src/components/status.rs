use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
  rsx! {
    svg {
      class: "spinner",
      xmlns: "http://www.w3.org/2000/svg",
      fill: "none",
      view_box: "0 0 24 24",
      circle {
        class: "spinner-track",
        cx: "12",
        cy: "12",
        r: "10",
        stroke: "currentColor",
        stroke_width: "4"
      }
      path {
        class: "spinner-head",
        fill: "currentColor",
        d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
      }
    }
  }
}

#[component]
pub fn ErrorPanel(message: String) -> Element {
  rsx! {
    div {
      class: "error-panel",
      p { class: "error-title", "Failed to load data:" },
      p { class: "error-message", "{message}" }
    }
  }
}
