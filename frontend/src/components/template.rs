use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("/assets/main.css");

  rsx! {
    document::Stylesheet {href: CSS},
    Outlet::<Route> {}
  }
}
