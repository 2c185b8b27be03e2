#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::template::Template;
use dioxus::prelude::*;
use pages::home::Home;

#[derive(Routable, PartialEq, Clone)]
enum Route {
    #[layout(Template)]
    #[route("/")]
    Home {},
    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    rsx! { Router::<Route> {} }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    rsx! {
        div {
            class: "container",
            div {
                class: "error-panel",
                p { class: "error-title", "Page not found" },
                p { class: "error-message", "Nothing lives at {path}." }
            },
            p {
                class: "page-footer",
                Link { to: Route::Home {}, "Back to $REGOVER" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    const WORKSPACE_MANIFEST: &str = include_str!("../../Cargo.toml");
    const CRATE_MANIFEST: &str = include_str!("../Cargo.toml");

    #[test]
    fn build_profiles_live_in_the_workspace_root() {
        for profile in ["[profile.wasm-dev]", "[profile.server-dev]", "[profile.android-dev]"] {
            assert!(WORKSPACE_MANIFEST.contains(profile), "{} missing from workspace root", profile);
            assert!(!CRATE_MANIFEST.contains(profile), "{} would be ignored in the member crate", profile);
        }
    }
}
