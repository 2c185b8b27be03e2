use std::time::Duration;
use dioxus::{logger::tracing::warn, prelude::*};

use crate::utils::server::AppError;

const COPIED_FOR: Duration = Duration::from_millis(2_000);

async fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
  let literal = serde_json::to_string(text).map_err(|e| AppError::ClipboardError(e.to_string()))?;
  document::eval(&format!("await navigator.clipboard.writeText({}); return true;", literal))
    .join::<bool>()
    .await
    .map_err(|e| AppError::ClipboardError(format!("{:?}", e)))?;
  Ok(())
}

#[component]
pub fn CaCopyBox(address: String) -> Element {
  let mut copied = use_signal(|| false);

  let copy_target = address.clone();
  let on_copy = move |_evt: MouseEvent| {
    let address = copy_target.clone();
    async move {
      match copy_to_clipboard(&address).await {
        Ok(()) => {
          copied.set(true);
          async_std::task::sleep(COPIED_FOR).await;
          copied.set(false);
        },
        Err(e) => warn!("copy failed: {}", e)
      }
    }
  };

  let (button_class, button_label) = if copied() {
    ("ca-button ca-button-copied", "Copied!")
  } else {
    ("ca-button", "Copy")
  };

  rsx! {
    div {
      class: "ca-box",
      h3 { class: "ca-title", "Contract Address" },
      div {
        class: "ca-row",
        code { class: "ca-address", "{address}" },
        button {
          class: button_class,
          onclick: on_copy,
          "{button_label}"
        }
      }
    }
  }
}
