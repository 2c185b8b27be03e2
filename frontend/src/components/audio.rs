use dioxus::prelude::*;

const MUSIC_ID: &str = "bg-music";
const CLICK_ID: &str = "click-sound";
const CLICK_INTENSE_ID: &str = "click-sound-intense";

const SONG_SRC: &str = "/audio/song.mp3";
const CLICK_SRC: &str = "/audio/clicksound.m4a";
const CLICK_INTENSE_SRC: &str = "/audio/clicksound.m4a";

// Browsers may refuse playback until the first user gesture, so play() rejections are swallowed.
fn set_music(on: bool) {
  let volume = if on { 1 } else { 0 };
  document::eval(&format!(r#"
    var music = document.getElementById("{MUSIC_ID}");
    if (music) {{
      music.volume = {volume};
      if ({on} && music.paused) {{ music.play().catch(function() {{}}); }}
      if (!{on} && !music.paused) {{ music.pause(); }}
    }}
  "#));
}

/// Restarts and plays the click sound for the burst variant.
pub fn play_click_sound(intense: bool) {
  let id = if intense { CLICK_INTENSE_ID } else { CLICK_ID };
  document::eval(&format!(r#"
    var sound = document.getElementById("{id}");
    if (sound) {{
      sound.currentTime = 0;
      sound.play().catch(function() {{}});
    }}
  "#));
}

#[component]
pub fn AudioPlayer() -> Element {
  let mut audio_on = use_signal(|| true);

  // runs on mount too, which doubles as the autoplay attempt
  use_effect(move || set_music(audio_on()));

  let label = if audio_on() { "Mute music" } else { "Unmute music" };
  let icon = if audio_on() { "🔊" } else { "🔇" };

  rsx! {
    audio { id: MUSIC_ID, src: SONG_SRC, r#loop: true, autoplay: true, display: "none" }
    audio { id: CLICK_ID, src: CLICK_SRC, preload: "auto", display: "none" }
    audio { id: CLICK_INTENSE_ID, src: CLICK_INTENSE_SRC, preload: "auto", display: "none" }
    button {
      class: "audio-toggle",
      aria_label: label,
      onclick: move |_evt| audio_on.set(!audio_on()),
      "{icon}"
    }
  }
}
