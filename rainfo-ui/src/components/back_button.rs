//! Home button in the top left corner.

use crate::state::AppState;
use crate::style;
use dioxus::prelude::*;
use rainfo_session::Screen;

/// Returns to the title screen.
#[component]
pub fn BackButton() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            title: "Back",
            style: format!("position: absolute; left: 4px; top: 4px; width: 2.5rem; height: 2.5rem; z-index: 50; {}", style::BOX),
            onclick: move |_| state.navigate(Screen::Title),
            "⌂"
        }
    }
}
