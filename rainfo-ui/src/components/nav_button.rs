use crate::state::AppState;
use crate::style;
use dioxus::prelude::*;
use rainfo_session::Screen;

/// Title screen button that opens `target`.
#[component]
pub fn NavButton(target: Screen) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "padding-top: 0.5rem;",
            button {
                style: format!("padding: 0 0.5rem; {}", style::BOX),
                onclick: move |_| state.navigate(target),
                {target.heading()}
            }
        }
    }
}
