//! Scrollable list of recorded usages.

use crate::state::AppState;
use crate::style;
use dioxus::prelude::*;

#[component]
pub fn UsageLog() -> Element {
    let state = use_context::<AppState>();
    let usages = state.usages();

    rsx! {
        div {
            style: format!("margin: 2rem 20px 0; text-align: start; {}", style::BOX),
            div {
                style: format!("padding-left: 0.5rem; height: 24px; background-color: {};", style::ACCENT),
                "Log"
            }
            div {
                style: "padding: 0 1.25rem; max-height: 30vh; overflow-y: auto; overflow-x: hidden;",
                for (i, usage) in usages.iter().enumerate() {
                    div {
                        key: "{i}",
                        {usage.log_line()}
                    }
                }
            }
        }
    }
}
