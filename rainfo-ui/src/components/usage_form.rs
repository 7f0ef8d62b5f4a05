//! Inputs for adding a usage record.

use crate::state::AppState;
use crate::style;
use dioxus::prelude::*;
use rainfo_session::parse_gallons;

/// Task name and gallons inputs with a "+" button that records them.
///
/// The inputs keep their text after a record is added.
#[component]
pub fn UsageForm() -> Element {
    let mut state = use_context::<AppState>();
    let mut name = use_signal(String::new);
    let mut gallons = use_signal(String::new);

    let on_add = move |_: Event<MouseData>| {
        state.record_usage(name(), parse_gallons(&gallons.read()));
    };

    rsx! {
        div {
            style: "margin: 2rem auto 0; width: 200px;",
            input {
                r#type: "text",
                style: format!("width: 66%; padding: 0 0.5rem; {}", style::BOX),
                placeholder: "Name of task",
                value: "{name}",
                oninput: move |evt: Event<FormData>| name.set(evt.value()),
            }
            div {
                style: "padding-top: 0.5rem;",
                input {
                    r#type: "number",
                    style: format!("width: 4rem; padding: 0 0.5rem; {}", style::BOX),
                    placeholder: "Gallons used",
                    value: "{gallons}",
                    oninput: move |evt: Event<FormData>| gallons.set(evt.value()),
                }
                span { style: "padding-left: 0.5rem;", "Gallons" }
            }
            div {
                style: "padding-top: 0.5rem;",
                button {
                    style: format!("width: 2rem; height: 2rem; {}", style::BOX),
                    onclick: on_add,
                    "+"
                }
            }
        }
    }
}
