//! Location text box shared by the title, map and rainfall screens.

use crate::state::AppState;
use crate::style;
use dioxus::prelude::*;

const PLACEHOLDER: &str = "Your state name/code";

#[derive(Props, Clone, PartialEq)]
pub struct LocationInputProps {
    /// Question shown under the text box
    pub prompt: String,
}

/// Text box that stores every edit as the raw session location.
#[component]
pub fn LocationInput(props: LocationInputProps) -> Element {
    let mut state = use_context::<AppState>();
    let location = state.location();

    let on_input = move |evt: Event<FormData>| {
        state.set_location(evt.value());
    };

    rsx! {
        div {
            style: "position: relative; margin-top: 2rem;",
            label {
                "Location:"
                input {
                    r#type: "text",
                    style: format!("margin-left: 0.75rem; padding: 0 0.5rem; width: 50%; {}", style::BOX),
                    placeholder: PLACEHOLDER,
                    value: "{location}",
                    oninput: on_input,
                }
            }
            div {
                style: "padding-top: 0.125rem; font-size: 0.875rem;",
                "^^^ {props.prompt} ^^^"
            }
        }
    }
}
